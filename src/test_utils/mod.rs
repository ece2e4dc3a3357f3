//! Test utilities for integration testing.
//!
//! This module provides:
//! - In-memory repository and rate-limiter implementations for mocking
//! - A builder for constructing `AppState` with test dependencies

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
