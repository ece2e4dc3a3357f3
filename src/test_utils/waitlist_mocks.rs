//! In-memory mock implementations for the waitlist repository and rate
//! limiter traits.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    entities::waitlist_entry::WaitlistEntry,
    infra::rate_limit::RateLimiterTrait,
};

/// In-memory implementation of WaitlistRepo, keyed by normalized email.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    entries: Mutex<HashMap<String, WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let map: HashMap<String, WaitlistEntry> =
            entries.into_iter().map(|e| (e.email.clone(), e)).collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, email: &str) -> bool {
        self.entries.lock().unwrap().contains_key(email)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn get(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self.entries.lock().unwrap().get(email).cloned())
    }

    async fn insert_if_absent(&self, entry: &WaitlistEntry) -> AppResult<bool> {
        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(&entry.email) {
            return Ok(false);
        }
        entries.insert(entry.email.clone(), entry.clone());
        Ok(true)
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.entries.lock().unwrap().values().cloned().collect())
    }
}

/// Repo that fails every call, for store-outage tests.
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn get(&self, _email: &str) -> AppResult<Option<WaitlistEntry>> {
        Err(AppError::Store("connection refused".into()))
    }

    async fn insert_if_absent(&self, _entry: &WaitlistEntry) -> AppResult<bool> {
        Err(AppError::Store("connection refused".into()))
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::Store("connection refused".into()))
    }
}

/// In-memory rate limiter for testing.
/// Uses a HashMap to track request counts per client key.
pub struct InMemoryRateLimiter {
    counts: Mutex<HashMap<String, u64>>,
    max_requests: u64,
}

impl InMemoryRateLimiter {
    pub fn new(max_requests: u64) -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            max_requests,
        }
    }

    /// Create a permissive rate limiter that never blocks (for most tests).
    pub fn permissive() -> Self {
        Self::new(u64::MAX)
    }
}

#[async_trait]
impl RateLimiterTrait for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> AppResult<()> {
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(format!("rate:{key}")).or_insert(0);
        *count += 1;
        if *count > self.max_requests {
            return Err(AppError::RateLimited);
        }
        Ok(())
    }
}
