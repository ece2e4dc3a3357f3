use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    entities::waitlist_entry::WaitlistEntry,
};

/// Port to the key-value store holding waitlist entries, keyed by
/// normalized email.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn get(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;

    /// Atomic insert-if-absent. Returns false when the key already exists,
    /// which closes the race between two concurrent first submissions.
    async fn insert_if_absent(&self, entry: &WaitlistEntry) -> AppResult<bool>;

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Joined,
    AlreadyJoined,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self, raw_email: &str) -> AppResult<SubmitOutcome> {
        if !is_valid_email(raw_email) {
            return Err(AppError::InvalidInput("A valid email is required.".into()));
        }

        let normalized = raw_email.to_lowercase();

        if self.repo.get(&normalized).await?.is_some() {
            return Ok(SubmitOutcome::AlreadyJoined);
        }

        let entry = WaitlistEntry::new(normalized);
        if !self.repo.insert_if_absent(&entry).await? {
            // Lost a concurrent first-submission race; the other writer won.
            return Ok(SubmitOutcome::AlreadyJoined);
        }

        tracing::info!(email = %entry.email, "added to waitlist");
        Ok(SubmitOutcome::Joined)
    }

    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list_all().await
    }
}
