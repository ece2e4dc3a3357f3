use async_trait::async_trait;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    entities::waitlist_entry::WaitlistEntry,
};

const KEY_PREFIX: &str = "waitlist:";

/// Redis-backed waitlist store. Entries live under `waitlist:<email>` as
/// JSON strings; the key is the uniqueness constraint.
#[derive(Clone)]
pub struct RedisWaitlistRepo {
    manager: ConnectionManager,
}

impl RedisWaitlistRepo {
    pub fn new(manager: ConnectionManager) -> Self {
        Self { manager }
    }

    fn key(email: &str) -> String {
        format!("{KEY_PREFIX}{email}")
    }
}

#[async_trait]
impl WaitlistRepo for RedisWaitlistRepo {
    async fn get(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let mut conn = self.manager.clone();
        let raw: Option<String> = conn.get(Self::key(email)).await.map_err(AppError::from)?;
        match raw {
            Some(json) => {
                let entry =
                    serde_json::from_str(&json).map_err(|e| AppError::Store(e.to_string()))?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    async fn insert_if_absent(&self, entry: &WaitlistEntry) -> AppResult<bool> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(entry).map_err(|e| AppError::Store(e.to_string()))?;
        // SETNX keeps two concurrent first submissions from both writing.
        let inserted: bool = conn
            .set_nx(Self::key(&entry.email), json)
            .await
            .map_err(AppError::from)?;
        Ok(inserted)
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        let mut conn = self.manager.clone();

        let mut keys: Vec<String> = Vec::new();
        {
            let mut iter = conn
                .scan_match::<_, String>(format!("{KEY_PREFIX}*"))
                .await
                .map_err(AppError::from)?;
            while let Some(key) = iter.next_item().await {
                keys.push(key);
            }
        }

        // MGET with an empty key list is a protocol error.
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let raws: Vec<Option<String>> = conn.mget(&keys).await.map_err(AppError::from)?;
        let mut entries = Vec::with_capacity(raws.len());
        for json in raws.into_iter().flatten() {
            entries.push(serde_json::from_str(&json).map_err(|e| AppError::Store(e.to_string()))?);
        }
        Ok(entries)
    }
}
