use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted signup. Entries are written once and never updated or
/// deleted; the normalized email doubles as the store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// The caller must pass an already normalized (lowercased) email.
    pub fn new(email: String) -> Self {
        Self {
            email,
            joined_at: Utc::now(),
        }
    }
}
