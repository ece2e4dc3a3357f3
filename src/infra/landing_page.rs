use std::path::PathBuf;

use crate::app_error::{AppError, AppResult};

const PLACEHOLDER_HTML: &str =
    "<html><body><h1>Server Error</h1><p>Could not load page content.</p></body></html>";

/// Landing page source. In cached mode the file is read once at startup and
/// a read failure degrades to a placeholder page instead of crashing the
/// process; otherwise every request reads the file fresh from disk.
pub struct LandingPage {
    path: PathBuf,
    cached: Option<String>,
}

impl LandingPage {
    pub async fn load(path: impl Into<PathBuf>, cache: bool) -> Self {
        let path = path.into();
        let cached = if cache {
            match tokio::fs::read_to_string(&path).await {
                Ok(html) => {
                    tracing::info!(path = %path.display(), "landing page cached");
                    Some(html)
                }
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        path = %path.display(),
                        "could not read landing page at startup, serving placeholder"
                    );
                    Some(PLACEHOLDER_HTML.to_string())
                }
            }
        } else {
            None
        };
        Self { path, cached }
    }

    /// Build a pre-cached page without touching the filesystem.
    pub fn from_cached(html: impl Into<String>) -> Self {
        Self {
            path: PathBuf::new(),
            cached: Some(html.into()),
        }
    }

    pub async fn render(&self) -> AppResult<String> {
        if let Some(html) = &self.cached {
            return Ok(html.clone());
        }
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Internal(format!("could not read landing page: {e}")))
    }
}
