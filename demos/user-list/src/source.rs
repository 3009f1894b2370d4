//! Where the user list comes from.

use crate::types::User;
use futures::future::BoxFuture;
use std::path::PathBuf;
use thiserror::Error;

/// Why a fetch failed
///
/// The `Display` output is what the list shows in its error state.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The data could not be read
    #[error("Failed to fetch users: {0}")]
    Io(#[from] std::io::Error),

    /// The data was read but is not a list of users
    #[error("Invalid user data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The source reported a failure of its own
    #[error("{0}")]
    Status(String),
}

/// Supplies the list of users
///
/// Returns a boxed future so sources can be used as `Arc<dyn UserSource>`.
pub trait UserSource: Send + Sync {
    /// Fetch every user, in display order
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the users cannot be produced.
    fn fetch_users(&self) -> BoxFuture<'_, Result<Vec<User>, FetchError>>;
}

/// Reads users from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl UserSource for JsonFileSource {
    fn fetch_users(&self) -> BoxFuture<'_, Result<Vec<User>, FetchError>> {
        Box::pin(async move {
            let bytes = tokio::fs::read(&self.path).await?;
            let users: Vec<User> = serde_json::from_slice(&bytes)?;
            tracing::debug!(
                path = %self.path.display(),
                count = users.len(),
                "users read from file"
            );
            Ok(users)
        })
    }
}
