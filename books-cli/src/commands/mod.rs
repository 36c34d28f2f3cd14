//! CLI command implementations

mod search;
mod serve;
mod simulate;

pub use search::search;
pub use serve::serve;
pub use simulate::simulate;

use anyhow::{anyhow, Context, Result};
use books_core::{BookService, BookStore, ServiceError, SqliteStore};
use std::path::Path;
use std::sync::Arc;

/// Open the catalog database and return a service over it
async fn open_service(db_path: &Path) -> Result<BookService> {
    let store = SqliteStore::open(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    store
        .ensure_schema()
        .await
        .context("Failed to create the books table")?;
    Ok(BookService::new(Arc::new(store)))
}

/// Turn a service failure into a CLI error, keeping storage internals in the log
fn command_error(action: &str, err: ServiceError) -> anyhow::Error {
    match err {
        ServiceError::Storage(e) => {
            tracing::error!("{} failed: {}", action, e);
            anyhow!("{} failed: internal storage error", action)
        }
        other => anyhow::Error::new(other).context(format!("{} failed", action)),
    }
}
