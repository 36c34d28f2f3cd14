//! Search command implementation

use super::{command_error, open_service};
use anyhow::Result;
use std::path::Path;

/// Print the books whose `field` contains `value`
pub async fn search(db_path: &Path, field: &str, value: &str, json: bool) -> Result<()> {
    let service = open_service(db_path).await?;

    let books = service
        .search(field, value)
        .await
        .map_err(|e| command_error(&format!("Search on '{}'", field), e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else if books.is_empty() {
        println!("No books found");
    } else {
        for book in &books {
            println!("{}", book);
        }
    }

    Ok(())
}
