//! Simulate command implementation

use super::{command_error, open_service};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Insert `n` sample books and print a summary
pub async fn simulate(db_path: &Path, n: usize) -> Result<()> {
    let service = open_service(db_path).await?;

    let pb = ProgressBar::new(n as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let created = service
        .simulate(n, |book| {
            pb.set_message(book.title.clone());
            pb.inc(1);
        })
        .await;
    pb.finish_and_clear();
    let created = created.map_err(|e| command_error("Simulate", e))?;

    println!("Created {} sample books", created.len());
    if let (Some(first), Some(last)) = (created.first(), created.last()) {
        println!("  Ids: {} to {}", first.id, last.id);
    }

    Ok(())
}
