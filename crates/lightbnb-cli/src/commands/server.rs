use anyhow::Result;
use colored::Colorize;

use super::Store;
use crate::output::print_success;

pub async fn ping(store: &Store) -> Result<()> {
    let backend = store.backend();
    backend.ping().await?;
    print_success(&format!(
        "{} reachable ({} open connections)",
        "Database".cyan(),
        backend.pool().size()
    ));
    Ok(())
}
