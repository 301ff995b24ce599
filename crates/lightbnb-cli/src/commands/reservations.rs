use anyhow::Result;

use super::Store;
use crate::cli::OutputFormat;
use crate::output::print_properties;

pub async fn list(store: &Store, guest_id: i32, limit: u32, format: OutputFormat) -> Result<()> {
    let properties = store.reservations(guest_id, limit).await?;
    print_properties(properties.as_deref(), format)
}
