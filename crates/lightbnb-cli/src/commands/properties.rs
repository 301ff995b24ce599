use anyhow::{Context, Result};
use lightbnb_storage::{NewProperty, PropertySearchOptions};
use std::io::Read;

use super::Store;
use crate::cli::{OutputFormat, SearchArgs};
use crate::output::{print_listings, print_properties, print_success};

pub fn search_options(args: &SearchArgs) -> PropertySearchOptions {
    PropertySearchOptions {
        city: args.city.clone(),
        owner_id: args.owner_id,
        minimum_price_per_night: args.min_price,
        maximum_price_per_night: args.max_price,
        minimum_rating: args.min_rating,
    }
}

pub async fn search(store: &Store, args: &SearchArgs, limit: u32, format: OutputFormat) -> Result<()> {
    let options = search_options(args);
    tracing::debug!(
        filters = options.active_filter_count(),
        limit,
        "Searching properties"
    );
    let listings = store.properties(&options, limit).await?;
    print_listings(listings.as_deref(), format)
}

pub async fn add(store: &Store, file: Option<&str>, format: OutputFormat) -> Result<()> {
    let body = read_input(file)?;
    let new_property: NewProperty =
        serde_json::from_str(&body).context("Invalid property JSON")?;
    let created = store.add_property(&new_property).await?;
    if let Some(ref property) = created
        && format == OutputFormat::Table
    {
        print_success(&format!("Created property {} ({})", property.id, property.title));
    }
    print_properties(created.as_ref().map(std::slice::from_ref), format)
}

fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
