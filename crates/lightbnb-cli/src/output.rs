use anyhow::Result;
use colored::Colorize;
use lightbnb_storage::{Property, PropertyListing, User};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::OutputFormat;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// `None` means the lookup found nothing or, in lenient mode, failed.
pub fn print_user(user: Option<&User>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&user),
        OutputFormat::Table => {
            match user {
                Some(user) => println!("{}", users_table(std::slice::from_ref(user))),
                None => println!("No user found."),
            }
            Ok(())
        }
    }
}

pub fn print_properties(properties: Option<&[Property]>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&properties),
        OutputFormat::Table => {
            match properties {
                Some(rows) if !rows.is_empty() => {
                    println!("{}", properties_table(rows));
                    println!("Total: {}", rows.len());
                }
                _ => println!("No properties found."),
            }
            Ok(())
        }
    }
}

pub fn print_listings(listings: Option<&[PropertyListing]>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&listings),
        OutputFormat::Table => {
            match listings {
                Some(rows) if !rows.is_empty() => {
                    println!("{}", listings_table(rows));
                    println!("Total: {}", rows.len());
                }
                _ => println!("No properties found."),
            }
            Ok(())
        }
    }
}

fn users_table(users: &[User]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Email"]);
    for user in users {
        builder.push_record([user.id.to_string(), user.name.clone(), user.email.clone()]);
    }
    builder.build().with(Style::rounded()).to_string()
}

fn properties_table(properties: &[Property]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Title", "City", "Cost/night", "Owner"]);
    for p in properties {
        builder.push_record([
            p.id.to_string(),
            p.title.clone(),
            p.city.clone(),
            p.cost_per_night.to_string(),
            p.owner_id.to_string(),
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

fn listings_table(listings: &[PropertyListing]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Title", "City", "Cost/night", "Avg rating"]);
    for l in listings {
        let rating = l
            .average_rating
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "-".to_string());
        builder.push_record([
            l.property.id.to_string(),
            l.property.title.clone(),
            l.property.city.clone(),
            l.property.cost_per_night.to_string(),
            rating,
        ]);
    }
    builder.build().with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property() -> Property {
        Property {
            id: 3,
            owner_id: 2,
            title: "Habit mix".into(),
            description: "description".into(),
            thumbnail_photo_url: "https://example.com/t.jpg".into(),
            cover_photo_url: "https://example.com/c.jpg".into(),
            cost_per_night: 4600,
            parking_spaces: 0,
            number_of_bathrooms: 1,
            number_of_bedrooms: 1,
            country: "Canada".into(),
            street: "1 Main St".into(),
            city: "Vancouver".into(),
            province: "British Columbia".into(),
            post_code: "V5K 0A1".into(),
            active: true,
        }
    }

    #[test]
    fn test_listings_table_formats_rating() {
        let table = listings_table(&[
            PropertyListing {
                property: property(),
                average_rating: Some(4.0),
            },
            PropertyListing {
                property: Property {
                    id: 5,
                    ..property()
                },
                average_rating: None,
            },
        ]);
        assert!(table.contains("Avg rating"));
        assert!(table.contains("Habit mix"));
        assert!(table.contains("4.00"));
        assert!(table.contains(" - "));
    }

    #[test]
    fn test_users_table_omits_password() {
        let table = users_table(&[User {
            id: 1,
            name: "Devin Sanders".into(),
            email: "tristanjacobs@gmail.com".into(),
            password: "secret-hash".into(),
        }]);
        assert!(table.contains("tristanjacobs@gmail.com"));
        assert!(!table.contains("secret-hash"));
    }

    #[test]
    fn test_properties_table_has_row_per_property() {
        let table = properties_table(&[property(), Property { id: 9, ..property() }]);
        assert!(table.contains("4600"));
        assert_eq!(table.matches("Habit mix").count(), 2);
    }
}
