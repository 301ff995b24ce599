use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "lightbnb")]
#[command(about = "LightBnB CLI: query and update the rental listings database")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the config file
    #[arg(short, long, global = true, env = "LIGHTBNB_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log storage failures and print an empty result instead of exiting with an error
    #[arg(long, global = true)]
    pub lenient: bool,
}

#[derive(Clone, Copy, ValueEnum, Default, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a user by email address
    UserByEmail(UserByEmailArgs),
    /// Look up a user by id
    UserById(UserByIdArgs),
    /// Register a new user
    AddUser(AddUserArgs),
    /// List properties reserved by a guest
    Reservations(ReservationsArgs),
    /// Search property listings
    Search(SearchArgs),
    /// Create a property from a JSON file
    AddProperty(AddPropertyArgs),
    /// Check database connectivity
    Ping,
}

#[derive(clap::Args)]
pub struct UserByEmailArgs {
    /// Email address (exact match)
    pub email: String,
}

#[derive(clap::Args)]
pub struct UserByIdArgs {
    /// User id
    pub id: i32,
}

#[derive(clap::Args)]
pub struct AddUserArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Password hash, stored as given
    #[arg(long)]
    pub password: String,
}

#[derive(clap::Args)]
pub struct ReservationsArgs {
    /// Guest user id
    pub guest_id: i32,
    /// Maximum rows to return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(clap::Args, Default)]
pub struct SearchArgs {
    /// Substring of the city name (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,
    /// Only properties owned by this user
    #[arg(long)]
    pub owner_id: Option<i32>,
    /// Nightly cost must be strictly above this value
    #[arg(long)]
    pub min_price: Option<i64>,
    /// Nightly cost must be strictly below this value
    #[arg(long)]
    pub max_price: Option<i64>,
    /// Average review rating must be at least this value
    #[arg(long)]
    pub min_rating: Option<f64>,
    /// Maximum rows to return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(clap::Args)]
pub struct AddPropertyArgs {
    /// Path to JSON file (reads from stdin if omitted)
    #[arg(long)]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::parse_from([
            "lightbnb",
            "search",
            "--city",
            "Vancouver",
            "--min-price",
            "100",
            "--min-rating",
            "4",
            "--limit",
            "5",
        ]);
        let Commands::Search(args) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(args.city.as_deref(), Some("Vancouver"));
        assert_eq!(args.min_price, Some(100));
        assert_eq!(args.min_rating, Some(4.0));
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.owner_id, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["lightbnb", "user-by-id", "7", "--format", "table", "--lenient"]);
        assert!(matches!(cli.command, Commands::UserById(UserByIdArgs { id: 7 })));
        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.lenient);
    }

    #[test]
    fn test_verify_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
