mod cli;
mod commands;
mod config;
mod observability;
mod output;

use anyhow::{Result, anyhow};
use clap::Parser;
use lightbnb_db_postgres::PostgresStorage;
use tracing::info;

use cli::{Cli, Commands};
use commands::Store;
use output::print_error;

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();
    observability::init_tracing();

    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();

    let cfg = config::loader::load_config(cli.config.as_deref()).map_err(|e| anyhow!(e))?;
    observability::apply_logging_level(&cfg.logging.level);

    let pg_config = cfg.database.to_postgres_config();
    info!(
        target = %pg_config.redacted_target(),
        pool_size = pg_config.pool_size,
        "Connecting to database"
    );
    let storage = PostgresStorage::connect(&pg_config).await?;
    let store = Store::new(storage, cli.lenient || cfg.compat.lenient_errors);

    let result = dispatch(&cli.command, &store, &cfg, format).await;
    store.backend().close().await;
    result
}

async fn dispatch(
    command: &Commands,
    store: &Store,
    cfg: &config::AppConfig,
    format: cli::OutputFormat,
) -> Result<()> {
    match command {
        Commands::UserByEmail(args) => commands::users::by_email(store, &args.email, format).await,
        Commands::UserById(args) => commands::users::by_id(store, args.id, format).await,
        Commands::AddUser(args) => commands::users::add(store, args, format).await,
        Commands::Reservations(args) => {
            let limit = cfg.effective_limit(args.limit);
            commands::reservations::list(store, args.guest_id, limit, format).await
        }
        Commands::Search(args) => {
            let limit = cfg.effective_limit(args.limit);
            commands::properties::search(store, args, limit, format).await
        }
        Commands::AddProperty(args) => {
            commands::properties::add(store, args.file.as_deref(), format).await
        }
        Commands::Ping => commands::server::ping(store).await,
    }
}
