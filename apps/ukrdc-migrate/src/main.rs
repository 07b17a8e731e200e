//! Applies or rolls back the schema of one UKRDC database.
//!
//! ```text
//! ukrdc-migrate [--config ukrdc.yaml] <ukrdc|empi|errorsdb|stats|xmlarchive> <up|down|status|fresh>
//! ```
//!
//! Connection settings come from the optional YAML file and `UKRDC__*`
//! environment variables, e.g. `UKRDC__EMPI__URL=postgres://...`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ukrdc_orm::{Config, LogicalDatabase, MigrationCommand};

#[derive(Parser)]
#[command(name = "ukrdc-migrate")]
#[command(about = "Apply UKRDC schema migrations")]
struct Cli {
    /// YAML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Database to migrate
    database: Database,

    /// Migration command
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Database {
    Ukrdc,
    Empi,
    Errorsdb,
    Stats,
    Xmlarchive,
}

impl From<Database> for LogicalDatabase {
    fn from(value: Database) -> Self {
        match value {
            Database::Ukrdc => LogicalDatabase::Ukrdc,
            Database::Empi => LogicalDatabase::Empi,
            Database::Errorsdb => LogicalDatabase::Errors,
            Database::Stats => LogicalDatabase::Stats,
            Database::Xmlarchive => LogicalDatabase::XmlArchive,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Command {
    /// Apply all pending migrations
    Up,
    /// Roll back the last migration
    Down,
    /// Show applied and pending migrations
    Status,
    /// Drop all tables and re-apply every migration
    Fresh,
}

impl From<Command> for MigrationCommand {
    fn from(value: Command) -> Self {
        match value {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Status => MigrationCommand::Status,
            Command::Fresh => MigrationCommand::Fresh,
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json);

    let config = Config::load(cli.config.as_deref())?;
    let database = LogicalDatabase::from(cli.database);
    let db = ukrdc_orm::connect(config.database(database)).await?;

    ukrdc_orm::migrate(&db, database, cli.command.into()).await?;
    tracing::info!(%database, "done");
    Ok(())
}
