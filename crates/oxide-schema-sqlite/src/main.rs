//! oxide-schema CLI
//!
//! Compares a SQLite database with a declared schema and prints the actions
//! needed to bring the database up to date. Nothing is executed.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_schema::prelude::*;
use oxide_schema_sqlite::{SqliteDialect, SqliteIntrospector, DEFAULT_CATALOG};

/// Schema reconciliation for SQLite databases.
#[derive(Parser)]
#[command(name = "oxide-schema")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (SQLite path or connection string).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:db.sqlite3")]
    database: String,

    /// Catalog (attached schema) to read.
    #[arg(long, default_value = DEFAULT_CATALOG)]
    catalog: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the actions needed to reach the target schema.
    Plan {
        #[command(flatten)]
        input: PlanInput,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the DDL of the plan as a SQL script.
    Sql {
        #[command(flatten)]
        input: PlanInput,
    },

    /// Print the current database schema as JSON.
    Dump,
}

#[derive(clap::Args)]
struct PlanInput {
    /// JSON file with the target schema.
    #[arg(short, long)]
    target: PathBuf,

    /// JSON file with the current schema, instead of reading the database.
    #[arg(short, long)]
    current: Option<PathBuf>,

    /// Also drop tables that are not part of the target schema.
    #[arg(long)]
    drop_tables: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// A plan as written by `plan --format json`.
#[derive(Serialize)]
struct PlanReport<'a> {
    generated_at: DateTime<Utc>,
    dialect: &'static str,
    drop_tables: bool,
    actions: &'a [SchemaUpdateAction],
}

fn load_schema(path: &Path) -> anyhow::Result<Vec<Table>> {
    let json = std::fs::read_to_string(path)?;
    Ok(parse_schema(&json)?)
}

async fn current_schema(cli: &Cli, current: Option<&Path>) -> anyhow::Result<StaticSchema> {
    if let Some(path) = current {
        info!("Reading current schema from {}", path.display());
        return Ok(StaticSchema::new(load_schema(path)?));
    }
    let introspector = SqliteIntrospector::connect(&cli.database, cli.catalog.as_str()).await?;
    info!(
        "Reading current schema from catalog '{}' of {}",
        introspector.catalog(),
        cli.database
    );
    let snapshot = introspector.snapshot().await?;
    info!("Read {} tables", snapshot.tables().len());
    Ok(snapshot)
}

async fn plan(
    cli: &Cli,
    differ: &SchemaDiffer<SqliteDialect>,
    input: &PlanInput,
) -> anyhow::Result<Vec<SchemaUpdateAction>> {
    let target = load_schema(&input.target)?;
    let current = current_schema(cli, input.current.as_deref()).await?;
    let actions = differ.migrate_schema_to(&current, &target, input.drop_tables)?;

    let data_loss = actions.iter().filter(|a| a.data_loss_possible()).count();
    info!(
        "{} action(s) required, {} with possible data loss",
        actions.len(),
        data_loss
    );
    Ok(actions)
}

fn print_text(actions: &[SchemaUpdateAction]) {
    if actions.is_empty() {
        println!("The database is up to date.");
        return;
    }
    for (i, action) in actions.iter().enumerate() {
        println!("{:>3}. {}", i + 1, action);
        for line in action.sql().lines() {
            println!("       {line}");
        }
    }
}

fn print_sql(actions: &[SchemaUpdateAction]) {
    for action in actions {
        println!("-- {action}");
        println!("{};", action.sql());
        println!();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let differ = SchemaDiffer::new(SqliteDialect::new());

    match &cli.command {
        Commands::Plan { input, format } => {
            let actions = plan(&cli, &differ, input).await?;
            match format {
                Format::Text => print_text(&actions),
                Format::Json => {
                    let report = PlanReport {
                        generated_at: Utc::now(),
                        dialect: differ.dialect().name(),
                        drop_tables: input.drop_tables,
                        actions: &actions,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }

        Commands::Sql { input } => {
            let actions = plan(&cli, &differ, input).await?;
            print_sql(&actions);
        }

        Commands::Dump => {
            let current = current_schema(&cli, None).await?;
            let tables = differ.current_schema(&current)?;
            println!("{}", to_json(&tables)?);
        }
    }

    Ok(())
}
