use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::Command;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "vpf-records")]
#[command(about = "Vietnam Powerlifting Federation records and results", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("vpf_records={log_level},storage={log_level},records={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env(cli.database_url).context("Failed to load configuration")?;
    tracing::debug!("Record policy: {:?}", config.policy);

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::connect(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;

    let outcome = commands::execute(cli.command, &db, config.policy).await?;
    println!("{}", outcome.body);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
