use anyhow::Context;
use clap::Parser;
use sequel_model_generator::{
    database_schema::{get_database_schema, SqliteSchemaReader},
    generate,
    header::GenerationStamp,
    GeneratorConfig,
};
use std::{env, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

/// Generate Sequel models for every table of a SQLite database.
#[derive(Parser)]
#[command(name = "sequel-models", version)]
struct Cli {
    /// Database to inspect, e.g. sqlite://app.db
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// TOML file with generator settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the models are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Plugin declared on every model (repeatable, replaces the configured list)
    #[arg(long = "plugin")]
    plugins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if !cli.plugins.is_empty() {
        config.plugins = cli.plugins;
    }

    let reader = SqliteSchemaReader::connect(&cli.database_url)
        .await
        .with_context(|| format!("connecting to {}", cli.database_url))?;

    let tables = get_database_schema(&reader)
        .await
        .context("reading database schema")?;

    let program = env::args().next().unwrap_or_else(|| "sequel-models".into());
    let report = generate(&tables, &config, &GenerationStamp::now(&program))?;

    if report.has_failures() {
        process::exit(1);
    }

    Ok(())
}
