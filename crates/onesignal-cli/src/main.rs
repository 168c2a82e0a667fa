/*
[INPUT]:  CLI arguments, YAML configuration file, ONESIGNAL_* environment
[OUTPUT]: Pretty-printed JSON result of the requested API call
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use onesignal_cli::{Cli, CliConfig, Command, commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Init { output } = &args.command {
        return cli::init::run_init(output.clone());
    }

    let config = CliConfig::load(args.config_path.as_deref()).context("load config")?;
    info!(
        config_path = ?args.config_path,
        dry_run = args.dry_run,
        "configuration loaded"
    );

    let result = commands::run(&args.command, &config, args.dry_run).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("render result")?
    );

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
