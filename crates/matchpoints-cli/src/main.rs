use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use matchpoints_cli::cli::Args;
use matchpoints_cli::commands::{execute, load_current};
use matchpoints_cli::config::AppConfig;
use matchpoints_engine::persist::save_to_path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load(&args.config);
    if let Some(save) = args.save {
        config.save_path = save;
    }
    config.validate()?;

    let current = load_current(&config.save_path);
    let outcome = execute(&args.command, current.as_ref(), &config)?;

    if let Some(state) = &outcome.state {
        save_to_path(state, &config.save_path)
            .with_context(|| format!("failed to save {}", config.save_path.display()))?;
    }
    println!("{}", outcome.output);
    Ok(())
}
