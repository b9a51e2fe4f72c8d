use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_regroup::{
    config::Config,
    pipeline::{OutputTarget, Pipeline},
};

#[derive(Parser)]
#[command(name = "m3u-regroup")]
#[command(version)]
#[command(about = "Regroup an M3U playlist by region, country and genre")]
#[command(long_about = None)]
struct Cli {
    /// Source M3U playlist
    #[arg(short, long, value_name = "PATH", required_unless_present = "print_default_config")]
    input: Option<PathBuf>,

    /// Destination playlist, or `-` for stdout
    #[arg(short, long, value_name = "PATH", required_unless_present = "print_default_config")]
    output: Option<PathBuf>,

    /// Favorite channel patterns, one case-insensitive regex per line
    #[arg(short, long, value_name = "PATH")]
    favorites: Option<PathBuf>,

    /// Append a [UHD]/[FHD]/[HD]/[SD] tag to every channel name
    #[arg(long, alias = "append_resolution_tag")]
    append_resolution_tag: bool,

    /// TOML file overriding labels and lookup tables
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,

    /// Print the built-in configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `-o -` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("m3u_regroup={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.print_default_config {
        print!("{}", Config::default().to_toml_string()?);
        return Ok(());
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        anyhow::bail!("--input and --output are required");
    };

    let mut config = Config::resolve(cli.config.as_deref())?;

    // Override config with CLI arguments
    if let Some(favorites) = cli.favorites {
        config.favorites_path = Some(favorites);
    }
    if cli.append_resolution_tag {
        config.append_resolution_tag = true;
    }

    info!(
        "Regrouping {} (favorites: {:?}, resolution tags: {})",
        input.display(),
        config.favorites_path,
        config.append_resolution_tag
    );

    let pipeline = Pipeline::from_config(&config)?;
    pipeline
        .run(&input, &OutputTarget::from_arg(&output))
        .with_context(|| format!("failed to regroup {}", input.display()))?;

    Ok(())
}
