use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{GameConfig, RandomSource, SeededRandom, ThreadRandom};
use grid_snake::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Grid-based Snake in the terminal")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file with width, height and tick_interval_ms
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width (overrides the config file)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (overrides the config file)
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // Without a file, stay quiet so log lines do not tear the TUI
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

async fn run_human<R: RandomSource>(config: GameConfig, random: R) -> Result<()> {
    let mut human_mode = HumanMode::new(config, random)?;
    human_mode.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = cli.game_config()?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => match cli.seed {
            Some(seed) => run_human(config, SeededRandom::new(seed)).await?,
            None => run_human(config, ThreadRandom::new()).await?,
        },
    }

    Ok(())
}
