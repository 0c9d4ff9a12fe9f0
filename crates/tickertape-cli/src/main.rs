use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tickertape_core::{AppConfig, Direction};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "tickertape")]
#[command(author, version, about = "A scrolling ticker for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/tickertape/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// JSON or TOML file with the items to scroll
    #[arg(short = 'i', long, global = true)]
    items: Option<PathBuf>,

    /// Scroll direction: up, down, left or right
    #[arg(short = 'd', long, global = true)]
    direction: Option<Direction>,

    /// Milliseconds between ticks
    #[arg(long, global = true)]
    delay: Option<u64>,

    /// Reverse the initial item order
    #[arg(short = 'r', long, global = true)]
    reverse: bool,

    /// Start paused
    #[arg(short = 'p', long, global = true)]
    paused: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive ticker
    Run,
    /// Print frames without a terminal UI
    Preview {
        /// Number of ticks to simulate
        #[arg(short = 'n', long, default_value_t = 20)]
        ticks: usize,
        /// Viewport size in cells (width for left/right, height for up/down)
        #[arg(short = 's', long, default_value_t = 40)]
        size: u16,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
    /// Validate an item file and list its items
    Check {
        /// Item file to load
        file: PathBuf,
    },
}

impl Cli {
    /// Fold command line overrides into the loaded config
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ref items) = self.items {
            config.general.items_path = Some(items.clone());
        }
        if let Some(direction) = self.direction {
            config.marquee.direction = direction;
        }
        if let Some(delay) = self.delay {
            config.marquee.tick_delay_ms = delay;
        }
        if self.reverse {
            config.marquee.reverse_initial_order = true;
        }
        if self.paused {
            config.marquee.paused = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)?;
    cli.apply_overrides(&mut config);

    // Handle commands
    match cli.command {
        Some(Commands::Run) | None => {
            // The TUI owns the terminal, so logs go to a file
            logging::init_file(&config)?;
            commands::run::run(config).await
        }
        Some(Commands::Preview { ticks, size }) => {
            logging::init_stderr(&config);
            commands::preview::run(&config, ticks, size)
        }
        Some(Commands::InitConfig { force }) => {
            logging::init_stderr(&config);
            commands::init_config::run(&config_path, force)
        }
        Some(Commands::Check { file }) => {
            logging::init_stderr(&config);
            commands::check::run(&file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "tickertape",
            "--direction",
            "left",
            "--delay",
            "15",
            "--reverse",
            "preview",
            "--ticks",
            "3",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.marquee.direction, Direction::Left);
        assert_eq!(config.marquee.tick_delay_ms, 15);
        assert!(config.marquee.reverse_initial_order);
        assert!(!config.marquee.paused);
        assert!(matches!(cli.command, Some(Commands::Preview { ticks: 3, size: 40 })));
    }

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::parse_from(["tickertape", "-i", "items.json"]);
        assert!(cli.command.is_none());
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.general.items_path, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn test_rejects_unknown_direction() {
        assert!(Cli::try_parse_from(["tickertape", "--direction", "sideways"]).is_err());
    }
}
