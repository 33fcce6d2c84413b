use std::path::{Path, PathBuf};
use std::time::Duration;

use cardstack_core::{Size, StackConfig};
use clap::{Args, Parser, Subcommand};

use crate::error::{HarnessError, Result};
use crate::logging;
use crate::replay::{ReplayOptions, ReplayReport, replay};
use crate::script::GestureScript;

#[derive(Debug, Parser)]
#[command(
    name = "cardstack-harness",
    about = "Replay gesture scripts against the cardstack motion engine",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a JSON gesture script and print the resulting report.
    Replay(ReplayArgs),

    /// Print the default engine configuration as JSON.
    #[command(name = "default-config")]
    DefaultConfig,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Gesture script (JSON).
    #[arg(long)]
    pub script: PathBuf,

    /// Engine configuration (JSON). Missing fields take their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 1080.0)]
    pub width: f64,

    #[arg(long, default_value_t = 1920.0)]
    pub height: f64,

    /// Number of items in the stack.
    #[arg(long, default_value_t = 5)]
    pub items: u32,

    /// Recycle swept items to the back of the stack.
    #[arg(long)]
    pub infinite: bool,

    /// Simulated frame interval.
    #[arg(long = "frame-ms", default_value_t = 16)]
    pub frame_ms: u64,

    /// Emit logs as JSON lines on stderr.
    #[arg(long = "json-logs")]
    pub json_logs: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Replay(args) => {
            logging::init(args.json_logs);
            let report = execute_replay(&args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Commands::DefaultConfig => {
            println!("{}", serde_json::to_string_pretty(&StackConfig::default())?);
            Ok(())
        }
    }
}

/// Load a configuration file and reject invalid values.
pub fn load_config(path: &Path) -> Result<StackConfig> {
    let text = std::fs::read_to_string(path).map_err(|err| HarnessError::io(path, err))?;
    let config: StackConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

pub fn execute_replay(args: &ReplayArgs) -> Result<ReplayReport> {
    let script = GestureScript::load(&args.script)?;
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => StackConfig::default(),
    };
    if args.infinite {
        config.infinite = true;
    }

    let options = ReplayOptions {
        size: Size::new(args.width, args.height),
        items: args.items,
        frame: Duration::from_millis(args.frame_ms),
        ..ReplayOptions::default()
    };
    replay(&script, config, &options)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands, run};

    #[test]
    fn default_config_dispatches_successfully() {
        let result = run(Cli {
            command: Commands::DefaultConfig,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn replay_arguments_parse_with_defaults() {
        let cli = Cli::try_parse_from(["cardstack-harness", "replay", "--script", "s.json"])
            .expect("parse");
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.width, 1080.0);
        assert_eq!(args.height, 1920.0);
        assert_eq!(args.items, 5);
        assert_eq!(args.frame_ms, 16);
        assert!(!args.infinite);
        assert!(args.config.is_none());
    }

    #[test]
    fn replay_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "cardstack-harness",
            "replay",
            "--script",
            "s.json",
            "--width",
            "400",
            "--items",
            "2",
            "--infinite",
            "--frame-ms",
            "8",
            "--json-logs",
        ])
        .expect("parse");
        let Commands::Replay(args) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.width, 400.0);
        assert_eq!(args.items, 2);
        assert_eq!(args.frame_ms, 8);
        assert!(args.infinite && args.json_logs);
    }

    #[test]
    fn missing_script_is_an_io_error() {
        let cli = Cli::try_parse_from([
            "cardstack-harness",
            "replay",
            "--script",
            "/nonexistent/cardstack/script.json",
        ])
        .expect("parse");
        let err = run(cli).expect_err("missing file");
        assert_eq!(err.exit_code(), 1);
    }
}
