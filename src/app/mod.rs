/// This module governs the high-level running of a calculation
mod calculations;
mod configuration;
mod report;
mod styles;
mod telemetry;

pub(crate) use configuration::Configuration;
pub(crate) use styles::Styles;

use crate::{constants::ConstantSet, reconstruction::FrameworkKind};
use clap::{ArgEnum, Parser, Subcommand};
use console::Term;
use rescaler_decimal::DecimalContext;
use std::{fmt, path::PathBuf};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// An additional configuration file, layered over the defaults
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search for unit scale factors matching each configured target
    Search,
    /// Rebuild derived constants from unit scaling factors
    Reconstruct {
        /// Reconstruct a single framework instead of those configured
        #[clap(arg_enum, short, long)]
        framework: Option<Framework>,
    },
    /// Run the search sweep, then the reconstructions
    All,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.pad(level)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ArgEnum)]
enum Framework {
    LengthMass,
    QuantumOfMass,
}

impl From<Framework> for FrameworkKind {
    fn from(framework: Framework) -> Self {
        match framework {
            Framework::LengthMass => FrameworkKind::LengthMass,
            Framework::QuantumOfMass => FrameworkKind::QuantumOfMass,
        }
    }
}

/// Parse the command line, load the configuration and run the requested calculations
pub fn run() -> color_eyre::Result<()> {
    let cli = App::parse();

    let config = Configuration::build(cli.config.as_deref())?;

    let (subscriber, _guard) =
        telemetry::get_subscriber(cli.log_level, config.logging.directory.as_deref());
    telemetry::init_subscriber(subscriber)?;
    tracing::info!(precision = config.global.precision, "Loaded configuration");

    let ctx = DecimalContext::new(config.global.precision)?;
    let constants = ConstantSet::from_literals(&config.constants, &ctx)?;
    let term = Term::stdout();
    let styles = Styles::for_stdout();

    let reconstruct = |frameworks: &[FrameworkKind]| {
        calculations::run_reconstructions(frameworks, &constants, &ctx, &term, &styles)
    };

    match cli.command.unwrap_or(Command::All) {
        Command::Search => {
            calculations::run_search_sweep(&config.search, &constants, &ctx, &term, &styles)?
        }
        Command::Reconstruct {
            framework: Some(framework),
        } => reconstruct(&[FrameworkKind::from(framework)])?,
        Command::Reconstruct { framework: None } => {
            reconstruct(config.reconstruction.frameworks.as_slice())?
        }
        Command::All => {
            calculations::run_search_sweep(&config.search, &constants, &ctx, &term, &styles)?;
            reconstruct(config.reconstruction.frameworks.as_slice())?
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{App, Command, Framework, LogLevel};
    use clap::Parser;

    #[test]
    fn no_arguments_runs_everything_at_info() {
        let app = App::try_parse_from(["rescaler"]).unwrap();
        assert_eq!(app.log_level, LogLevel::Info);
        assert!(app.command.is_none());
        assert!(app.config.is_none());
    }

    #[test]
    fn reconstruct_accepts_a_framework() {
        let app = App::try_parse_from([
            "rescaler",
            "-l",
            "debug",
            "reconstruct",
            "--framework",
            "quantum-of-mass",
        ])
        .unwrap();
        assert_eq!(app.log_level, LogLevel::Debug);
        assert!(matches!(
            app.command,
            Some(Command::Reconstruct {
                framework: Some(Framework::QuantumOfMass)
            })
        ));
    }

    #[test]
    fn log_levels_render_as_filter_directives() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}
