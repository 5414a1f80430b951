use crate::{
    constants::ConstantLiterals, reconstruction::FrameworkKind, search::Convergence,
    search::Rescaling, RescalerError,
};
use config::{Config, Environment, File, FileFormat};
use rescaler_decimal::{DecimalContext, DomainError};
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_CONFIGURATION: &str = include_str!("../../.config/default.toml");

#[derive(Debug, Deserialize)]
pub(crate) struct Configuration {
    pub(crate) global: GlobalConfiguration,
    #[serde(default)]
    pub(crate) constants: ConstantLiterals,
    pub(crate) search: SearchConfiguration,
    pub(crate) reconstruction: ReconstructionConfiguration,
    #[serde(default)]
    pub(crate) logging: LoggingConfiguration,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GlobalConfiguration {
    pub(crate) precision: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchConfiguration {
    pub(crate) rules: Vec<Rescaling>,
    tolerance: String,
    maximum_iterations: usize,
    pub(crate) targets: Vec<String>,
}

impl SearchConfiguration {
    pub(crate) fn convergence(&self, ctx: &DecimalContext) -> Result<Convergence, DomainError> {
        Convergence::new(ctx.parse(&self.tolerance)?, self.maximum_iterations)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReconstructionConfiguration {
    pub(crate) frameworks: Vec<FrameworkKind>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoggingConfiguration {
    pub(crate) directory: Option<PathBuf>,
}

impl Configuration {
    pub(crate) fn build(path: Option<&Path>) -> Result<Self, RescalerError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // The defaults, compiled into the binary
            .add_source(File::from_str(DEFAULT_CONFIGURATION, FileFormat::Toml))
            // Per-mode overrides, optional
            .add_source(File::with_name(&format!(".config/{}", run_mode)).required(false));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let s = builder
            .add_source(Environment::with_prefix("RESCALER").separator("__"))
            .build()?;

        Ok(s.try_deserialize()?)
    }
}
