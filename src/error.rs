use crate::search::SearchError;
use miette::Diagnostic;
use rescaler_decimal::DomainError;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Top level error for a rescaler run
pub enum RescalerError {
    /// A convergence search failed
    #[error(transparent)]
    Search(#[from] SearchError),
    /// A decimal operation received an input outside its domain
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The layered configuration could not be built or deserialized
    #[error("Failed to load the configuration: {0}")]
    #[diagnostic(
        code(rescaler::configuration),
        help(
            "check `.config/default.toml`, any file passed with `--config` and `RESCALER__*` \
             variables"
        )
    )]
    Config(#[from] config::ConfigError),
    /// Writing the report failed
    #[error("IO Failure: {0}")]
    #[diagnostic(code(rescaler::io))]
    Io(#[from] std::io::Error),
}
