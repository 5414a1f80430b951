use std::path::Path;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Creates a subscriber which writes to `console::Term::stderr` and, when a directory is given, to
/// a JSON log file `rescaler.log` located in it.
///
/// Reports go to stdout, so logs are kept on stderr. The returned guard flushes the file writer
/// when dropped and must be held until the program exits.
pub(crate) fn get_subscriber(
    env_filter: super::LogLevel,
    directory: Option<&Path>,
) -> (impl Subscriber + Send + Sync, Option<WorkerGuard>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter.to_string()));

    let fmt_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(console::Term::stderr)
        .without_time();

    let (json_layer, guard) = match directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::never(directory, "rescaler.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::Layer::new()
                .with_writer(non_blocking)
                .json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    (
        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .with(json_layer),
        guard,
    )
}

pub(crate) fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> color_eyre::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
