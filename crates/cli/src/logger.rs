/// Define log format used
///
/// Defaults to `Basic`
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Basic,
    Pretty,
    Json,
}

/// Initializing logging facilities
///
/// Log filtering is read from, in this priority order:
/// - `USERDIR_LOG` env variable, formatted for [tracing_subscriber::EnvFilter]
/// - `RUST_LOG` "standard" env variable, also formatted for [tracing_subscriber::EnvFilter]
///
/// Without any directive only errors are shown.
pub fn init(log_format: LogFormat) {
    use std::env;

    use tracing::Level;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, EnvFilter};

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let fmt_layer = match log_format {
        LogFormat::Basic => fmt_layer.without_time().boxed(),
        LogFormat::Pretty => fmt_layer.pretty().boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    let filter_layer = {
        let directives = env::var("USERDIR_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_default();

        EnvFilter::builder()
            .with_default_directive(Level::ERROR.into())
            .parse_lossy(directives)
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
