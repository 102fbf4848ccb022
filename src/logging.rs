use std::error::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::SubscriberBuilder;

#[inline]
pub fn init_logger(level: Option<LevelFilter>) -> Result<(), Box<dyn Error + Send + Sync>> {
    init_logger_with_customization(|builder| {
        builder.with_max_level(level.unwrap_or_else(|| LevelFilter::WARN))
    })
}

/// Traces everything this crate emits (region clamping, scene bookkeeping) while keeping
/// `level` for all other targets. `RUST_LOG` is not consulted.
#[cfg(feature = "tracing-subscriber-env-filter")]
pub fn init_logger_for_crate(level: LevelFilter) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .parse(format!("{}=trace", env!("CARGO_PKG_NAME").replace('-', "_")))?;

    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
}

pub fn init_logger_with_customization(
    f: impl FnOnce(SubscriberBuilder) -> SubscriberBuilder,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    f(tracing_subscriber::fmt()
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE))
    .try_init()
}
