#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `RUST_LOG`
/// (default `wordsolve_core=info`). `json` switches to JSON lines with span
/// close events.
#[cfg(feature = "trace")]
pub fn init_tracing(json: bool) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wordsolve_core=info"));
        let builder = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(filter);
        if json {
            builder.json().with_span_events(FmtSpan::CLOSE).init();
        } else {
            builder.init();
        }
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_json: bool) {}
