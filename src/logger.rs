pub use tracing::{debug, error, info, warn, trace, instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let span_events = if wants_span_timings(&env_filter.to_string()) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn wants_span_timings(filter: &str) -> bool {
    filter.contains("debug")
        || filter.contains("trace")
        || std::env::var("RUST_LOG").unwrap_or_default().contains("debug")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_filters_enable_span_timings() {
        assert!(wants_span_timings("cvd_simulator=debug"));
        assert!(wants_span_timings("trace"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
        info!("logger initialized");
    }
}
