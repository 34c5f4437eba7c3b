use crate::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Access log line, `%{x-request-id}o` picks up the id set by the request id middleware.
pub const ACCESS_LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms request_id=%{x-request-id}o"#;

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "flight_tracker_backend=debug,actix_web=info"
    } else {
        "flight_tracker_backend=info,actix_web=info"
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over the defaults when set.
pub fn init_logger(format: LogFormat, verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod logging_tests {
    use super::*;

    #[test]
    fn test_verbose_raises_crate_level() {
        assert!(default_directives(true).starts_with("flight_tracker_backend=debug"));
        assert!(default_directives(false).starts_with("flight_tracker_backend=info"));
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
    }
}
