use log::{debug, info};
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("anime_search_lib", log::LevelFilter::Debug)
            .filter_module("anime_search", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_env("RUST_LOG")
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let target = record.target();
                // anime_search_lib::modules::search::application -> [search]
                match target
                    .strip_prefix("anime_search_lib::modules::")
                    .and_then(|s| s.split("::").next())
                {
                    Some(module) => writeln!(
                        buf,
                        "[{} {}] [{}] {}",
                        buf.timestamp_seconds(),
                        record.level(),
                        module,
                        record.args()
                    ),
                    None => writeln!(
                        buf,
                        "[{} {}] {}",
                        buf.timestamp_seconds(),
                        record.level(),
                        record.args()
                    ),
                }
            })
            .init();

        debug!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log API calls
    pub fn api_call(provider: &str, endpoint: &str, status: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => info!(
                "API: {} {} {} in {}ms",
                provider, endpoint, status, duration
            ),
            None => debug!("API: Starting {} {}", provider, endpoint),
        }
    }

    /// Log search operations
    pub fn search_operation(query: &str, provider: Option<&str>, results: Option<usize>) {
        match (provider, results) {
            (Some(p), Some(r)) => info!("Search: '{}' via {} returned {} results", query, p, r),
            (Some(p), None) => debug!("Search: Starting '{}' via {}", query, p),
            (None, Some(r)) => info!("Search: '{}' returned {} results", query, r),
            (None, None) => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        log::error!("{}: {}", context, error);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        info!(
            "Performance: {} took {}ms ({})",
            self.operation, duration, info
        );
        duration
    }
}
