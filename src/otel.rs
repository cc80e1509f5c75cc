//! Structured logging setup
//!
//! Installs a `tracing` subscriber with:
//! - JSON (production) or pretty (development) output
//! - `EnvFilter` directives from `RUST_LOG` or the configured level
//! - Optional sampling of low-severity events
//! - Optional non-blocking writer for minimal latency impact
//!
//! Span export is not wired up. Output goes to stderr so that command output
//! on stdout stays machine-readable.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context as LayerContext, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Which events reach the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingMode {
    /// Everything that passes the level filter
    All,
    /// Only WARN and ERROR
    ErrorOnly,
    /// Every WARN and ERROR, one in `1 / rate` of the rest
    Sampled,
}

impl SamplingMode {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error-only" | "error_only" => SamplingMode::ErrorOnly,
            "sampled" => SamplingMode::Sampled,
            _ => SamplingMode::All,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    pub sampling_mode: SamplingMode,
    /// 0.0-1.0, used by [`SamplingMode::Sampled`]
    pub sampling_rate: f64,
    /// Write through a background thread
    pub async_logging: bool,
    /// Extra comma-separated `EnvFilter` directives
    pub target_filter: Option<String>,
    /// Include file:line (dev only)
    pub include_location: bool,
}

impl LogConfig {
    /// Read `HATEOAS_LOG_*` variables, falling back to production defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default_prod();
        Self {
            log_level: env::var("HATEOAS_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: env::var("HATEOAS_LOG_FORMAT")
                .map_or(defaults.format, |s| LogFormat::parse(&s)),
            sampling_mode: env::var("HATEOAS_LOG_SAMPLING_MODE")
                .map_or(defaults.sampling_mode, |s| SamplingMode::parse(&s)),
            sampling_rate: env_parse("HATEOAS_LOG_SAMPLING_RATE").unwrap_or(defaults.sampling_rate),
            async_logging: env_parse("HATEOAS_LOG_ASYNC").unwrap_or(defaults.async_logging),
            target_filter: env::var("HATEOAS_LOG_TARGET_FILTER").ok(),
            include_location: env_parse("HATEOAS_LOG_INCLUDE_LOCATION")
                .unwrap_or(defaults.include_location),
        }
    }

    #[must_use]
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            sampling_mode: SamplingMode::All,
            sampling_rate: 1.0,
            async_logging: false,
            target_filter: None,
            include_location: true,
        }
    }

    #[must_use]
    pub fn default_prod() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Json,
            sampling_mode: SamplingMode::All,
            sampling_rate: 1.0,
            async_logging: true,
            target_filter: None,
            include_location: false,
        }
    }
}

/// Sampling layer: decides whether an event is emitted at all
pub struct SamplingLayer {
    mode: SamplingMode,
    sampling_rate: f64,
    counter: AtomicU64,
}

impl SamplingLayer {
    #[must_use]
    pub fn new(mode: SamplingMode, sampling_rate: f64) -> Self {
        Self {
            mode,
            sampling_rate: sampling_rate.clamp(0.0, 1.0),
            counter: AtomicU64::new(0),
        }
    }

    fn should_sample(&self, metadata: &Metadata<'_>) -> bool {
        let severe = matches!(*metadata.level(), Level::WARN | Level::ERROR);
        match self.mode {
            SamplingMode::All => true,
            SamplingMode::ErrorOnly => severe,
            SamplingMode::Sampled => {
                if severe || !metadata.is_event() {
                    return true;
                }
                if self.sampling_rate <= 0.0 {
                    return false;
                }
                let count = self.counter.fetch_add(1, Ordering::Relaxed);
                let interval = (1.0 / self.sampling_rate) as u64;
                interval > 0 && count % interval == 0
            }
        }
    }
}

impl<S> Layer<S> for SamplingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: LayerContext<'_, S>) -> bool {
        self.should_sample(metadata)
    }
}

/// Initialize logging at `log_level`, other settings from the environment.
///
/// ```no_run
/// hateoas_links::otel::init_logging("info").expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: &str) -> Result<()> {
    let mut config = LogConfig::from_env();
    config.log_level = log_level.to_string();
    init_logging_with_config(&config)
}

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let level: Level = config.log_level.parse().unwrap_or(Level::INFO);
    let mut env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    // Connection churn from the HTTP server is not interesting below warn.
    if let Ok(directive) = "may_minihttp=warn".parse() {
        env_filter = env_filter.add_directive(directive);
    }
    for filter in config
        .target_filter
        .iter()
        .flat_map(|f| f.split(','))
        .map(str::trim)
        .filter(|f| !f.is_empty())
    {
        match filter.parse() {
            Ok(directive) => env_filter = env_filter.add_directive(directive),
            Err(_) => eprintln!("Warning: Invalid log filter directive: {filter}"),
        }
    }

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(SamplingLayer::new(config.sampling_mode, config.sampling_rate));

    if config.async_logging {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        registry
            .with(fmt_layer(config, writer))
            .try_init()
            .context("Failed to initialize async logging")?;
        // The guard flushes on drop; keep it for the life of the process.
        std::mem::forget(guard);
    } else {
        registry
            .with(fmt_layer(config, std::io::stderr))
            .try_init()
            .context("Failed to initialize sync logging")?;
    }
    Ok(())
}

fn fmt_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_writer(writer);
    match config.format {
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
