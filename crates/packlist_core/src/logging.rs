//! Process-wide diagnostic logging.
//!
//! # Responsibility
//! - Resolve logging configuration from explicit values or environment.
//! - Start one rolling file logger per process.
//!
//! # Invariants
//! - Initialization is idempotent for an identical configuration.
//! - A second, different configuration is rejected, never applied.
//! - Initialization never panics.
//! - Log lines carry ids and counts only, never item descriptions.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable naming the log level.
pub const LOG_LEVEL_ENV: &str = "PACKLIST_LOG_LEVEL";
/// Environment variable naming the absolute log directory.
pub const LOG_DIR_ENV: &str = "PACKLIST_LOG_DIR";

const LOG_FILE_BASENAME: &str = "packlist";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK_INSTALLED: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LoggingConfig,
    _handle: LoggerHandle,
}

/// Logging setup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidDirectory(String),
    /// A logger with a different configuration is already running.
    Conflict {
        active: LoggingConfig,
        requested: LoggingConfig,
    },
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(value) => write!(
                f,
                "unsupported log level `{value}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDirectory(message) => write!(f, "invalid log directory: {message}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already initialized as {active}; refusing to switch to {requested}"
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Normalized logging configuration.
///
/// Only constructible through `new`/`from_env`, so the level is always one
/// of `trace|debug|info|warn|error` and the directory is absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    level: LevelFilter,
    log_dir: PathBuf,
}

impl Display for LoggingConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "level=`{}` dir=`{}`",
            self.level.as_str().to_ascii_lowercase(),
            self.log_dir.display()
        )
    }
}

impl LoggingConfig {
    /// Builds a config from raw level and directory strings.
    ///
    /// # Errors
    /// - `UnsupportedLevel` for unknown level names.
    /// - `InvalidDirectory` for empty or relative directories.
    pub fn new(level: &str, log_dir: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            level: parse_level(level)?,
            log_dir: absolute_log_dir(log_dir)?,
        })
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Reads `PACKLIST_LOG_DIR` and `PACKLIST_LOG_LEVEL`.
    ///
    /// Returns `Ok(None)` when no directory is configured; the level falls
    /// back to `default_log_level()`.
    pub fn from_env() -> Result<Option<Self>, LoggingError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, LoggingError> {
        let Some(dir) = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty()) else {
            return Ok(None);
        };
        let level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        Self::new(&level, &dir).map(Some)
    }
}

/// Initializes file logging with `level` under `log_dir`.
///
/// # Errors
/// - Invalid level or directory, see `LoggingConfig::new`.
/// - `Conflict` when already initialized with another configuration.
/// - `InvalidDirectory` / `Backend` when the directory or logger cannot start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    init_logging_with(LoggingConfig::new(level, log_dir)?)
}

/// Initializes file logging from an already normalized config.
pub fn init_logging_with(config: LoggingConfig) -> Result<(), LoggingError> {
    let active = ACTIVE.get_or_try_init(|| start_logger(config.clone()))?;
    if active.config != config {
        return Err(LoggingError::Conflict {
            active: active.config.clone(),
            requested: config,
        });
    }
    Ok(())
}

/// Returns the active logging configuration, if any.
pub fn logging_status() -> Option<LoggingConfig> {
    ACTIVE.get().map(|active| active.config.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(config: LoggingConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|err| {
        LoggingError::InvalidDirectory(format!(
            "cannot create `{}`: {err}",
            config.log_dir.display()
        ))
    })?;

    let spec = LogSpecification::builder().default(config.level).build();
    let handle = Logger::with(spec)
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();
    info!(
        "event=app_start module=core status=ok platform={} version={} {}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        config
    );

    Ok(ActiveLogger {
        config,
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    let lowered = level.trim().to_ascii_lowercase();
    let name = if lowered == "warning" { "warn" } else { lowered.as_str() };
    match name.parse::<LevelFilter>() {
        Ok(LevelFilter::Off) | Err(_) => Err(LoggingError::UnsupportedLevel(lowered)),
        Ok(filter) => Ok(filter),
    }
}

fn absolute_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let path = PathBuf::from(log_dir.trim());
    if path.as_os_str().is_empty() {
        Err(LoggingError::InvalidDirectory(
            "directory cannot be empty".to_string(),
        ))
    } else if path.is_relative() {
        Err(LoggingError::InvalidDirectory(format!(
            "must be an absolute path, got `{}`",
            path.display()
        )))
    } else {
        Ok(path)
    }
}

fn install_panic_hook_once() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            panic_payload_summary(panic_info.payload())
        );
        previous_hook(panic_info);
    }));
}

// Panic payloads may echo item descriptions; keep them single-line and bounded.
fn panic_payload_summary(payload: &(dyn Any + Send)) -> String {
    let text = match (payload.downcast_ref::<&str>(), payload.downcast_ref::<String>()) {
        (Some(message), _) => *message,
        (None, Some(message)) => message.as_str(),
        (None, None) => "non-string panic payload",
    };
    single_line_prefix(text, MAX_PANIC_PAYLOAD_CHARS)
}

fn single_line_prefix(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c });
    let mut out: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, logging_status, panic_payload_summary, parse_level, single_line_prefix,
        LoggingConfig, LoggingError, LOG_DIR_ENV, LOG_LEVEL_ENV,
    };
    use log::LevelFilter;

    #[test]
    fn parse_level_accepts_known_values() {
        assert_eq!(parse_level("INFO"), Ok(LevelFilter::Info));
        assert_eq!(parse_level(" warning "), Ok(LevelFilter::Warn));
        assert!(matches!(
            parse_level("loud"),
            Err(LoggingError::UnsupportedLevel(value)) if value == "loud"
        ));
        assert!(parse_level("off").is_err());
    }

    #[test]
    fn config_rejects_relative_directory() {
        let err = LoggingConfig::new("info", "logs/dev").expect_err("relative dir must fail");
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn config_rejects_unknown_level_before_init() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dir_str = dir.path().to_str().expect("utf-8 temp dir");
        let err = LoggingConfig::new("loud", dir_str).expect_err("unknown level must fail");
        assert_eq!(err, LoggingError::UnsupportedLevel("loud".to_string()));
    }

    #[test]
    fn config_from_lookup_skips_when_directory_unset() {
        let config = LoggingConfig::from_lookup(|_| None).expect("lookup should succeed");
        assert_eq!(config, None);
    }

    #[test]
    fn config_from_lookup_reads_level_and_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dir_str = dir.path().to_str().expect("utf-8 temp dir").to_string();
        let config = LoggingConfig::from_lookup(|key| match key {
            LOG_DIR_ENV => Some(dir_str.clone()),
            LOG_LEVEL_ENV => Some("Warn".to_string()),
            _ => None,
        })
        .expect("lookup should succeed")
        .expect("config should be present");
        assert_eq!(config.level(), LevelFilter::Warn);
        assert_eq!(config.log_dir(), dir.path());
        assert!(config.to_string().contains("level=`warn`"));
    }

    #[test]
    fn single_line_prefix_removes_newlines_and_truncates() {
        let flattened = single_line_prefix("line1\nline2\rline3", 8);
        assert_eq!(flattened, "line1 li...");
        assert_eq!(single_line_prefix("short", 8), "short");
    }

    #[test]
    fn panic_payload_summary_handles_str_string_and_other() {
        let borrowed: &str = "boom";
        assert_eq!(panic_payload_summary(&borrowed), "boom");
        assert_eq!(panic_payload_summary(&String::from("a\nb")), "a b");
        assert_eq!(panic_payload_summary(&42_u8), "non-string panic payload");
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        // The logger outlives this test, so its directory must not be removed.
        let first = tempfile::tempdir().expect("temp dir").into_path();
        let second = tempfile::tempdir().expect("temp dir");
        let first_str = first.to_str().expect("utf-8 temp dir");
        let second_str = second.path().to_str().expect("utf-8 temp dir");

        init_logging("info", first_str).expect("first init should succeed");
        init_logging("INFO", first_str).expect("same config should be idempotent");

        let level_err = init_logging("debug", first_str).expect_err("level conflict");
        assert!(matches!(level_err, LoggingError::Conflict { .. }));
        let dir_err = init_logging("info", second_str).expect_err("directory conflict");
        assert!(dir_err.to_string().contains("refusing to switch"));

        let active = logging_status().expect("logging should be active");
        assert_eq!(active.level(), LevelFilter::Info);
        assert_eq!(active.log_dir(), first.as_path());
    }
}
