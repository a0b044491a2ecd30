// engine_core/src/logging/logging.rs
use std::io::Write;
use std::path::Path;
use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{info, Record};
use crate::constants::{LOG_BASENAME, LOG_KEEP_FILES, LOG_ROTATE_BYTES};

/// Starts a rotating file logger in `log_dir`.
///
/// Keep the returned handle alive for as long as logs should be written.
pub fn init_file_logger(log_dir: &Path, spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    let file_spec = FileSpec::default()
        .directory(log_dir)
        .basename(LOG_BASENAME)
        .suffix("log");

    let handle = Logger::try_with_str(spec)?
        .log_to_file(file_spec)
        .format(engine_formatter)
        .rotate(
            Criterion::Size(LOG_ROTATE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_KEEP_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    info!("Log dir: {}.", log_dir.display());
    Ok(handle)
}

/// Starts a logger that writes to stderr. `RUST_LOG` overrides `spec`.
pub fn init_stderr_logger(spec: &str) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(spec)?
        .log_to_stderr()
        .format(engine_formatter)
        .start()
}

fn engine_formatter(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        &record.args()
    )
}
