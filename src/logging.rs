use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::Path;

/// Starts the logger. The level comes from `RUST_LOG` when set, else from
/// `level`. With a directory, logs go to rotated files there instead of stderr.
pub fn setup_logging(
    level: &str,
    log_dir: Option<&Path>,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // 10 MB per file
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            )
            .start(),
        None => logger.format(flexi_logger::colored_default_format).start(),
    }
}
