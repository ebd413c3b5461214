//! Opt-in diagnostic logging.
//!
//! The library only emits through the `log` facade (`debug!` when a decoded
//! zero is folded into null, `trace!` on driver scans). Applications that want
//! to see those records can install a logger here.

use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::error::NullError;

/// Set once our logger has been installed.
static LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);

/// Installs an `env_logger` at `level`, writing to `log_file` in append mode
/// when given and to stderr otherwise.
///
/// Once a call has installed the logger, later calls return `Ok(())` without
/// opening `log_file`. Fails with `NullError::Io` if the file cannot be opened
/// and with `NullError::Logger` if another logger was installed elsewhere.
pub fn enable_verbose_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), NullError> {
    let mut installed = LOGGER_INSTALLED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if *installed {
        return Ok(());
    }

    let mut builder = env_logger::Builder::new();

    builder.is_test(false);
    builder.filter_level(level);

    // Level and message only
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())?;
        buf.flush()?;
        Ok(())
    });

    if let Some(path) = log_file {
        let file = open_log_target(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    *installed = true;
    Ok(())
}

fn open_log_target(path: &Path) -> Result<File, NullError> {
    Ok(OpenOptions::new().append(true).create(true).open(path)?)
}
