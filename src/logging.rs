//! Logging bootstrap
//!
//! Diagnostics go to stderr through the `log` facade. Events are written as
//! `event=... module=... status=...` pairs and never include passwords.

use flexi_logger::{Logger, LoggerHandle};

/// Overrides the verbosity flags with a flexi_logger spec, e.g. `debug`
pub const LOG_ENV_VAR: &str = "DATAHUB_LOG";

/// Map `-v` occurrences to a level spec
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Start the logger. The returned handle must be kept alive for the
/// duration of the process.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle, String> {
    let spec = std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| level_for_verbosity(verbosity).to_string());

    let handle = Logger::try_with_str(&spec)
        .map_err(|err| format!("invalid log spec `{spec}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    log::debug!(
        "event=app_start module=core status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(1), "info");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "debug");
    }
}
