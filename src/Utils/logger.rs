use chrono::Local;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::Path;

// "off"/"none" map to no logger at all
fn level_filter_from_str(loglevel: &str) -> Result<Option<LevelFilter>, String> {
    match loglevel.to_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        _ => Err(format!(
            "loglevel must be off, debug, info, warn or error. Given {}",
            loglevel
        )),
    }
}

/// Install a terminal logger with the given level. May be called once per
/// process; a second installation is reported as an error by the logging
/// backend.
pub fn init_term_logger(loglevel: &str) -> Result<(), String> {
    let Some(level) = level_filter_from_str(loglevel)? else {
        return Ok(());
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .map_err(|e| format!("failed to install terminal logger: {}", e))
}

/// Install a terminal logger plus a file logger writing
/// `log_<timestamp>.txt` into the given directory.
pub fn init_file_logger(loglevel: &str, dir: &Path) -> Result<(), String> {
    let Some(level) = level_filter_from_str(loglevel)? else {
        return Ok(());
    };
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let name = format!("log_{}.txt", date_and_time);
    let file = File::create(dir.join(&name))
        .map_err(|e| format!("failed to create log file {}: {}", name, e))?;

    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(level, Config::default(), file),
    ];
    CombinedLogger::init(loggers).map_err(|e| format!("failed to install loggers: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_level_parsing() {
        assert!(init_term_logger("verbose").is_err());
        // "off" is accepted and installs nothing, so it stays repeatable
        assert!(init_term_logger("off").is_ok());
        assert!(init_term_logger("none").is_ok());
    }

    // a single test drives both helpers because the logging backend accepts
    // only one global installation per process
    #[test]
    fn test_install_once() {
        let dir = tempdir().unwrap();
        init_file_logger("info", dir.path()).unwrap();
        log::info!("logger installed");
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        // the second installation is rejected by the backend
        assert!(init_term_logger("info").is_err());
    }
}
