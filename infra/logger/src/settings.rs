use crate::LoggerError;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// File/env-loadable logging knobs, mapped onto [`crate::LoggerBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogSettings {
    pub level: String,
    pub console: bool,
    pub filter: Option<String>,
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            filter: None,
            dir: None,
            json: false,
            max_files: 10,
        }
    }
}

impl LogSettings {
    /// Parses `level` (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level_filter(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(self.level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid log level '{}': {e}", self.level).into(),
            context: None,
        })
    }
}
