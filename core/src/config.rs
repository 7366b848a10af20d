//! Application configuration, read from `config.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::semester::SemesterLayout;
use crate::repository::file::default_data_dir;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default `env_logger` filter, e.g. `"info"` or `"nova_core=debug"`.
    pub log_level: String,
    /// Where the calendar file is stored. Defaults to `~/.nova`.
    pub data_dir: Option<PathBuf>,
    pub semester: SemesterLayout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data_dir: None,
            semester: SemesterLayout::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        content.parse()
    }

    /// The first existing `config.json`, looked up in the working directory
    /// and then in the default data directory.
    pub fn locate() -> Option<PathBuf> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Ok(dir) = default_data_dir() {
            candidates.push(dir.join(CONFIG_FILE_NAME));
        }
        candidates.into_iter().find(|path| path.exists())
    }

    /// Reads the located config file, falling back to the defaults. Also
    /// returns the file that was read.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match Self::locate() {
            Some(path) => Ok((Self::from_file(&path)?, Some(path))),
            None => Ok((Config::default(), None)),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content).context("Failed to parse config")?;
        config.semester.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalendarError;
    use chrono::{NaiveDate, Weekday};

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = r#"{ "log_level": "debug", "semester": { "recess_week": 6 } }"#.parse::<Config>().unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_dir, None);
        assert_eq!(config.semester.recess_week, 6);
        assert_eq!(config.semester.reading_week, 15);
        assert_eq!(config.semester.first_day_of_week, Weekday::Mon);
    }

    #[test]
    fn test_custom_start_date() {
        let config = r#"{ "semester": { "default_start_date": "2021-01-11" } }"#.parse::<Config>().unwrap();
        assert_eq!(
            config.semester.default_start_date,
            NaiveDate::from_ymd_opt(2021, 1, 11).unwrap()
        );
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let err = r#"{ "semester": { "reading_week": 30 } }"#.parse::<Config>().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CalendarError>(),
            Some(CalendarError::InvalidSemester(_))
        ));
        assert!("{ not json".parse::<Config>().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "data_dir": "/tmp/nova" }"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/nova")));
        assert!(Config::from_file(dir.path().join("missing.json")).is_err());
    }
}
