//! Config - TOML 設定ファイル
//!
//! すべてのキーは省略可能で、省略時は以下のデフォルトになります。
//!
//! ```toml
//! [artifact]
//! current = "statistics_CURRENT.csv"
//! previous = "statistics_OLD.csv"
//! source = "sports_data.csv"
//!
//! [schedule]
//! at = "09:00"
//! utc_offset_minutes = 0
//!
//! [alert]
//! enabled = true
//! from = "analyst@example.com"
//! to = "rshah@example.com"
//! subject = "Analysis completed for today"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::app::{DailySchedule, ScheduleError};
use crate::domain::{AlertTemplate, ArtifactPaths, RotationError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Paths(#[from] RotationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub artifact: ArtifactConfig,
    pub schedule: ScheduleConfig,
    pub alert: AlertConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtifactConfig {
    pub current: PathBuf,
    pub previous: PathBuf,
    /// 新しい artifact の中身を読むファイル（上流の分析結果）
    pub source: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            current: PathBuf::from("statistics_CURRENT.csv"),
            previous: PathBuf::from("statistics_OLD.csv"),
            source: PathBuf::from("sports_data.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    pub at: String,
    pub utc_offset_minutes: i32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            at: "09:00".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    pub enabled: bool,
    pub from: String,
    pub to: String,
    pub subject: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        let template = AlertTemplate::default();
        Self {
            enabled: true,
            from: template.from,
            to: template.to,
            subject: template.subject,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// 時刻がパースでき、current と previous が異なることを確認する
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.daily_schedule()?;
        self.artifact_paths()?;
        Ok(())
    }

    pub fn artifact_paths(&self) -> Result<ArtifactPaths, ConfigError> {
        Ok(ArtifactPaths::new(
            self.artifact.current.clone(),
            self.artifact.previous.clone(),
        )?)
    }

    pub fn daily_schedule(&self) -> Result<DailySchedule, ConfigError> {
        Ok(DailySchedule::parse(
            &self.schedule.at,
            self.schedule.utc_offset_minutes,
        )?)
    }

    /// アラートが無効なら None
    pub fn alert_template(&self) -> Option<AlertTemplate> {
        self.alert.enabled.then(|| AlertTemplate {
            from: self.alert.from.clone(),
            to: self.alert.to.clone(),
            subject: self.alert.subject.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.artifact.current,
            PathBuf::from("statistics_CURRENT.csv")
        );
        assert_eq!(config.alert_template(), Some(AlertTemplate::default()));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [artifact]
            current = "out/stats.csv"
            previous = "out/stats_old.csv"

            [schedule]
            at = "06:30"
            utc_offset_minutes = 540

            [alert]
            to = "ops@example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.artifact.source, PathBuf::from("sports_data.csv"));
        assert_eq!(
            config.daily_schedule().unwrap(),
            DailySchedule::parse("06:30", 540).unwrap()
        );
        let template = config.alert_template().unwrap();
        assert_eq!(template.to, "ops@example.com");
        assert_eq!(template.subject, "Analysis completed for today");
    }

    #[test]
    fn disabled_alert_has_no_template() {
        let config = Config::from_toml_str("[alert]\nenabled = false\n").unwrap();
        assert_eq!(config.alert_template(), None);
    }

    #[test]
    fn same_paths_are_rejected() {
        let err = Config::from_toml_str(
            "[artifact]\ncurrent = \"stats.csv\"\nprevious = \"stats.csv\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Paths(RotationError::SamePath(_))));
    }

    #[test]
    fn bad_time_is_rejected() {
        let err = Config::from_toml_str("[schedule]\nat = \"9am\"\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Schedule(ScheduleError::InvalidTime(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[artifact]\ncurent = \"typo.csv\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn misspelled_alert_key_is_rejected() {
        let err = Config::from_toml_str("[alert]\ntoo = \"ops@example.com\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
