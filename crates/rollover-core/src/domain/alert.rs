//! Alert model: the plain-text message sent to the supervisor after a cycle.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FROM: &str = "analyst@example.com";
pub const DEFAULT_TO: &str = "rshah@example.com";
pub const DEFAULT_SUBJECT: &str = "Analysis completed for today";

/// A rendered alert, ready for a `Notifier`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Sender, recipient and subject used to render alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertTemplate {
    pub from: String,
    pub to: String,
    pub subject: String,
}

impl Default for AlertTemplate {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM.to_string(),
            to: DEFAULT_TO.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl AlertTemplate {
    /// Alert sent after the new artifact was written.
    pub fn success(&self, current: &Path) -> AlertMessage {
        AlertMessage {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: self.subject.clone(),
            body: format!(
                "Analysis is completed for today. Please view {} to review details.",
                display_name(current)
            ),
        }
    }

    /// Alert sent when the cycle failed before the artifact was committed.
    pub fn failure(&self, current: &Path, reason: &str) -> AlertMessage {
        AlertMessage {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: format!("FAILED: {}", self.subject),
            body: format!(
                "Today's analysis could not be saved to {}.\n\nError: {reason}",
                display_name(current)
            ),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_alert_names_the_current_file() {
        let template = AlertTemplate::default();
        let msg = template.success(Path::new("/data/statistics_CURRENT.csv"));

        assert_eq!(msg.from, DEFAULT_FROM);
        assert_eq!(msg.to, DEFAULT_TO);
        assert_eq!(msg.subject, "Analysis completed for today");
        assert_eq!(
            msg.body,
            "Analysis is completed for today. Please view statistics_CURRENT.csv to review details."
        );
    }

    #[test]
    fn failure_alert_prefixes_subject_and_carries_reason() {
        let template = AlertTemplate::default();
        let msg = template.failure(Path::new("stats.csv"), "permission denied");

        assert_eq!(msg.subject, "FAILED: Analysis completed for today");
        assert!(msg.body.contains("stats.csv"));
        assert!(msg.body.ends_with("Error: permission denied"));
    }

    #[test]
    fn template_fields_default_individually() {
        let template: AlertTemplate = serde_json::from_str(r#"{"to": "ops@example.com"}"#).unwrap();
        assert_eq!(template.to, "ops@example.com");
        assert_eq!(template.from, DEFAULT_FROM);
        assert_eq!(template.subject, DEFAULT_SUBJECT);
    }
}
