//! Artifact model: the current/previous path pair and the record of one rotation.
//!
//! The content of an artifact is opaque bytes; nothing here looks inside it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::RotationError;

/// Logical role of an artifact on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactRole {
    Current,
    Previous,
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactRole::Current => f.write_str("current"),
            ArtifactRole::Previous => f.write_str("previous"),
        }
    }
}

/// The `current` / `previous` path pair a rotation operates on.
///
/// The two paths must differ: rotating a path onto itself would delete the
/// artifact that is about to be backed up. `new` only compares spelling;
/// `BackupRotator` asks the store whether both resolve to the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    current: PathBuf,
    previous: PathBuf,
}

impl ArtifactPaths {
    pub fn new(
        current: impl Into<PathBuf>,
        previous: impl Into<PathBuf>,
    ) -> Result<Self, RotationError> {
        let current = current.into();
        let previous = previous.into();
        if current == previous {
            return Err(RotationError::SamePath(current));
        }
        Ok(Self { current, previous })
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn previous(&self) -> &Path {
        &self.previous
    }

    pub fn path(&self, role: ArtifactRole) -> &Path {
        match role {
            ArtifactRole::Current => &self.current,
            ArtifactRole::Previous => &self.previous,
        }
    }
}

/// Which side effects happened during one `rotate_and_store` call.
///
/// Used for reporting and tests only; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationRecord {
    /// An artifact was present at `current` when the call started.
    pub existed_current: bool,

    /// The old `previous` artifact was deleted.
    pub deleted_previous: bool,

    /// `current` was moved to `previous`.
    pub renamed_current_to_previous: bool,
}

impl RotationRecord {
    /// Nothing was rotated; only the new `current` was written.
    pub fn fresh() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_must_differ() {
        let err = ArtifactPaths::new("stats.csv", "stats.csv").unwrap_err();
        assert!(matches!(err, RotationError::SamePath(p) if p == PathBuf::from("stats.csv")));
    }

    #[test]
    fn path_by_role() {
        let paths = ArtifactPaths::new("stats.csv", "stats_old.csv").unwrap();
        assert_eq!(paths.path(ArtifactRole::Current), Path::new("stats.csv"));
        assert_eq!(paths.path(ArtifactRole::Previous), Path::new("stats_old.csv"));
    }

    #[test]
    fn record_serializes_with_field_names() {
        let record = RotationRecord {
            existed_current: true,
            deleted_previous: false,
            renamed_current_to_previous: true,
        };
        let v = serde_json::to_value(record).unwrap();
        assert_eq!(v["existed_current"], true);
        assert_eq!(v["deleted_previous"], false);
        assert_eq!(v["renamed_current_to_previous"], true);
    }
}
