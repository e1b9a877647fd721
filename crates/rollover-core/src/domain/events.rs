//! Events - ローテーションで発生したファイル操作イベント
//!
//! ファイルシステムを変更するたびに 1 つだけ発行されます。
//! EventSink（ports::event_sink）に渡され、info レベルのログなどになります。

use std::path::PathBuf;

use serde::Serialize;

/// RotationEvent は rotator が行ったファイル操作
///
/// # イベント種類
/// - DeletedPreviousBackup: 古い previous を削除した
/// - BackedUpCurrent: current を previous に rename した
/// - ArtifactWritten: 新しい current を書き込んだ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RotationEvent {
    DeletedPreviousBackup { path: PathBuf },
    BackedUpCurrent { from: PathBuf, to: PathBuf },
    ArtifactWritten { path: PathBuf, bytes: usize },
}

impl RotationEvent {
    /// 人が読むためのメッセージ（ログの本文）
    pub fn message(&self) -> &'static str {
        match self {
            RotationEvent::DeletedPreviousBackup { .. } => "deleted previous backup",
            RotationEvent::BackedUpCurrent { .. } => "backed up current artifact",
            RotationEvent::ArtifactWritten { .. } => "artifact written",
        }
    }
}
