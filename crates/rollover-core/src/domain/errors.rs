//! Errors - エラー型と分類
//!
//! rotator 内部ではエラーを握りつぶさず、すべて型付きで呼び出し側に返します。
//! 呼び出し側（daily loop / CLI）がログを出し、次のサイクルで再試行するかを決めます。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 失敗時にディスク上に残っている artifact の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// 何も変更されていない（失敗前の状態のまま）
    Intact,
    /// previous を削除した後に rename が失敗した
    ///
    /// previous は確実に無く、current も失われたものとして扱う
    Nothing,
    /// rename 後に書き込みが失敗した: previous だけが残っている
    PreviousOnly,
}

/// RotationError は rotate_and_store の失敗
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("current and previous artifact paths are the same: {0}")]
    SamePath(PathBuf),

    /// 存在確認や同一性の確認ができなかった（何も変更していない）
    #[error("failed to inspect artifact {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to delete previous backup {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to back up {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        /// previous を削除済みだったか（degraded window に入ったか）
        deleted_previous: bool,
        #[source]
        source: io::Error,
    },

    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        /// current を previous に退避済みだったか
        rotated: bool,
        #[source]
        source: io::Error,
    },
}

impl RotationError {
    /// 失敗後にディスクに何が残っているか
    ///
    /// Rename 失敗で previous 削除済みのケースが唯一の非原子的な窓です。
    /// 自動では復旧しません。
    pub fn remaining(&self) -> Remaining {
        match self {
            RotationError::SamePath(_)
            | RotationError::Inspect { .. }
            | RotationError::Delete { .. } => Remaining::Intact,
            RotationError::Rename {
                deleted_previous: true,
                ..
            } => Remaining::Nothing,
            RotationError::Rename { .. } => Remaining::Intact,
            RotationError::Write { rotated: true, .. } => Remaining::PreviousOnly,
            RotationError::Write { .. } => Remaining::Intact,
        }
    }

    /// 下位の I/O エラーが NotFound か（存在確認と操作の間にファイルが消えた等）
    pub fn is_not_found(&self) -> bool {
        self.io_source()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }

    fn io_source(&self) -> Option<&io::Error> {
        match self {
            RotationError::SamePath(_) => None,
            RotationError::Inspect { source, .. }
            | RotationError::Delete { source, .. }
            | RotationError::Rename { source, .. }
            | RotationError::Write { source, .. } => Some(source),
        }
    }
}

/// CycleError は保存サイクル全体の失敗
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("failed to load artifact content: {0}")]
    Source(#[source] io::Error),

    #[error(transparent)]
    Rotation(#[from] RotationError),
}
