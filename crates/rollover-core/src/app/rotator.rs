//! BackupRotator - current / previous の 2 世代ローテーション
//!
//! # フロー
//! 0. current と previous が同じファイルを指していれば SamePath で中止（何も変更しない）
//! 1. current が無ければ 3 へ
//! 2. current があれば
//!    a. previous があれば削除（"deleted previous backup"）
//!    b. current を previous に rename（"backed up current artifact"）
//! 3. 新しい内容を current に書き込む（"artifact written"）
//! 4. 何が起きたかを RotationRecord で返す
//!
//! # 既知の制約
//! 2a の削除後に 2b の rename が失敗すると、current も previous も無い状態になります。
//! これは回復しません。エラーの `remaining()` が `Remaining::Nothing` を返します。
//!
//! 同じ path の組に対して並行に呼び出してはいけません。呼び出し側で直列化します。

use std::path::Path;

use crate::domain::{ArtifactPaths, RotationError, RotationEvent, RotationRecord};
use crate::ports::{ArtifactStore, EventSink};

pub struct BackupRotator<S, E> {
    store: S,
    events: E,
}

impl<S: ArtifactStore, E: EventSink> BackupRotator<S, E> {
    pub fn new(store: S, events: E) -> Self {
        Self { store, events }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// current を previous に退避してから new_content を current に書き込む
    ///
    /// 失敗はすべて RotationError として返し、途中で握りつぶしません。
    /// リトライもしません。
    pub fn rotate_and_store(
        &self,
        paths: &ArtifactPaths,
        new_content: &[u8],
    ) -> Result<RotationRecord, RotationError> {
        let current = paths.current();
        let previous = paths.previous();
        let mut record = RotationRecord::fresh();

        // ArtifactPaths::new は字面しか比べないので、ここで実体を比べる
        let aliased = self
            .store
            .same_file(current, previous)
            .map_err(|source| RotationError::Inspect {
                path: current.to_path_buf(),
                source,
            })?;
        if aliased {
            return Err(RotationError::SamePath(previous.to_path_buf()));
        }

        if self.exists(current)? {
            record.existed_current = true;

            if self.exists(previous)? {
                self.store
                    .remove(previous)
                    .map_err(|source| RotationError::Delete {
                        path: previous.to_path_buf(),
                        source,
                    })?;
                record.deleted_previous = true;
                self.events.emit(&RotationEvent::DeletedPreviousBackup {
                    path: previous.to_path_buf(),
                });
            }

            self.store
                .rename(current, previous)
                .map_err(|source| RotationError::Rename {
                    from: current.to_path_buf(),
                    to: previous.to_path_buf(),
                    deleted_previous: record.deleted_previous,
                    source,
                })?;
            record.renamed_current_to_previous = true;
            self.events.emit(&RotationEvent::BackedUpCurrent {
                from: current.to_path_buf(),
                to: previous.to_path_buf(),
            });
        }

        self.store
            .write(current, new_content)
            .map_err(|source| RotationError::Write {
                path: current.to_path_buf(),
                rotated: record.renamed_current_to_previous,
                source,
            })?;
        self.events.emit(&RotationEvent::ArtifactWritten {
            path: current.to_path_buf(),
            bytes: new_content.len(),
        });

        Ok(record)
    }

    fn exists(&self, path: &Path) -> Result<bool, RotationError> {
        self.store
            .exists(path)
            .map_err(|source| RotationError::Inspect {
                path: path.to_path_buf(),
                source,
            })
    }
}
