//! StoreCycle - 1 回分の保存処理（load → rotate_and_store → alert）
//!
//! # 学習ポイント
//! - rotator 自体はアラートを知らない。アラートは StoreCycle が注入された Notifier で送る
//! - アラート送信の失敗はサイクルを失敗させない（ログに残して AlertStatus で返す）
//! - 1 サイクルのログは `store_cycle{cycle_id=..}` span にまとめる

use std::sync::Arc;

use serde::Serialize;
use tracing::Instrument;

use super::rotator::BackupRotator;
use crate::domain::{AlertMessage, AlertTemplate, ArtifactPaths, CycleError, CycleId, RotationRecord};
use crate::ports::{ArtifactStore, ContentSource, EventSink, IdGenerator, Notifier};

/// アラート送信の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum AlertStatus {
    Sent,
    Failed(String),
    Disabled,
}

/// 成功したサイクルの報告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub cycle_id: String,
    pub record: RotationRecord,
    pub alert: AlertStatus,
}

pub struct StoreCycle<S, E> {
    paths: ArtifactPaths,
    rotator: BackupRotator<S, E>,
    source: Box<dyn ContentSource>,
    notifier: Arc<dyn Notifier>,
    ids: Box<dyn IdGenerator>,
    /// None ならアラートを送らない
    alerts: Option<AlertTemplate>,
}

impl<S: ArtifactStore, E: EventSink> StoreCycle<S, E> {
    pub fn new(
        paths: ArtifactPaths,
        rotator: BackupRotator<S, E>,
        source: Box<dyn ContentSource>,
        notifier: Arc<dyn Notifier>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            paths,
            rotator,
            source,
            notifier,
            ids,
            alerts: Some(AlertTemplate::default()),
        }
    }

    pub fn with_alerts(mut self, alerts: Option<AlertTemplate>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn paths(&self) -> &ArtifactPaths {
        &self.paths
    }

    pub async fn run(&self) -> Result<CycleReport, CycleError> {
        let cycle_id = self.ids.generate_cycle_id();
        let span = tracing::info_span!("store_cycle", %cycle_id);
        self.run_with_id(cycle_id).instrument(span).await
    }

    async fn run_with_id(&self, cycle_id: CycleId) -> Result<CycleReport, CycleError> {
        let current = self.paths.current();

        let outcome = self
            .source
            .load()
            .map_err(CycleError::Source)
            .and_then(|content| {
                self.rotator
                    .rotate_and_store(&self.paths, &content)
                    .map_err(CycleError::from)
            });

        match outcome {
            Ok(record) => {
                tracing::info!(
                    existed_current = record.existed_current,
                    deleted_previous = record.deleted_previous,
                    rotated = record.renamed_current_to_previous,
                    "store cycle complete"
                );
                let alert = self
                    .deliver(self.alerts.as_ref().map(|t| t.success(current)))
                    .await;
                Ok(CycleReport {
                    cycle_id: cycle_id.to_string(),
                    record,
                    alert,
                })
            }
            Err(err) => {
                match &err {
                    CycleError::Rotation(rotation) => tracing::error!(
                        error = %err,
                        remaining = ?rotation.remaining(),
                        "store cycle failed"
                    ),
                    CycleError::Source(_) => tracing::error!(error = %err, "store cycle failed"),
                }
                let reason = err.to_string();
                self.deliver(self.alerts.as_ref().map(|t| t.failure(current, &reason)))
                    .await;
                Err(err)
            }
        }
    }

    async fn deliver(&self, message: Option<AlertMessage>) -> AlertStatus {
        let Some(message) = message else {
            return AlertStatus::Disabled;
        };
        match self.notifier.send(&message).await {
            Ok(()) => {
                tracing::info!(to = %message.to, subject = %message.subject, "alert sent");
                AlertStatus::Sent
            }
            Err(e) => {
                tracing::warn!(to = %message.to, error = %e, "alert delivery failed");
                AlertStatus::Failed(e.to_string())
            }
        }
    }
}
