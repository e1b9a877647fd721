//! Notifier port - サイクル完了・失敗のアラート送信
//!
//! メール配信 API などの外部サービスはこのクレートの外にあります。
//! rotator は Notifier を知らず、StoreCycle だけが使います。
//!
//! # 実装
//! - LogNotifier: アラートを tracing に出すだけ（CLI のデフォルト）
//! - RecordingNotifier: 送信内容を保持、失敗させることもできる（テスト用）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AlertMessage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("alert rejected: {0}")]
    Rejected(String),

    #[error("alert transport failed: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &AlertMessage) -> Result<(), NotifyError>;
}
