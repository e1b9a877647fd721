//! Notifier の実装
//!
//! - LogNotifier: アラートを info ログとして出力（外部 API を持たない環境用）
//! - RecordingNotifier: 送信されたアラートを保持し、失敗も再現できる（テスト用）

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::AlertMessage;
use crate::ports::{Notifier, NotifyError};

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        tracing::info!(
            from = %message.from,
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "alert"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<AlertMessage>>>,
    failure: Arc<Mutex<Option<NotifyError>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の send をすべて error で失敗させる
    pub fn fail_with(&self, error: NotifyError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn sent(&self) -> Vec<AlertMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
