//! EventSink の実装
//!
//! - TracingEventSink: info レベルの構造化ログとして出力
//! - RecordingEventSink: イベントを Vec に保持（テスト用）

use std::sync::{Arc, Mutex};

use crate::domain::RotationEvent;
use crate::ports::EventSink;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &RotationEvent) {
        match event {
            RotationEvent::DeletedPreviousBackup { path } => {
                tracing::info!(path = %path.display(), "{}", event.message());
            }
            RotationEvent::BackedUpCurrent { from, to } => {
                tracing::info!(
                    from = %from.display(),
                    to = %to.display(),
                    "{}",
                    event.message()
                );
            }
            RotationEvent::ArtifactWritten { path, bytes } => {
                tracing::info!(path = %path.display(), bytes, "{}", event.message());
            }
        }
    }
}

/// 発行されたイベントを順番に保持する EventSink
///
/// Clone は同じ記録を共有するハンドルを作ります。
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<RotationEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RotationEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(RotationEvent::message)
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &RotationEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
