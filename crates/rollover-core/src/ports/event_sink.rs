//! EventSink port - ローテーションイベントの記録
//!
//! # 実装
//! - TracingEventSink: tracing の info イベントとして出力（本番用）
//! - RecordingEventSink: 発行されたイベントを保持（テスト用）

use crate::domain::RotationEvent;

/// EventSink はファイル操作ごとのイベントを受け取る
///
/// 記録の失敗でローテーションを止めないため、戻り値はありません。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &RotationEvent);
}
