//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **LocalArtifactStore**: 本番用のファイルストア
//! - **InMemoryArtifactStore**: テスト用のファイルストア（故障注入つき）
//! - **TracingEventSink / RecordingEventSink**: ローテーションイベントの出力先
//! - **LogNotifier / RecordingNotifier**: アラートの送信先

pub mod event_sink;
pub mod inmem_store;
pub mod local_store;
pub mod notifier;

// 主要な型を再エクスポート
pub use self::event_sink::{RecordingEventSink, TracingEventSink};
pub use self::inmem_store::{InMemoryArtifactStore, StoreOp};
pub use self::local_store::LocalArtifactStore;
pub use self::notifier::{LogNotifier, RecordingNotifier};
