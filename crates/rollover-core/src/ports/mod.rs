//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部（ファイルシステム、時計、アラート送信先など）への
//! インターフェースを提供し、実装の詳細を隠蔽します。

pub mod artifact_store;
pub mod clock;
pub mod content_source;
pub mod event_sink;
pub mod id_generator;
pub mod notifier;
pub mod sleeper;

// 主要な trait を再エクスポート
pub use self::artifact_store::ArtifactStore;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::content_source::{ContentSource, FileSource, StaticSource};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::notifier::{Notifier, NotifyError};
pub use self::sleeper::{ClockAdvancingSleeper, Sleeper, TokioSleeper};
