//! rollover-core
//!
//! 1 つの artifact（シリアライズ済みの表データなど）を current / previous の
//! 2 世代だけ保持しながら毎日保存するための部品です。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ArtifactPaths, RotationRecord, RotationEvent, AlertMessage, errors, ids）
//! - **ports**: 抽象化レイヤー（ArtifactStore, EventSink, Clock, Sleeper, Notifier, など）
//! - **impls**: ports の実装（LocalArtifactStore, InMemoryArtifactStore, TracingEventSink, など）
//! - **app**: アプリケーションロジック（BackupRotator, StoreCycle, DailySchedule, DailyLoop）
//! - **config**: TOML 設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{BackupRotator, CycleReport, DailyLoop, DailySchedule, StoreCycle};
pub use config::{Config, ConfigError};
pub use domain::{ArtifactPaths, Remaining, RotationError, RotationEvent, RotationRecord};
