//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **BackupRotator**: current / previous の 2 世代ローテーション
//! - **StoreCycle**: 1 回分の保存処理（load → rotate → alert）
//! - **DailySchedule**: 「毎日 HH:MM」の次回実行時刻
//! - **DailyLoop**: スケジュールに従って StoreCycle を順番に実行

pub mod cycle;
pub mod daily_loop;
pub mod rotator;
pub mod schedule;

// 主要な型を再エクスポート
pub use self::cycle::{AlertStatus, CycleReport, StoreCycle};
pub use self::daily_loop::{DailyLoop, LoopSummary};
pub use self::rotator::BackupRotator;
pub use self::schedule::{DailySchedule, ScheduleError};
