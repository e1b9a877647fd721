//! Sleeper port - サイクル間の待機の抽象化
//!
//! daily loop を実時間を待たずにテストするための trait です。
//!
//! # 実装
//! - TokioSleeper: tokio::time::sleep で実際に待つ
//! - ClockAdvancingSleeper: FixedClock を deadline まで進めて即座に返る（テスト用）

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::clock::{Clock, FixedClock};

#[async_trait]
pub trait Sleeper: Send + Sync {
    /// clock の時刻が deadline に達するまで待つ
    async fn sleep_until(&self, deadline: DateTime<Utc>, clock: &dyn Clock);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep_until(&self, deadline: DateTime<Utc>, clock: &dyn Clock) {
        // 負の差分（deadline 経過済み）は 0 として扱う
        let wait = (deadline - clock.now()).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;
    }
}

/// FixedClock を deadline まで進める Sleeper
#[derive(Debug, Clone)]
pub struct ClockAdvancingSleeper {
    clock: FixedClock,
}

impl ClockAdvancingSleeper {
    pub fn new(clock: FixedClock) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl Sleeper for ClockAdvancingSleeper {
    async fn sleep_until(&self, deadline: DateTime<Utc>, _clock: &dyn Clock) {
        if self.clock.now() < deadline {
            self.clock.set(deadline);
        }
    }
}
