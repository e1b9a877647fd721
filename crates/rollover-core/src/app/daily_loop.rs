//! DailyLoop - 毎日決まった時刻に StoreCycle を実行する
//!
//! # フロー
//! 1. schedule.next_run(clock.now()) で次の実行時刻を求める
//! 2. sleeper でその時刻まで待つ
//! 3. StoreCycle::run を実行（失敗してもリトライせず、次の日を待つ）
//!
//! サイクルは 1 つずつ順番に実行されるので、rotator が並行に呼ばれることはありません。

use super::cycle::StoreCycle;
use super::schedule::DailySchedule;
use crate::ports::{ArtifactStore, Clock, EventSink, Sleeper};

/// run() の結果の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    pub succeeded: u32,
    pub failed: u32,
}

pub struct DailyLoop<S, E, C, Z> {
    cycle: StoreCycle<S, E>,
    schedule: DailySchedule,
    clock: C,
    sleeper: Z,
}

impl<S, E, C, Z> DailyLoop<S, E, C, Z>
where
    S: ArtifactStore,
    E: EventSink,
    C: Clock,
    Z: Sleeper,
{
    pub fn new(cycle: StoreCycle<S, E>, schedule: DailySchedule, clock: C, sleeper: Z) -> Self {
        Self {
            cycle,
            schedule,
            clock,
            sleeper,
        }
    }

    /// max_cycles 回実行したら返る。None なら返らない（呼び出し側で select! などで止める）
    pub async fn run(&self, max_cycles: Option<u32>) -> LoopSummary {
        let mut summary = LoopSummary::default();
        while max_cycles.is_none_or(|max| summary.succeeded + summary.failed < max) {
            let next = self.schedule.next_run(self.clock.now());
            tracing::info!(next_run = %next, "waiting for next store cycle");
            self.sleeper.sleep_until(next, &self.clock).await;

            // 失敗のログは StoreCycle 側で出している
            match self.cycle.run().await {
                Ok(_) => summary.succeeded += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}
