//! Daily schedule: "every day at HH:MM" in a fixed UTC offset.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, Offset, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time of day {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("utc offset out of range: {0} minutes")]
    InvalidOffset(i32),
}

/// Fires once a day at `at` wall-clock time in `offset`.
///
/// A fixed offset is used instead of a named time zone so that every day has
/// exactly one matching instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    at: NaiveTime,
    offset: FixedOffset,
}

impl DailySchedule {
    pub fn new(at: NaiveTime, offset: FixedOffset) -> Self {
        Self { at, offset }
    }

    /// Parse `"HH:MM"` with an offset east of UTC in minutes.
    pub fn parse(at: &str, utc_offset_minutes: i32) -> Result<Self, ScheduleError> {
        let time = NaiveTime::parse_from_str(at.trim(), "%H:%M")
            .map_err(|_| ScheduleError::InvalidTime(at.to_string()))?;
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .ok_or(ScheduleError::InvalidOffset(utc_offset_minutes))?;
        Ok(Self::new(time, offset))
    }

    pub fn at(&self) -> NaiveTime {
        self.at
    }

    /// First instant strictly after `now` at which the schedule fires.
    pub fn next_run(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local_now = now.with_timezone(&self.offset);
        let today = local_now.date_naive();
        let candidate = self.fire_on(today);
        if candidate > now {
            return candidate;
        }
        // 1 日足しても範囲外になるのは chrono の最大日付付近だけ
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        self.fire_on(tomorrow)
    }

    fn fire_on(&self, date: NaiveDate) -> DateTime<Utc> {
        let naive = date.and_time(self.at);
        // FixedOffset has no gaps or folds, so the mapping is always Single
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| naive.and_utc())
    }
}

impl Default for DailySchedule {
    /// 09:00 UTC
    fn default() -> Self {
        Self::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            FixedOffset::east_opt(0).unwrap_or(Utc.fix()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[rstest]
    #[case::before_today(utc(2024, 1, 1, 8, 59), utc(2024, 1, 1, 9, 0))]
    #[case::exactly_at(utc(2024, 1, 1, 9, 0), utc(2024, 1, 2, 9, 0))]
    #[case::after_today(utc(2024, 1, 1, 17, 30), utc(2024, 1, 2, 9, 0))]
    #[case::month_end(utc(2024, 1, 31, 10, 0), utc(2024, 2, 1, 9, 0))]
    #[case::leap_day(utc(2024, 2, 28, 9, 0), utc(2024, 2, 29, 9, 0))]
    fn next_run_in_utc(#[case] now: DateTime<Utc>, #[case] expected: DateTime<Utc>) {
        let schedule = DailySchedule::default();
        assert_eq!(schedule.next_run(now), expected);
    }

    #[test]
    fn next_run_respects_offset() {
        // 09:00 at UTC+9 is 00:00 UTC
        let schedule = DailySchedule::parse("09:00", 9 * 60).unwrap();
        assert_eq!(
            schedule.next_run(utc(2024, 1, 1, 1, 0)),
            utc(2024, 1, 2, 0, 0)
        );
        assert_eq!(
            schedule.next_run(utc(2023, 12, 31, 23, 0)),
            utc(2024, 1, 1, 0, 0)
        );
    }

    #[test]
    fn next_run_with_negative_offset_crosses_utc_midnight() {
        // 21:00 at UTC-5 is 02:00 UTC the next day
        let schedule = DailySchedule::parse("21:00", -5 * 60).unwrap();
        assert_eq!(
            schedule.next_run(utc(2024, 1, 1, 12, 0)),
            utc(2024, 1, 2, 2, 0)
        );
    }

    #[rstest]
    #[case("9am")]
    #[case("25:00")]
    #[case("")]
    fn parse_rejects_bad_time(#[case] input: &str) {
        assert_eq!(
            DailySchedule::parse(input, 0),
            Err(ScheduleError::InvalidTime(input.to_string()))
        );
    }

    #[test]
    fn parse_rejects_bad_offset() {
        assert_eq!(
            DailySchedule::parse("09:00", 24 * 60),
            Err(ScheduleError::InvalidOffset(24 * 60))
        );
    }
}
