//! Reporting Read Models
//!
//! Immutable aggregate rows for admin dashboards. Counts are computed
//! independently per collection; no cross-count consistency is promised.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use kernel::id::JobId;

use crate::domain::value_object::application_status::ApplicationStatus;

/// Total record counts per collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionCounts {
    pub jobs: i64,
    pub applications: i64,
    pub candidates: i64,
    pub employers: i64,
}

/// One row of the status group-by (only observed statuses appear)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ApplicationStatus,
    pub count: i64,
}

/// One row of the per-job application volume ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplicationCount {
    pub job_id: JobId,
    pub title: String,
    pub count: i64,
}

/// One row of the monthly application volume series (sparse: months with
/// zero applications are absent, not zero rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: i64,
}

/// Start of the trailing six-calendar-month reporting window: the first
/// day of the month five months before `now`'s month, so the current
/// partial month is the sixth.
pub fn monthly_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let months0 = now.year() * 12 + now.month0() as i32 - 5;
    let year = months0.div_euclid(12);
    let month = months0.rem_euclid(12) as u32 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("first of month is a valid UTC timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn test_window_spans_six_calendar_months() {
        let start = monthly_window_start(utc(2026, 8, 7));
        assert_eq!(start.year(), 2026);
        assert_eq!(start.month(), 3);
        assert_eq!(start.day(), 1);
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let start = monthly_window_start(utc(2026, 2, 28));
        assert_eq!(start.year(), 2025);
        assert_eq!(start.month(), 9);
        assert_eq!(start.day(), 1);
    }

    #[test]
    fn test_window_from_january() {
        let start = monthly_window_start(utc(2026, 1, 1));
        assert_eq!(start.year(), 2025);
        assert_eq!(start.month(), 8);
    }
}
