//! Source of "now" for the date calculators.
//!
//! Handlers never read the system clock directly; they ask the [`Clock`] held
//! in the application state so tests can pin the current date.

use chrono::{DateTime, FixedOffset, Utc};

use crate::models::CalendarDate;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of `now()` in the reference offset.
    fn today(&self, offset: FixedOffset) -> CalendarDate {
        CalendarDate::today_in(self.now(), offset)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Noon UTC on `date`, which is the same calendar date in every offset
    /// within +/-12 hours.
    pub fn at_date(date: CalendarDate) -> Self {
        let noon = date
            .naive()
            .and_hms_opt(12, 0, 0)
            .unwrap_or_default()
            .and_utc();
        Self(noon)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    #[test]
    fn test_fixed_clock_today() {
        let date = CalendarDate::from_ymd(2024, 5, 17).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.today(ist()), date);
        assert_eq!(clock.today(FixedOffset::east_opt(0).unwrap()), date);
    }

    #[test]
    fn test_today_crosses_midnight_in_reference_offset() {
        // 20:00 UTC is 01:30 the next day in IST.
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 5, 17, 20, 0, 0).unwrap());
        assert_eq!(clock.today(ist()), CalendarDate::from_ymd(2024, 5, 18).unwrap());
    }

    #[test]
    fn test_system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.timestamp() > 1_700_000_000);
    }
}
