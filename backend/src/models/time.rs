use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Months, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ValidationError;

/// Wire format for every date exchanged with the client.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date with no time-of-day component.
///
/// All arithmetic happens in whole days (or calendar months/years, clamped to
/// the end of the month), so there is no daylight-saving or midnight drift.
/// Serialized as `yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse an ISO-8601 calendar date (`yyyy-MM-dd`).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: value.to_string(),
            })
    }

    /// The calendar date of `now` in the given reference offset.
    pub fn today_in(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self(now.with_timezone(&offset).date_naive())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Shift by a signed number of days, saturating at the chrono date range.
    pub fn add_days(self, days: i64) -> Self {
        let shifted = TimeDelta::try_days(days).and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(date) => Self(date),
            None if days >= 0 => Self(NaiveDate::MAX),
            None => Self(NaiveDate::MIN),
        }
    }

    pub fn sub_days(self, days: i64) -> Self {
        self.add_days(-days)
    }

    pub fn add_weeks(self, weeks: i64) -> Self {
        self.add_days(weeks.saturating_mul(7))
    }

    /// Add calendar months. Jan 31 + 1 month lands on the last day of February.
    pub fn add_months(self, months: u32) -> Self {
        self.0
            .checked_add_months(Months::new(months))
            .map(Self)
            .unwrap_or(Self(NaiveDate::MAX))
    }

    pub fn add_years(self, years: u32) -> Self {
        self.add_months(years.saturating_mul(12))
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: CalendarDate) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    pub fn days_until(self, later: CalendarDate) -> i64 {
        later.days_since(self)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
