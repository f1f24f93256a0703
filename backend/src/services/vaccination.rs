//! Immunization timeline built from a birth date.
//!
//! The schedule itself is reference data (`data/vaccination_schedule.json`,
//! an IAP-style pediatric schedule) embedded at compile time.

use serde::{Deserialize, Serialize};

use crate::api::VaccinationStage;
use crate::models::{CalendarDate, TableError};

const TABLE_NAME: &str = "vaccination schedule";

const EMBEDDED_SCHEDULE: &str = include_str!("../../data/vaccination_schedule.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// Age at which a stage falls due, relative to birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeOffset {
    pub unit: OffsetUnit,
    pub amount: u32,
}

impl AgeOffset {
    pub fn apply(&self, birth_date: CalendarDate) -> CalendarDate {
        match self.unit {
            OffsetUnit::Days => birth_date.add_days(i64::from(self.amount)),
            OffsetUnit::Weeks => birth_date.add_weeks(i64::from(self.amount)),
            OffsetUnit::Months => birth_date.add_months(self.amount),
            OffsetUnit::Years => birth_date.add_years(self.amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub age: String,
    pub offset: AgeOffset,
    pub items: Vec<String>,
}

/// Builds the ordered list of vaccination stages for a birth date.
#[derive(Debug, Clone)]
pub struct VaccinationScheduleBuilder {
    entries: Vec<ScheduleEntry>,
}

impl VaccinationScheduleBuilder {
    /// Validate a schedule table.
    ///
    /// Rows must be chronological for every possible birth date, so the output
    /// of [`build`](Self::build) is sorted by due date without re-sorting.
    pub fn new(entries: Vec<ScheduleEntry>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty { table: TABLE_NAME });
        }
        check_chronological(&entries)?;
        Ok(Self { entries })
    }

    /// The schedule shipped with the crate.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_json(EMBEDDED_SCHEDULE)
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let entries: Vec<ScheduleEntry> =
            serde_json::from_str(json).map_err(|e| TableError::Parse {
                table: TABLE_NAME,
                message: e.to_string(),
            })?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// One stage per table row, in table order. A stage is past when its due
    /// date is strictly before `today`.
    pub fn build(&self, birth_date: CalendarDate, today: CalendarDate) -> Vec<VaccinationStage> {
        self.entries
            .iter()
            .map(|entry| {
                let due_date = entry.offset.apply(birth_date);
                VaccinationStage {
                    age: entry.age.clone(),
                    items: entry.items.clone(),
                    due_date,
                    is_past: due_date < today,
                }
            })
            .collect()
    }
}

/// Month lengths vary, so check ordering against every start day of a full
/// leap-year cycle.
fn check_chronological(entries: &[ScheduleEntry]) -> Result<(), TableError> {
    let Some(cycle_start) = CalendarDate::from_ymd(2024, 1, 1) else {
        return Ok(());
    };
    for day in 0..(365 * 4 + 1) {
        let birth = cycle_start.add_days(day);
        for pair in entries.windows(2) {
            if pair[1].offset.apply(birth) < pair[0].offset.apply(birth) {
                return Err(TableError::OutOfOrder {
                    table: TABLE_NAME,
                    entry: pair[1].age.clone(),
                });
            }
        }
    }
    Ok(())
}
