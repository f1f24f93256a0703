//! Week-by-week development lookup.

use crate::api::{PregnancyWeekData, PregnancyWeekResult};
use crate::models::{CalendarDate, ReferenceKind, TableError};

use super::date_math::gestational_week_from_reference;

const TABLE_NAME: &str = "pregnancy weeks";

const EMBEDDED_WEEKS: &str = include_str!("../../data/pregnancy_weeks.json");

/// Contiguous table of development records, one per week.
#[derive(Debug, Clone)]
pub struct PregnancyWeekTable {
    weeks: Vec<PregnancyWeekData>,
}

impl PregnancyWeekTable {
    /// Rows must be sorted and contiguous (no missing weeks).
    pub fn new(weeks: Vec<PregnancyWeekData>) -> Result<Self, TableError> {
        if weeks.is_empty() {
            return Err(TableError::Empty { table: TABLE_NAME });
        }
        for pair in weeks.windows(2) {
            if pair[0].week.checked_add(1) != Some(pair[1].week) {
                return Err(TableError::OutOfOrder {
                    table: TABLE_NAME,
                    entry: format!("week {}", pair[1].week),
                });
            }
        }
        Ok(Self { weeks })
    }

    pub fn embedded() -> Result<Self, TableError> {
        Self::from_json(EMBEDDED_WEEKS)
    }

    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let weeks: Vec<PregnancyWeekData> =
            serde_json::from_str(json).map_err(|e| TableError::Parse {
                table: TABLE_NAME,
                message: e.to_string(),
            })?;
        Self::new(weeks)
    }

    pub fn first_week(&self) -> u32 {
        self.weeks.first().map(|w| w.week).unwrap_or_default()
    }

    pub fn last_week(&self) -> u32 {
        self.weeks.last().map(|w| w.week).unwrap_or_default()
    }

    pub fn all(&self) -> &[PregnancyWeekData] {
        &self.weeks
    }

    /// Record for `week`, or `None` outside the table range.
    pub fn lookup(&self, week: u32) -> Option<&PregnancyWeekData> {
        let index = week.checked_sub(self.first_week())?;
        self.weeks.get(usize::try_from(index).ok()?)
    }

    /// Current week for a reference date. `week_data` is the nearest record
    /// when the week falls outside the table (e.g. week 2 shows week 4).
    pub fn week_for_reference(
        &self,
        reference: CalendarDate,
        kind: ReferenceKind,
        today: CalendarDate,
    ) -> PregnancyWeekResult {
        let current_week = gestational_week_from_reference(reference, kind, today);
        let clamped = current_week.clamp(self.first_week(), self.last_week());
        let offset = usize::try_from(clamped - self.first_week()).unwrap_or(0);
        let week_data = self.weeks[offset.min(self.weeks.len() - 1)].clone();

        PregnancyWeekResult {
            current_week,
            week_data,
        }
    }
}
