use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, Trimester};

/// Request body for the due date calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDateRequest {
    /// First day of the last menstrual period.
    pub lmp: CalendarDate,
}

/// Estimated due date with current progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateResult {
    pub due_date: CalendarDate,
    pub weeks_pregnant: u32,
    pub trimester: Trimester,
}

pub const DUE_DATE_PATH: &str = "/due-date";
