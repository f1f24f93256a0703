use serde::{Deserialize, Serialize};

use crate::models::CalendarDate;

/// Request body for the vaccination schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaccinationRequest {
    /// Child's date of birth.
    pub dob: CalendarDate,
}

/// One age milestone of the immunization timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationStage {
    /// Age label, e.g. "6 Weeks".
    pub age: String,
    pub items: Vec<String>,
    pub due_date: CalendarDate,
    /// True when the due date is strictly before today.
    pub is_past: bool,
}

pub const VACCINATION_SCHEDULE_PATH: &str = "/vaccination-schedule";
