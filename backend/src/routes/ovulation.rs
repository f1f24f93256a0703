use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, CycleLength};

/// Request body for the ovulation calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvulationRequest {
    pub last_period: CalendarDate,
    #[serde(default)]
    pub cycle_length: CycleLength,
}

/// Ovulation day and fertile window for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvulationResult {
    pub ovulation_date: CalendarDate,
    pub fertile_window_start: CalendarDate,
    /// Peak day of the window; equal to the ovulation date.
    pub fertile_window_end: CalendarDate,
    pub next_period: CalendarDate,
}

pub const OVULATION_PATH: &str = "/ovulation";
