use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, ReferenceKind};

/// Request body for locating the current pregnancy week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyWeekRequest {
    pub reference_date: CalendarDate,
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
}

/// One row of the week-by-week development table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyWeekData {
    pub week: u32,
    /// Fruit or vegetable the baby's size is compared to.
    pub fruit: String,
    pub size: String,
    pub weight: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyWeekResult {
    pub current_week: u32,
    pub week_data: PregnancyWeekData,
}

pub const PREGNANCY_WEEK_PATH: &str = "/pregnancy-week";
pub const PREGNANCY_WEEK_DETAIL_PATH: &str = "/pregnancy-week/{week}";
pub const PREGNANCY_WEEKS_PATH: &str = "/pregnancy-weeks";
