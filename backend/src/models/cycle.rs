use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Menstrual cycle length in days, restricted to the practical human range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CycleLength(u32);

impl CycleLength {
    pub const MIN_DAYS: u32 = 20;
    pub const MAX_DAYS: u32 = 45;
    pub const DEFAULT_DAYS: u32 = 28;

    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if (Self::MIN_DAYS..=Self::MAX_DAYS).contains(&days) {
            Ok(Self(days))
        } else {
            Err(ValidationError::CycleLengthOutOfRange {
                days,
                min: Self::MIN_DAYS,
                max: Self::MAX_DAYS,
            })
        }
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl TryFrom<u32> for CycleLength {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<CycleLength> for u32 {
    fn from(cycle: CycleLength) -> Self {
        cycle.0
    }
}

/// What a reference date means: first day of the last period, or the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceKind {
    Lmp,
    DueDate,
}

/// How a due date was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DueDateConfidence {
    /// Given by a doctor (ultrasound or exam).
    Doctor,
    /// Self-estimated.
    Estimated,
}
