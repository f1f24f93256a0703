use serde::{Deserialize, Serialize};

use crate::models::{CalendarDate, ConfidenceLevel, CycleLength, DueDateConfidence, ReferenceKind};

/// Request body for the conception date calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptionRequest {
    /// Either the first day of the last period or the due date, per `kind`.
    pub date: CalendarDate,
    #[serde(rename = "type")]
    pub kind: ReferenceKind,
    #[serde(default)]
    pub cycle_length: CycleLength,
    #[serde(default)]
    pub is_irregular: bool,
    #[serde(default)]
    pub due_date_confidence: Option<DueDateConfidence>,
}

/// Estimated conception window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptionResult {
    pub conception_window_start: CalendarDate,
    pub conception_window_end: CalendarDate,
    pub probable_conception_date: CalendarDate,
    pub confidence_level: ConfidenceLevel,
    pub explanation: String,
}

pub const CONCEPTION_PATH: &str = "/conception-calculator";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_client_payload() {
        let req: ConceptionRequest = serde_json::from_str(
            r#"{
                "date": "2024-10-07",
                "type": "DUE_DATE",
                "cycleLength": 30,
                "isIrregular": false,
                "dueDateConfidence": "DOCTOR"
            }"#,
        )
        .unwrap();
        assert_eq!(req.kind, ReferenceKind::DueDate);
        assert_eq!(req.cycle_length.days(), 30);
        assert_eq!(req.due_date_confidence, Some(DueDateConfidence::Doctor));
    }

    #[test]
    fn test_request_null_confidence_and_defaults() {
        let req: ConceptionRequest =
            serde_json::from_str(r#"{"date":"2024-01-01","type":"LMP","dueDateConfidence":null}"#)
                .unwrap();
        assert_eq!(req.cycle_length.days(), 28);
        assert!(!req.is_irregular);
        assert_eq!(req.due_date_confidence, None);
    }
}
