//! Conception window estimate from an LMP or a due date.

use crate::api::ConceptionResult;
use crate::models::{CalendarDate, ConfidenceLevel, CycleLength, DueDateConfidence, ReferenceKind};

use super::date_math::{implied_lmp, ovulation_window};

/// Days either side of ovulation covered by the window for regular cycles.
pub const REGULAR_SPREAD_DAYS: i64 = 3;

/// Days either side of ovulation covered by the window for irregular cycles.
pub const IRREGULAR_SPREAD_DAYS: i64 = 7;

pub fn window_spread(is_irregular: bool) -> i64 {
    if is_irregular {
        IRREGULAR_SPREAD_DAYS
    } else {
        REGULAR_SPREAD_DAYS
    }
}

/// Confidence in the estimate. The due-date confidence is only consulted
/// when the reference date is a due date.
pub fn confidence_level(
    method: ReferenceKind,
    is_irregular: bool,
    due_date_confidence: Option<DueDateConfidence>,
) -> ConfidenceLevel {
    match (method, due_date_confidence) {
        (ReferenceKind::DueDate, Some(DueDateConfidence::Doctor)) => ConfidenceLevel::High,
        (ReferenceKind::DueDate, _) => ConfidenceLevel::Medium,
        (ReferenceKind::Lmp, _) if is_irregular => ConfidenceLevel::Low,
        (ReferenceKind::Lmp, _) => ConfidenceLevel::Medium,
    }
}

pub fn conception_window(
    reference: CalendarDate,
    method: ReferenceKind,
    cycle: CycleLength,
    is_irregular: bool,
    due_date_confidence: Option<DueDateConfidence>,
) -> ConceptionResult {
    let lmp = implied_lmp(reference, method);
    let ovulation = ovulation_window(lmp, cycle).ovulation_date;
    let spread = window_spread(is_irregular);
    let confidence = confidence_level(method, is_irregular, due_date_confidence);

    ConceptionResult {
        conception_window_start: ovulation.sub_days(spread),
        conception_window_end: ovulation.add_days(spread),
        probable_conception_date: ovulation,
        confidence_level: confidence,
        explanation: explanation(method, cycle, is_irregular, spread, due_date_confidence),
    }
}

fn explanation(
    method: ReferenceKind,
    cycle: CycleLength,
    is_irregular: bool,
    spread: i64,
    due_date_confidence: Option<DueDateConfidence>,
) -> String {
    let basis = match (method, due_date_confidence) {
        (ReferenceKind::DueDate, Some(DueDateConfidence::Doctor)) => {
            "Based on the due date given by your doctor, counted back 280 days to the start \
             of your last period"
        }
        (ReferenceKind::DueDate, _) => {
            "Based on your estimated due date, counted back 280 days to the start of your \
             last period"
        }
        (ReferenceKind::Lmp, _) => "Based on the first day of your last period",
    };

    let mut text = format!(
        "{} and a {}-day cycle, ovulation most likely happened 14 days before your next \
         expected period. Conception usually happens within a few days of ovulation, so the \
         window spans {} days either side of that date.",
        basis,
        cycle.days(),
        spread
    );
    if is_irregular {
        text.push_str(&format!(
            " Because your cycles are irregular, the window has been widened from {} to {} days \
             either side.",
            REGULAR_SPREAD_DAYS, spread
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_lmp_regular_window() {
        let result = conception_window(
            date(2024, 1, 1),
            ReferenceKind::Lmp,
            CycleLength::default(),
            false,
            None,
        );
        assert_eq!(result.probable_conception_date, date(2024, 1, 15));
        assert_eq!(result.conception_window_start, date(2024, 1, 12));
        assert_eq!(result.conception_window_end, date(2024, 1, 18));
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
        assert!(!result.explanation.contains("irregular"));
    }

    #[test]
    fn test_due_date_matches_lmp() {
        let cycle = CycleLength::new(30).unwrap();
        let from_due =
            conception_window(date(2024, 10, 7), ReferenceKind::DueDate, cycle, true, None);
        let from_lmp = conception_window(date(2024, 1, 1), ReferenceKind::Lmp, cycle, true, None);
        assert_eq!(from_due.conception_window_start, from_lmp.conception_window_start);
        assert_eq!(from_due.conception_window_end, from_lmp.conception_window_end);
        assert_eq!(from_due.probable_conception_date, from_lmp.probable_conception_date);
    }

    #[test]
    fn test_irregular_window_is_wider() {
        let lmp = date(2024, 1, 1);
        let cycle = CycleLength::default();
        let regular = conception_window(lmp, ReferenceKind::Lmp, cycle, false, None);
        let irregular = conception_window(lmp, ReferenceKind::Lmp, cycle, true, None);
        let width =
            |r: &ConceptionResult| r.conception_window_end.days_since(r.conception_window_start);
        assert!(width(&irregular) > width(&regular));
        assert!(irregular.explanation.contains("irregular"));
        assert!(irregular.explanation.contains("7 days"));
    }

    #[test]
    fn test_confidence_levels() {
        use ConfidenceLevel::*;
        let doctor = Some(DueDateConfidence::Doctor);
        let estimated = Some(DueDateConfidence::Estimated);
        assert_eq!(confidence_level(ReferenceKind::DueDate, false, doctor), High);
        assert_eq!(confidence_level(ReferenceKind::DueDate, true, doctor), High);
        assert_eq!(confidence_level(ReferenceKind::DueDate, false, estimated), Medium);
        assert_eq!(confidence_level(ReferenceKind::DueDate, false, None), Medium);
        assert_eq!(confidence_level(ReferenceKind::Lmp, false, None), Medium);
        assert_eq!(confidence_level(ReferenceKind::Lmp, true, None), Low);
        // LMP input ignores a stray due-date confidence.
        assert_eq!(confidence_level(ReferenceKind::Lmp, true, doctor), Low);
    }
}
