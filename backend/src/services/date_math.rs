//! Pure date arithmetic for pregnancy and cycle calculations.
//!
//! Nothing here reads the system clock: every function that depends on the
//! current date takes `today` explicitly.

use crate::api::{DueDateResult, OvulationResult};
use crate::models::{CalendarDate, CycleLength, ReferenceKind, Trimester};

/// Length of a pregnancy counted from the last menstrual period (40 weeks).
pub const PREGNANCY_DAYS: i64 = 280;

/// Ovulation is modeled as exactly this many days before the next period,
/// whatever the cycle length.
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Days before ovulation at which the fertile window opens.
pub const FERTILE_DAYS_BEFORE_OVULATION: i64 = 5;

/// Upper bound reported for the gestational week.
pub const MAX_GESTATIONAL_WEEK: u32 = 42;

pub fn due_date(lmp: CalendarDate) -> CalendarDate {
    lmp.add_days(PREGNANCY_DAYS)
}

/// Completed weeks between `lmp` and `today`. A future LMP reports 0.
pub fn weeks_pregnant(lmp: CalendarDate, today: CalendarDate) -> u32 {
    let days = today.days_since(lmp);
    if days <= 0 {
        return 0;
    }
    u32::try_from(days / 7).unwrap_or(u32::MAX)
}

/// Weeks 0-12 are the first trimester, 13-26 the second, 27 onwards the third.
pub fn trimester(weeks_pregnant: u32) -> Trimester {
    match weeks_pregnant {
        0..=12 => Trimester::First,
        13..=26 => Trimester::Second,
        _ => Trimester::Third,
    }
}

pub fn due_date_summary(lmp: CalendarDate, today: CalendarDate) -> DueDateResult {
    let weeks = weeks_pregnant(lmp, today);
    DueDateResult {
        due_date: due_date(lmp),
        weeks_pregnant: weeks,
        trimester: trimester(weeks),
    }
}

pub fn ovulation_window(lmp: CalendarDate, cycle: CycleLength) -> OvulationResult {
    let next_period = lmp.add_days(i64::from(cycle.days()));
    let ovulation_date = next_period.sub_days(LUTEAL_PHASE_DAYS);
    OvulationResult {
        ovulation_date,
        fertile_window_start: ovulation_date.sub_days(FERTILE_DAYS_BEFORE_OVULATION),
        fertile_window_end: ovulation_date,
        next_period,
    }
}

/// The last-period date a reference date stands for.
pub fn implied_lmp(reference: CalendarDate, kind: ReferenceKind) -> CalendarDate {
    match kind {
        ReferenceKind::Lmp => reference,
        ReferenceKind::DueDate => reference.sub_days(PREGNANCY_DAYS),
    }
}

/// Gestational week in `[0, 42]` from either an LMP or a due date.
pub fn gestational_week_from_reference(
    reference: CalendarDate,
    kind: ReferenceKind,
    today: CalendarDate,
) -> u32 {
    weeks_pregnant(implied_lmp(reference, kind), today).min(MAX_GESTATIONAL_WEEK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_due_date_example() {
        assert_eq!(due_date(date(2024, 1, 1)), date(2024, 10, 7));
    }

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(trimester(0), Trimester::First);
        assert_eq!(trimester(12), Trimester::First);
        assert_eq!(trimester(13), Trimester::Second);
        assert_eq!(trimester(26), Trimester::Second);
        assert_eq!(trimester(27), Trimester::Third);
        assert_eq!(trimester(45), Trimester::Third);
    }

    #[test]
    fn test_weeks_pregnant_floors() {
        let lmp = date(2024, 1, 1);
        assert_eq!(weeks_pregnant(lmp, date(2024, 1, 1)), 0);
        assert_eq!(weeks_pregnant(lmp, date(2024, 1, 7)), 0);
        assert_eq!(weeks_pregnant(lmp, date(2024, 1, 8)), 1);
        assert_eq!(weeks_pregnant(lmp, date(2024, 1, 14)), 1);
    }

    #[test]
    fn test_weeks_pregnant_future_lmp_is_zero() {
        assert_eq!(weeks_pregnant(date(2024, 6, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_due_date_summary() {
        let summary = due_date_summary(date(2024, 1, 1), date(2024, 4, 1));
        assert_eq!(summary.due_date, date(2024, 10, 7));
        assert_eq!(summary.weeks_pregnant, 13);
        assert_eq!(summary.trimester, Trimester::Second);
    }

    #[test]
    fn test_ovulation_example() {
        let result = ovulation_window(date(2024, 1, 1), CycleLength::default());
        assert_eq!(result.next_period, date(2024, 1, 29));
        assert_eq!(result.ovulation_date, date(2024, 1, 15));
        assert_eq!(result.fertile_window_start, date(2024, 1, 10));
        assert_eq!(result.fertile_window_end, date(2024, 1, 15));
    }

    #[test]
    fn test_ovulation_ignores_luteal_variation() {
        let cycle = CycleLength::new(35).unwrap();
        let result = ovulation_window(date(2024, 1, 1), cycle);
        assert_eq!(result.next_period, date(2024, 2, 5));
        assert_eq!(result.ovulation_date, date(2024, 1, 22));
    }

    #[test]
    fn test_gestational_week_from_due_date() {
        let today = date(2024, 4, 1);
        let from_lmp =
            gestational_week_from_reference(date(2024, 1, 1), ReferenceKind::Lmp, today);
        let from_due =
            gestational_week_from_reference(date(2024, 10, 7), ReferenceKind::DueDate, today);
        assert_eq!(from_lmp, 13);
        assert_eq!(from_due, 13);
    }

    #[test]
    fn test_gestational_week_is_clamped() {
        let today = date(2025, 6, 1);
        assert_eq!(
            gestational_week_from_reference(date(2024, 1, 1), ReferenceKind::Lmp, today),
            MAX_GESTATIONAL_WEEK
        );
        assert_eq!(
            gestational_week_from_reference(date(2026, 4, 1), ReferenceKind::DueDate, today),
            0
        );
    }
}
