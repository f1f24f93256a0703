//! "Am I pregnant?" quiz scoring.

use crate::api::{
    HomeTest, Intimacy, PeriodStatus, PregnancyCheckRequest, PregnancyCheckResult,
    PregnancyLikelihood, Spotting, Symptoms,
};

const VERY_LIKELY_THRESHOLD: i32 = 5;
const POSSIBLY_THRESHOLD: i32 = 3;

/// Classify a set of quiz answers.
///
/// A home test result dominates the symptom score: positive is conclusive,
/// unclear is inconclusive, and a negative test with a period more than five
/// days late asks for a retest.
pub fn assess(answers: &PregnancyCheckRequest) -> PregnancyCheckResult {
    let likelihood = classify(answers);
    log::debug!("pregnancy check answers={:?} result={:?}", answers, likelihood);
    result_for(likelihood)
}

pub fn classify(answers: &PregnancyCheckRequest) -> PregnancyLikelihood {
    match (answers.q5_test, answers.q1_period) {
        (HomeTest::Positive, _) => return PregnancyLikelihood::VeryLikely,
        (HomeTest::Unclear, _) => return PregnancyLikelihood::Inconclusive,
        (HomeTest::Negative, PeriodStatus::Late5Plus) => return PregnancyLikelihood::Inconclusive,
        _ => {}
    }
    if answers.q2_sex == Intimacy::No {
        return PregnancyLikelihood::Unlikely;
    }

    let score = score(answers);
    if score >= VERY_LIKELY_THRESHOLD {
        PregnancyLikelihood::VeryLikely
    } else if score >= POSSIBLY_THRESHOLD {
        PregnancyLikelihood::Possibly
    } else {
        PregnancyLikelihood::Unlikely
    }
}

fn score(answers: &PregnancyCheckRequest) -> i32 {
    let period = match answers.q1_period {
        PeriodStatus::Late5Plus => 3,
        PeriodStatus::Late1To4 => 2,
        PeriodStatus::NotSure => 1,
        PeriodStatus::No => 0,
    };
    let intimacy = match answers.q2_sex {
        Intimacy::Yes => 2,
        Intimacy::NotSure => 1,
        Intimacy::No => 0,
    };
    // Light spotting can be implantation bleeding; heavier bleeding points to a period.
    let spotting = match answers.q3_spotting {
        Spotting::YesLight => 1,
        Spotting::YesHeavy => -2,
        Spotting::No => 0,
    };
    let symptoms = match answers.q4_symptoms {
        Symptoms::Several => 2,
        Symptoms::OneTwo => 1,
        Symptoms::None => 0,
    };
    let test = match answers.q5_test {
        HomeTest::Negative => -2,
        _ => 0,
    };
    period + intimacy + spotting + symptoms + test
}

fn result_for(likelihood: PregnancyLikelihood) -> PregnancyCheckResult {
    let (copy, guidance): (&str, &[&str]) = match likelihood {
        PregnancyLikelihood::VeryLikely => (
            "Your answers suggest you are very likely pregnant.",
            &[
                "Confirm with a doctor through a blood test or ultrasound.",
                "Start taking folic acid if you have not already.",
                "Avoid alcohol, smoking and medicines not cleared by your doctor.",
                "Use the due date calculator to estimate your due date.",
            ],
        ),
        PregnancyLikelihood::Possibly => (
            "You could be pregnant, but it is too early to say for sure.",
            &[
                "Take a home pregnancy test with first-morning urine.",
                "If the test is negative and your period has not come, test again in 3-5 days.",
                "Note any symptoms so you can share them with your doctor.",
            ],
        ),
        PregnancyLikelihood::Unlikely => (
            "Based on your answers, pregnancy seems unlikely right now.",
            &[
                "Track your cycle to know when your next period is due.",
                "If your period is more than a week late, take a home pregnancy test.",
                "Talk to a doctor if your cycles are often irregular.",
            ],
        ),
        PregnancyLikelihood::Inconclusive => (
            "Your answers are inconclusive. A repeat test will give a clearer picture.",
            &[
                "Repeat the home test in 2-3 days using first-morning urine.",
                "Read the result within the time given on the test kit.",
                "If results stay unclear or your period is late, see a doctor for a blood test.",
            ],
        ),
    };

    PregnancyCheckResult {
        result: likelihood,
        copy: copy.to_string(),
        next_guidance: guidance.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(
        q1_period: PeriodStatus,
        q2_sex: Intimacy,
        q3_spotting: Spotting,
        q4_symptoms: Symptoms,
        q5_test: HomeTest,
    ) -> PregnancyCheckRequest {
        PregnancyCheckRequest {
            q1_period,
            q2_sex,
            q3_spotting,
            q4_symptoms,
            q5_test,
        }
    }

    #[test]
    fn test_positive_test_is_very_likely() {
        let a = answers(
            PeriodStatus::No,
            Intimacy::No,
            Spotting::YesHeavy,
            Symptoms::None,
            HomeTest::Positive,
        );
        assert_eq!(classify(&a), PregnancyLikelihood::VeryLikely);
    }

    #[test]
    fn test_unclear_test_is_inconclusive() {
        let a = answers(
            PeriodStatus::Late5Plus,
            Intimacy::Yes,
            Spotting::No,
            Symptoms::Several,
            HomeTest::Unclear,
        );
        assert_eq!(classify(&a), PregnancyLikelihood::Inconclusive);
    }

    #[test]
    fn test_negative_test_with_late_period_is_inconclusive() {
        let a = answers(
            PeriodStatus::Late5Plus,
            Intimacy::Yes,
            Spotting::No,
            Symptoms::None,
            HomeTest::Negative,
        );
        assert_eq!(classify(&a), PregnancyLikelihood::Inconclusive);
    }

    #[test]
    fn test_no_intimacy_is_unlikely() {
        let a = answers(
            PeriodStatus::Late1To4,
            Intimacy::No,
            Spotting::YesLight,
            Symptoms::Several,
            HomeTest::No,
        );
        assert_eq!(classify(&a), PregnancyLikelihood::Unlikely);
    }

    #[test]
    fn test_score_bands() {
        // 3 + 2 + 0 + 2 = 7
        let strong = answers(
            PeriodStatus::Late5Plus,
            Intimacy::Yes,
            Spotting::No,
            Symptoms::Several,
            HomeTest::No,
        );
        assert_eq!(classify(&strong), PregnancyLikelihood::VeryLikely);

        // 2 + 1 + 0 + 0 = 3
        let some = answers(
            PeriodStatus::Late1To4,
            Intimacy::NotSure,
            Spotting::No,
            Symptoms::None,
            HomeTest::No,
        );
        assert_eq!(classify(&some), PregnancyLikelihood::Possibly);

        // 0 + 2 - 2 + 1 = 1
        let weak = answers(
            PeriodStatus::No,
            Intimacy::Yes,
            Spotting::YesHeavy,
            Symptoms::OneTwo,
            HomeTest::No,
        );
        assert_eq!(classify(&weak), PregnancyLikelihood::Unlikely);

        // 2 + 2 + 0 + 1 - 2 = 3
        let negative = answers(
            PeriodStatus::Late1To4,
            Intimacy::Yes,
            Spotting::No,
            Symptoms::OneTwo,
            HomeTest::Negative,
        );
        assert_eq!(classify(&negative), PregnancyLikelihood::Possibly);
    }

    #[test]
    fn test_assess_carries_copy_and_guidance() {
        let a = answers(PeriodStatus::No, Intimacy::No, Spotting::No, Symptoms::None, HomeTest::No);
        let result = assess(&a);
        assert_eq!(result.result, PregnancyLikelihood::Unlikely);
        assert!(!result.copy.is_empty());
        assert_eq!(result.next_guidance.len(), 3);
    }
}
