use serde::{Deserialize, Serialize};

/// Is the period late?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeriodStatus {
    #[serde(rename = "LATE_5_PLUS")]
    Late5Plus,
    #[serde(rename = "LATE_1_4")]
    Late1To4,
    No,
    NotSure,
}

/// Unprotected intimacy around the fertile days?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intimacy {
    Yes,
    NotSure,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Spotting {
    YesLight,
    YesHeavy,
    No,
}

/// Nausea, fatigue, breast tenderness, frequent urination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symptoms {
    None,
    OneTwo,
    Several,
}

/// Home pregnancy test outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HomeTest {
    Positive,
    Negative,
    Unclear,
    No,
}

/// Answers to the five-question "Am I pregnant?" quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PregnancyCheckRequest {
    pub q1_period: PeriodStatus,
    pub q2_sex: Intimacy,
    pub q3_spotting: Spotting,
    pub q4_symptoms: Symptoms,
    pub q5_test: HomeTest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PregnancyLikelihood {
    VeryLikely,
    Possibly,
    Unlikely,
    Inconclusive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyCheckResult {
    pub result: PregnancyLikelihood,
    pub copy: String,
    pub next_guidance: Vec<String>,
}

pub const PREGNANCY_CHECK_PATH: &str = "/am-i-pregnant";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_client_payload() {
        let req: PregnancyCheckRequest = serde_json::from_str(
            r#"{
                "q1_period": "LATE_5_PLUS",
                "q2_sex": "NOT_SURE",
                "q3_spotting": "YES_LIGHT",
                "q4_symptoms": "ONE_TWO",
                "q5_test": "NO"
            }"#,
        )
        .unwrap();
        assert_eq!(req.q1_period, PeriodStatus::Late5Plus);
        assert_eq!(req.q2_sex, Intimacy::NotSure);
        assert_eq!(req.q3_spotting, Spotting::YesLight);
        assert_eq!(req.q4_symptoms, Symptoms::OneTwo);
        assert_eq!(req.q5_test, HomeTest::No);
    }

    #[test]
    fn test_late_1_4_wire_name() {
        assert_eq!(
            serde_json::to_string(&PeriodStatus::Late1To4).unwrap(),
            "\"LATE_1_4\""
        );
    }

    #[test]
    fn test_result_wire_shape() {
        let result = PregnancyCheckResult {
            result: PregnancyLikelihood::VeryLikely,
            copy: "copy".to_string(),
            next_guidance: vec!["a".to_string()],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["result"], "VERY_LIKELY");
        assert_eq!(json["nextGuidance"][0], "a");
    }
}
