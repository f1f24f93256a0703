use serde::{Deserialize, Serialize};

/// Pregnancy trimester, serialized as `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub fn number(&self) -> u8 {
        match self {
            Trimester::First => 1,
            Trimester::Second => 2,
            Trimester::Third => 3,
        }
    }
}

impl From<Trimester> for u8 {
    fn from(trimester: Trimester) -> Self {
        trimester.number()
    }
}

impl TryFrom<u8> for Trimester {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Trimester::First),
            2 => Ok(Trimester::Second),
            3 => Ok(Trimester::Third),
            other => Err(format!("invalid trimester {}", other)),
        }
    }
}

/// Confidence attached to a conception estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimester_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Trimester::Second).unwrap(), "2");
        let back: Trimester = serde_json::from_str("3").unwrap();
        assert_eq!(back, Trimester::Third);
        assert!(serde_json::from_str::<Trimester>("4").is_err());
    }

    #[test]
    fn test_confidence_wire_names() {
        assert_eq!(serde_json::to_string(&ConfidenceLevel::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&ConfidenceLevel::Low).unwrap(), "\"Low\"");
    }
}
