use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CityTier {
    #[serde(rename = "METRO")]
    Metro,
    #[serde(rename = "TIER2")]
    Tier2,
    #[serde(rename = "TIER3")]
    Tier3,
}

impl CityTier {
    pub const ALL: [CityTier; 3] = [CityTier::Metro, CityTier::Tier2, CityTier::Tier3];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HospitalType {
    Govt,
    PvtStd,
    PvtPrem,
}

impl HospitalType {
    pub const ALL: [HospitalType; 3] =
        [HospitalType::Govt, HospitalType::PvtStd, HospitalType::PvtPrem];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    Normal,
    CSection,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 2] = [DeliveryType::Normal, DeliveryType::CSection];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedingType {
    Breast,
    Mixed,
    Formula,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormulaTier {
    Budget,
    #[default]
    Std,
    Prem,
}

impl FormulaTier {
    pub const ALL: [FormulaTier; 3] = [FormulaTier::Budget, FormulaTier::Std, FormulaTier::Prem];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiaperBrand {
    Budget,
    Branded,
}

impl DiaperBrand {
    pub const ALL: [DiaperBrand; 2] = [DiaperBrand::Budget, DiaperBrand::Branded];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClothingTier {
    Budget,
    Standard,
    Premium,
}

impl ClothingTier {
    pub const ALL: [ClothingTier; 3] =
        [ClothingTier::Budget, ClothingTier::Standard, ClothingTier::Premium];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthType {
    Govt,
    PvtPed,
    PvtPlus,
}

impl HealthType {
    pub const ALL: [HealthType; 3] = [HealthType::Govt, HealthType::PvtPed, HealthType::PvtPlus];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildcareType {
    None,
    PartTime,
    FullTime,
}

impl ChildcareType {
    pub const ALL: [ChildcareType; 3] =
        [ChildcareType::None, ChildcareType::PartTime, ChildcareType::FullTime];
}

/// Budget or premium variant of a gear item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GearTier {
    Budget,
    Premium,
}

/// Baby cost estimator inputs.
///
/// Every `custom_*` field overrides the computed standard figure for its
/// category when present. Empty strings and `null` count as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyCostRequest {
    pub city_tier: CityTier,

    pub hospital_type: HospitalType,
    pub delivery_type: DeliveryType,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_delivery_cost: Option<f64>,

    pub feeding_type: FeedingType,
    #[serde(default)]
    pub formula_tier: FormulaTier,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_feeding_cost: Option<f64>,

    pub diapers_per_day: u32,
    pub diaper_brand: DiaperBrand,
    pub wipes_enabled: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_hygiene_cost: Option<f64>,

    pub clothing_tier: ClothingTier,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_clothing_cost: Option<f64>,

    pub health_type: HealthType,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_health_cost: Option<f64>,

    pub childcare_type: ChildcareType,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_childcare_cost: Option<f64>,

    /// Selected gear items keyed by item id (e.g. "cradle").
    #[serde(default)]
    pub gear_selection: BTreeMap<String, GearTier>,
    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_gear_cost: Option<f64>,

    #[serde(
        default,
        deserialize_with = "deserialize_override",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_toy_cost: Option<f64>,
}

/// Accepts a number, a numeric string, an empty string or `null`.
fn deserialize_override<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse::<f64>()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("invalid amount '{}'", text)))
            }
        }
    }
}

/// Cost breakdown in rupees.
///
/// Each category carries the effective figure (custom override if one was
/// given) and the `standard_` figure computed from the pricing table, so a
/// client can pre-fill its override fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyCostResult {
    pub delivery: f64,
    pub feeding: f64,
    pub hygiene: f64,
    pub clothing: f64,
    #[serde(rename = "healthYearly")]
    pub health_yearly: f64,
    pub childcare: f64,
    pub gear: f64,
    pub toys: f64,

    pub standard_delivery: f64,
    pub standard_feeding: f64,
    pub standard_hygiene: f64,
    pub standard_clothing: f64,
    #[serde(rename = "standard_healthYearly")]
    pub standard_health_yearly: f64,
    pub standard_childcare: f64,
    pub standard_gear: f64,
    pub standard_toys: f64,

    #[serde(rename = "monthlyTotal")]
    pub monthly_total: f64,
    #[serde(rename = "firstYearTotal")]
    pub first_year_total: f64,
    #[serde(rename = "oneTime")]
    pub one_time: f64,
}

pub const BABY_COST_PATH: &str = "/baby-cost-calculator";
