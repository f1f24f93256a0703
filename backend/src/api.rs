//! Public API surface for the tools backend.
//!
//! This file consolidates the request and response types of every calculator.
//! All types derive Serialize/Deserialize and use the wire names the
//! JanmaSethu client sends and reads.

pub use crate::routes::baby_cost::BabyCostRequest;
pub use crate::routes::baby_cost::BabyCostResult;
pub use crate::routes::baby_cost::ChildcareType;
pub use crate::routes::baby_cost::CityTier;
pub use crate::routes::baby_cost::ClothingTier;
pub use crate::routes::baby_cost::DeliveryType;
pub use crate::routes::baby_cost::DiaperBrand;
pub use crate::routes::baby_cost::FeedingType;
pub use crate::routes::baby_cost::FormulaTier;
pub use crate::routes::baby_cost::GearTier;
pub use crate::routes::baby_cost::HealthType;
pub use crate::routes::baby_cost::HospitalType;
pub use crate::routes::conception::ConceptionRequest;
pub use crate::routes::conception::ConceptionResult;
pub use crate::routes::due_date::DueDateRequest;
pub use crate::routes::due_date::DueDateResult;
pub use crate::routes::health::HealthResponse;
pub use crate::routes::ovulation::OvulationRequest;
pub use crate::routes::ovulation::OvulationResult;
pub use crate::routes::pregnancy_check::HomeTest;
pub use crate::routes::pregnancy_check::Intimacy;
pub use crate::routes::pregnancy_check::PeriodStatus;
pub use crate::routes::pregnancy_check::PregnancyCheckRequest;
pub use crate::routes::pregnancy_check::PregnancyCheckResult;
pub use crate::routes::pregnancy_check::PregnancyLikelihood;
pub use crate::routes::pregnancy_check::Spotting;
pub use crate::routes::pregnancy_check::Symptoms;
pub use crate::routes::pregnancy_week::PregnancyWeekData;
pub use crate::routes::pregnancy_week::PregnancyWeekRequest;
pub use crate::routes::pregnancy_week::PregnancyWeekResult;
pub use crate::routes::vaccination::VaccinationRequest;
pub use crate::routes::vaccination::VaccinationStage;

pub use crate::models::{
    CalendarDate, ConfidenceLevel, CycleLength, DueDateConfidence, ReferenceKind, Trimester,
};
