//! Data Transfer Objects for the HTTP API.
//!
//! The calculator DTOs live in the routes module and are re-exported here so
//! handlers have a single import point.

pub use crate::api::{
    // Baby cost
    BabyCostRequest, BabyCostResult,
    // Conception
    ConceptionRequest, ConceptionResult,
    // Due date and ovulation
    DueDateRequest, DueDateResult, OvulationRequest, OvulationResult,
    // Health
    HealthResponse,
    // Am I pregnant
    PregnancyCheckRequest, PregnancyCheckResult,
    // Week by week
    PregnancyWeekData, PregnancyWeekRequest, PregnancyWeekResult,
    // Vaccination
    VaccinationRequest, VaccinationStage,
};
