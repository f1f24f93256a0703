//! Request and response types for each calculator, with the path each one is
//! served under (relative to `/api/tools`).

pub mod baby_cost;
pub mod conception;
pub mod due_date;
pub mod health;
pub mod ovulation;
pub mod pregnancy_check;
pub mod pregnancy_week;
pub mod vaccination;

/// Prefix every tools endpoint is nested under.
pub const TOOLS_PREFIX: &str = "/api/tools";
