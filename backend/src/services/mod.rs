//! Service layer for the calculators.
//!
//! Every function here is pure: the current date is always passed in by the
//! caller (see [`clock`]) and the static reference tables are loaded once and
//! handed over by reference.

pub mod baby_cost;
pub mod clock;
pub mod conception;
pub mod date_math;
pub mod pregnancy_check;
pub mod pregnancy_week;
pub mod vaccination;


pub use baby_cost::{estimate as estimate_baby_cost, EstimateError, PricingTable};
pub use clock::{Clock, FixedClock, SystemClock};
pub use conception::conception_window;
pub use date_math::{due_date_summary, ovulation_window};
pub use pregnancy_check::assess as assess_pregnancy_check;
pub use pregnancy_week::PregnancyWeekTable;
pub use vaccination::VaccinationScheduleBuilder;
