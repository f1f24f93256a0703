pub mod cycle;
pub mod error;
pub mod pregnancy;
pub mod time;


pub use cycle::*;
pub use error::*;
pub use pregnancy::*;
pub use time::*;
