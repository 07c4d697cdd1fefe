pub mod clock;
pub mod error;

pub use clock::{Clock, FixedClock, LocalClock};
pub use error::{AppError, Result};
