//! Domain logic for the ShelfLife expiry tracker.
//!
//! Everything in this crate is pure: classification and aggregation take the
//! reference date as a parameter instead of reading a clock, so results are
//! deterministic and the crate compiles (and tests) on any target.

mod status;
mod stats;
mod validate;

pub use status::{classify, days_until, ItemStatus, WARNING_WINDOW_DAYS};
pub use stats::{overdue, upcoming, Expires, StatusCounts};
pub use validate::{validate_signup, SignupError};
