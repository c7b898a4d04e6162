//! Matching domain models.
//!
//! Provides the data types for one problem instance and its outcome.
//!
//! # Domain Mappings
//!
//! | u-match | Home services | Healthcare | Logistics |
//! |---------|---------------|------------|-----------|
//! | Provider | Tradesperson | Clinician | Carrier |
//! | Category | Trade | Specialty | Vehicle class |
//! | ServiceRequest | Job ticket | Appointment | Pickup |
//! | MatchResult | Work plan | Roster | Dispatch plan |

mod provider;
mod registry;
mod request;
mod schedule;

pub use provider::Provider;
pub use registry::Registry;
pub use request::{DaySpec, ServiceRequest};
pub use schedule::{Assignment, MatchResult};
