//! Pure formula engine: discounts, agios, annualized rates, and equivalent dates
//!
//! All operations are deterministic transforms of already-validated
//! numeric and date inputs, using the 360-day commercial year convention.
//! Monetary and rate outputs are rounded to 2 decimals at the boundary.

mod agios;
mod discount;
mod equivalence;
mod error;
mod rounding;

pub use agios::{agios, rates, AgiosResult, RatesResult};
pub use discount::{commercial_discount, rational_discount, DiscountResult};
pub use equivalence::{equivalent_date, Effect, EquivalenceResult};
pub use error::EngineError;
pub use rounding::round2;
