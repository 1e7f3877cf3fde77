//! Deposit input data structures and raw-input parsing

mod data;
pub mod parse;

pub use data::{DepositInput, NormalizedInput, RateBasis, TenorUnit};

/// Months per year, used when normalizing year-denominated tenors and
/// per-annum interest rates to the monthly basis
pub const MONTHS_PER_YEAR: u32 = 12;
