//! Compounding time-deposit ("deposito") return calculator
//!
//! Converts heterogeneous user-supplied units (months/years, per-annum vs.
//! monthly rates) into a normalized monthly model, then iteratively
//! compounds principal over complete tenor periods, deducting withholding
//! tax from each period's interest.
//!
//! The core is a pure `f64` transform with no hidden state: identical
//! inputs always produce identical output. Presentation concerns (currency
//! formatting, unit selectors) live in the binaries, not here.

pub mod calculator;
pub mod deposit;
pub mod scenario;

pub use calculator::{calculate, calculate_profit, CalculationResult};
pub use deposit::{DepositInput, NormalizedInput, RateBasis, TenorUnit};
