//! Iterative per-tenor compounding of a deposit balance
//!
//! Interest is simple within one tenor period and compounds across
//! periods: interest earned in period N joins the principal for period
//! N+1. Only complete tenor periods that fit inside the holding period
//! accrue; any remainder months are ignored, as real deposit products
//! break the contract at tenor boundaries.

use serde::{Deserialize, Serialize};

use crate::deposit::NormalizedInput;

/// Outcome of one deposit calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Balance after all complete tenor periods
    pub final_balance: f64,
    /// `final_balance - principal`
    pub profit: f64,
}

impl CalculationResult {
    /// Incomplete-form fallback: principal unchanged, no profit
    fn passthrough(principal: f64) -> Self {
        Self {
            final_balance: principal,
            profit: 0.0,
        }
    }
}

/// Run the compounding engine over normalized inputs.
///
/// If the principal, tenor, rate, or holding period is zero or negative
/// the inputs are treated as an incomplete form and the principal passes
/// through unchanged. This is defined behavior, not an error: partial
/// input displays the principal with no profit.
pub fn calculate(input: &NormalizedInput) -> CalculationResult {
    if input.principal <= 0.0
        || input.tenor_months == 0
        || input.monthly_interest_rate <= 0.0
        || input.holding_months == 0
    {
        return CalculationResult::passthrough(input.principal);
    }

    // Interest applicable to one full tenor period, in percent
    let interest_per_tenor = input.monthly_interest_rate * input.tenor_months as f64;

    // Complete tenor periods within the holding period; remainder ignored
    let periods = input.holding_months / input.tenor_months;

    let mut balance = input.principal;
    for _ in 0..periods {
        let gross_interest = balance * (interest_per_tenor / 100.0);
        let tax = gross_interest * (input.tax_rate / 100.0);
        // Negative tax is never applied
        balance += gross_interest - tax.max(0.0);
    }

    CalculationResult {
        final_balance: balance,
        profit: balance - input.principal,
    }
}

/// Flat form of [`calculate`] taking pre-normalized values and returning
/// only the final balance.
pub fn calculate_profit(
    principal: f64,
    tenor_months: u32,
    monthly_interest_rate: f64,
    holding_months: u32,
    tax_rate: f64,
) -> f64 {
    calculate(&NormalizedInput {
        principal,
        tenor_months,
        monthly_interest_rate,
        holding_months,
        tax_rate,
    })
    .final_balance
}
