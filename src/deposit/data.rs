//! Deposit input value types and unit normalization

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::MONTHS_PER_YEAR;
use crate::calculator::{calculate, CalculationResult};

/// Unit for tenor and holding-period durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TenorUnit {
    Month,
    Year,
}

/// Basis of the quoted interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum RateBasis {
    /// Per-annum quote, divided by 12 to obtain the monthly rate
    #[serde(rename = "pa")]
    #[value(name = "pa")]
    PerAnnum,
    /// Already a monthly rate, used as-is
    #[serde(rename = "monthly")]
    Monthly,
}

/// Raw user-facing deposit inputs before unit normalization
///
/// Zero or negative values are accepted here; the engine resolves them
/// to the incomplete-form fallback rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositInput {
    /// Deposited principal amount
    pub principal: f64,

    /// Contractual tenor length, in `tenor_unit`s
    pub tenor_value: u32,
    pub tenor_unit: TenorUnit,

    /// Quoted interest rate in percent (e.g., 6.0 = 6%)
    pub interest_rate: f64,
    pub interest_basis: RateBasis,

    /// Total time the deposit is held, in `holding_unit`s
    pub holding_value: u32,
    pub holding_unit: TenorUnit,

    /// Withholding tax on interest, in percent
    #[serde(default)]
    pub tax_rate: f64,
}

/// Deposit inputs on the canonical monthly basis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedInput {
    pub principal: f64,
    /// Tenor in months
    pub tenor_months: u32,
    /// Monthly interest rate in percent
    pub monthly_interest_rate: f64,
    /// Holding period in months
    pub holding_months: u32,
    /// Withholding tax on interest, in percent
    pub tax_rate: f64,
}

impl TenorUnit {
    /// Convert a duration in this unit to months
    pub fn to_months(self, value: u32) -> u32 {
        match self {
            TenorUnit::Month => value,
            TenorUnit::Year => value * MONTHS_PER_YEAR,
        }
    }
}

impl RateBasis {
    /// Convert a quoted rate (percent) to a monthly rate (percent)
    pub fn to_monthly(self, rate: f64) -> f64 {
        match self {
            RateBasis::PerAnnum => rate / MONTHS_PER_YEAR as f64,
            RateBasis::Monthly => rate,
        }
    }
}

impl DepositInput {
    /// Normalize all durations to months and the rate to a monthly basis
    pub fn normalize(&self) -> NormalizedInput {
        NormalizedInput {
            principal: self.principal,
            tenor_months: self.tenor_unit.to_months(self.tenor_value),
            monthly_interest_rate: self.interest_basis.to_monthly(self.interest_rate),
            holding_months: self.holding_unit.to_months(self.holding_value),
            tax_rate: self.tax_rate,
        }
    }

    /// Normalize and run the compounding engine in one step
    pub fn calculate(&self) -> CalculationResult {
        calculate(&self.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> DepositInput {
        DepositInput {
            principal: 1_000_000.0,
            tenor_value: 1,
            tenor_unit: TenorUnit::Month,
            interest_rate: 6.0,
            interest_basis: RateBasis::PerAnnum,
            holding_value: 3,
            holding_unit: TenorUnit::Month,
            tax_rate: 0.0,
        }
    }

    #[test]
    fn test_year_units_convert_to_months() {
        let mut input = base_input();
        input.tenor_value = 1;
        input.tenor_unit = TenorUnit::Year;
        input.holding_value = 2;
        input.holding_unit = TenorUnit::Year;

        let norm = input.normalize();
        assert_eq!(norm.tenor_months, 12);
        assert_eq!(norm.holding_months, 24);
    }

    #[test]
    fn test_month_units_pass_through() {
        let norm = base_input().normalize();
        assert_eq!(norm.tenor_months, 1);
        assert_eq!(norm.holding_months, 3);
    }

    #[test]
    fn test_per_annum_rate_divided_by_12() {
        let norm = base_input().normalize();
        assert!((norm.monthly_interest_rate - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_monthly_rate_used_as_is() {
        let mut input = base_input();
        input.interest_basis = RateBasis::Monthly;
        let norm = input.normalize();
        assert_eq!(norm.monthly_interest_rate, 6.0);
    }

    #[test]
    fn test_serde_unit_names_match_ui_values() {
        // The original form posts "month"/"year" and "pa"
        let input: DepositInput = serde_json::from_str(
            r#"{
                "principal": 500000.0,
                "tenor_value": 3,
                "tenor_unit": "month",
                "interest_rate": 4.5,
                "interest_basis": "pa",
                "holding_value": 1,
                "holding_unit": "year"
            }"#,
        )
        .unwrap();

        assert_eq!(input.tenor_unit, TenorUnit::Month);
        assert_eq!(input.interest_basis, RateBasis::PerAnnum);
        assert_eq!(input.holding_unit, TenorUnit::Year);
        // tax_rate omitted defaults to 0
        assert_eq!(input.tax_rate, 0.0);
    }
}
