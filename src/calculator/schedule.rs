//! Per-period breakdown of a deposit calculation

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::engine::CalculationResult;
use crate::deposit::NormalizedInput;

/// One complete tenor period of the holding schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRow {
    /// Period number, 1-indexed
    pub period: u32,
    /// Balance at the beginning of the period
    pub bop_balance: f64,
    /// Interest earned over the period, before tax
    pub gross_interest: f64,
    /// Tax withheld from the period's interest
    pub tax: f64,
    /// Balance at the end of the period
    pub eop_balance: f64,
    /// Calendar date the period ends, when a start date was given
    pub end_date: Option<NaiveDate>,
}

/// Full schedule plus the final result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub rows: Vec<PeriodRow>,
    pub result: CalculationResult,
}

/// Produce the period-by-period schedule for a deposit.
///
/// The loop is the same one the engine runs; the last row's `eop_balance`
/// is bit-identical to [`calculate`](super::calculate)'s `final_balance`.
/// Incomplete inputs yield an empty schedule with the passthrough result.
pub fn project_schedule(
    input: &NormalizedInput,
    start_date: Option<NaiveDate>,
) -> ScheduleResult {
    if input.principal <= 0.0
        || input.tenor_months == 0
        || input.monthly_interest_rate <= 0.0
        || input.holding_months == 0
    {
        return ScheduleResult {
            rows: Vec::new(),
            result: CalculationResult {
                final_balance: input.principal,
                profit: 0.0,
            },
        };
    }

    let interest_per_tenor = input.monthly_interest_rate * input.tenor_months as f64;
    let periods = input.holding_months / input.tenor_months;

    let mut rows = Vec::with_capacity(periods as usize);
    let mut balance = input.principal;

    for period in 1..=periods {
        let bop_balance = balance;
        let gross_interest = balance * (interest_per_tenor / 100.0);
        let tax = (gross_interest * (input.tax_rate / 100.0)).max(0.0);
        balance += gross_interest - tax;

        let end_date = start_date
            .and_then(|d| d.checked_add_months(Months::new(period * input.tenor_months)));

        rows.push(PeriodRow {
            period,
            bop_balance,
            gross_interest,
            tax,
            eop_balance: balance,
            end_date,
        });
    }

    ScheduleResult {
        rows,
        result: CalculationResult {
            final_balance: balance,
            profit: balance - input.principal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;

    fn sample_input() -> NormalizedInput {
        NormalizedInput {
            principal: 1_000_000.0,
            tenor_months: 3,
            monthly_interest_rate: 0.5,
            holding_months: 12,
            tax_rate: 20.0,
        }
    }

    #[test]
    fn test_schedule_matches_engine() {
        let input = sample_input();
        let schedule = project_schedule(&input, None);
        let result = calculate(&input);

        assert_eq!(schedule.rows.len(), 4);
        let last = schedule.rows.last().unwrap();
        assert_eq!(last.eop_balance.to_bits(), result.final_balance.to_bits());
        assert_eq!(schedule.result.final_balance, result.final_balance);
    }

    #[test]
    fn test_rows_chain() {
        let schedule = project_schedule(&sample_input(), None);
        for pair in schedule.rows.windows(2) {
            assert_eq!(pair[0].eop_balance, pair[1].bop_balance);
        }
        for row in &schedule.rows {
            let net = row.gross_interest - row.tax;
            assert!((row.eop_balance - row.bop_balance - net).abs() < 1e-9);
        }
    }

    #[test]
    fn test_end_dates_step_by_tenor() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let schedule = project_schedule(&sample_input(), Some(start));

        let dates: Vec<NaiveDate> = schedule
            .rows
            .iter()
            .map(|r| r.end_date.unwrap())
            .collect();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 4, 15).unwrap());
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_incomplete_input_yields_empty_schedule() {
        let mut input = sample_input();
        input.monthly_interest_rate = 0.0;
        let schedule = project_schedule(&input, None);
        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.result.final_balance, input.principal);
        assert_eq!(schedule.result.profit, 0.0);
    }
}
