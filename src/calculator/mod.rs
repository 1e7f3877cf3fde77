//! Compounding engine for deposit return calculations

mod engine;
mod schedule;

pub use engine::{calculate, calculate_profit, CalculationResult};
pub use schedule::{project_schedule, PeriodRow, ScheduleResult};

// ============================================================================
// Default Rates
// ============================================================================
// Indonesian time deposits withhold a statutory final tax on interest.
// The engine itself takes the tax rate as an input; this is the rate
// front ends offer as the common case.

/// Statutory withholding tax on time-deposit interest (20%)
pub const DEFAULT_WITHHOLDING_TAX_RATE: f64 = 20.0;
