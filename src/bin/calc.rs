//! Command-line deposit calculator
//!
//! Accepts the same inputs as the original web form: a currency-formatted
//! principal (grouping characters are stripped), tenor and holding period
//! with month/year selectors, a per-annum or monthly rate, and a tax rate.

use clap::Parser;
use deposit_calculator::calculator::DEFAULT_WITHHOLDING_TAX_RATE;
use deposit_calculator::deposit::parse;
use deposit_calculator::{RateBasis, TenorUnit};

#[derive(Parser, Debug)]
#[command(name = "calc", about = "Calculate compounding time-deposit returns")]
struct Args {
    /// Deposit principal; currency formatting is accepted (e.g. "1.000.000")
    principal: String,

    /// Tenor length
    #[arg(short, long)]
    tenor: u32,

    /// Tenor unit
    #[arg(long, value_enum, default_value = "month")]
    tenor_unit: TenorUnit,

    /// Interest rate in percent
    #[arg(short, long)]
    rate: f64,

    /// Rate basis (per-annum or monthly)
    #[arg(long, value_enum, default_value = "pa")]
    rate_basis: RateBasis,

    /// Holding period length
    #[arg(short = 'H', long)]
    holding: u32,

    /// Holding period unit
    #[arg(long, value_enum, default_value = "month")]
    holding_unit: TenorUnit,

    /// Withholding tax on interest, in percent
    #[arg(long, default_value_t = 0.0)]
    tax_rate: f64,

    /// Use the statutory 20% withholding tax rate
    #[arg(long, conflicts_with = "tax_rate")]
    statutory_tax: bool,
}

/// Format an amount in the Indonesian display convention:
/// dot-grouped thousands, comma decimal separator, three decimals.
fn format_rupiah(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let whole = abs.trunc() as u64;
    let frac = ((abs.fract() * 1000.0).round() as u64).min(999);

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("Rp {}{},{:03}", sign, grouped, frac)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let tax_rate = if args.statutory_tax {
        DEFAULT_WITHHOLDING_TAX_RATE
    } else {
        args.tax_rate
    };

    let input = deposit_calculator::DepositInput {
        principal: parse::parse_amount(&args.principal),
        tenor_value: args.tenor,
        tenor_unit: args.tenor_unit,
        interest_rate: args.rate,
        interest_basis: args.rate_basis,
        holding_value: args.holding,
        holding_unit: args.holding_unit,
        tax_rate,
    };

    let result = input.calculate();

    println!("Result: {}", format_rupiah(result.final_balance));
    if result.profit != 0.0 {
        println!("Profit: {}", format_rupiah(result.profit));
    }
}
