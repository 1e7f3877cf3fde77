//! Compare the Rust engine with the original calculator's values
//! Test case: 1M principal, 1-month tenor, 6% p.a. (0.5% monthly)

use deposit_calculator::calculator::DEFAULT_WITHHOLDING_TAX_RATE;
use deposit_calculator::calculate_profit;

fn main() {
    let principal = 1_000_000.0f64;
    let tenor_months = 1u32;
    let monthly_rate = 6.0 / 12.0; // 6% p.a.

    println!("Rust vs reference comparison (1M, tenor 1m, 6% p.a.)");
    println!(
        "{:<10} {:<6} {:<16} {:<16} {:<14}",
        "Holding", "Tax", "Rust", "Reference", "Diff"
    );

    // Reference values (from the original calculator)
    let reference_values = [
        (3u32, 0.0, 1_015_075.125),
        (3, DEFAULT_WITHHOLDING_TAX_RATE, 1_012_048.064),
        (6, 0.0, 1_030_377.509394),
        (12, 0.0, 1_061_677.811864),
        (12, DEFAULT_WITHHOLDING_TAX_RATE, 1_049_070.207535),
        // No holding period: incomplete form, principal unchanged
        (0, 0.0, 1_000_000.0),
    ];

    for (holding_months, tax_rate, reference) in reference_values.iter() {
        let rust = calculate_profit(principal, tenor_months, monthly_rate, *holding_months, *tax_rate);
        let diff = rust - reference;

        println!(
            "{:<10} {:<6} {:<16.6} {:<16.6} {:<14.9}",
            holding_months, tax_rate, rust, reference, diff
        );
    }
}
