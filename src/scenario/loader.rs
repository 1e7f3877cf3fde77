//! Load deposit scenarios from CSV
//!
//! A scenario file is one deposit configuration per row:
//!
//! ```csv
//! name,principal,tenor_value,tenor_unit,interest_rate,interest_basis,holding_value,holding_unit,tax_rate
//! base,1000000,1,month,6.0,pa,3,month,0
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deposit::{DepositInput, RateBasis, TenorUnit};

/// Default scenario file consumed by the batch runner
pub const DEFAULT_SCENARIO_FILE: &str = "scenarios.csv";

/// A named deposit configuration from a scenario file
///
/// Kept flat (one field per CSV column) rather than nesting a
/// `DepositInput`; csv's serde support cannot flatten nested structs
/// with numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub principal: f64,
    pub tenor_value: u32,
    pub tenor_unit: TenorUnit,
    pub interest_rate: f64,
    pub interest_basis: RateBasis,
    pub holding_value: u32,
    pub holding_unit: TenorUnit,
    #[serde(default)]
    pub tax_rate: f64,
}

impl Scenario {
    /// View the row as engine input
    pub fn input(&self) -> DepositInput {
        DepositInput {
            principal: self.principal,
            tenor_value: self.tenor_value,
            tenor_unit: self.tenor_unit,
            interest_rate: self.interest_rate,
            interest_basis: self.interest_basis,
            holding_value: self.holding_value,
            holding_unit: self.holding_unit,
            tax_rate: self.tax_rate,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to open scenario file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse scenario row: {0}")]
    Parse(#[from] csv::Error),
}

/// Load scenarios from any reader producing CSV with a header row
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();
    for row in csv_reader.deserialize() {
        let scenario: Scenario = row?;
        scenarios.push(scenario);
    }
    Ok(scenarios)
}

/// Load scenarios from a CSV file on disk
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|source| ScenarioError::Open {
        path: path_ref.display().to_string(),
        source,
    })?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!(
        "Loaded {} scenarios from {}",
        scenarios.len(),
        path_ref.display()
    );
    Ok(scenarios)
}

/// Load the default scenario file from the working directory
pub fn load_default_scenarios() -> Result<Vec<Scenario>, ScenarioError> {
    load_scenarios(DEFAULT_SCENARIO_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
name,principal,tenor_value,tenor_unit,interest_rate,interest_basis,holding_value,holding_unit,tax_rate
base,1000000,1,month,6.0,pa,3,month,0
taxed,1000000,1,month,6.0,pa,3,month,20
annual,50000000,1,year,5.25,pa,2,year,20
";

    #[test]
    fn test_load_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        let base = &scenarios[0];
        assert_eq!(base.name, "base");
        assert_eq!(base.principal, 1_000_000.0);
        assert_eq!(base.tenor_unit, TenorUnit::Month);
        assert_eq!(base.interest_basis, RateBasis::PerAnnum);
        assert_eq!(base.tax_rate, 0.0);

        let annual = &scenarios[2];
        assert_eq!(annual.holding_unit, TenorUnit::Year);
        assert_eq!(annual.input().normalize().holding_months, 24);
    }

    #[test]
    fn test_bad_unit_is_an_error() {
        let bad = "\
name,principal,tenor_value,tenor_unit,interest_rate,interest_basis,holding_value,holding_unit,tax_rate
bad,1000000,1,fortnight,6.0,pa,3,month,0
";
        let result = load_scenarios_from_reader(bad.as_bytes());
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let result = load_scenarios("no_such_scenarios.csv");
        assert!(matches!(result, Err(ScenarioError::Open { .. })));
    }
}
