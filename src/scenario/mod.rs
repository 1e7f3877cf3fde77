//! Named deposit scenarios and CSV batch loading

pub mod loader;

pub use loader::{
    load_default_scenarios, load_scenarios, load_scenarios_from_reader, Scenario, ScenarioError,
    DEFAULT_SCENARIO_FILE,
};
