mod engine;
mod types;

pub use engine::{
    annuity_monthly_payment, compare_runs, compound_savings, pay_rent, run_profile, service_debt,
    service_mortgage, simulate,
};
pub use types::{
    ComparisonSummary, MONTHS_PER_YEAR, MORTGAGE_TERM_YEARS, PolicyParams, Preset, Profile,
    RunResult, SIMULATION_YEARS,
};
