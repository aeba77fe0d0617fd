use serde::Serialize;

/// Years in the projection, including the year-0 snapshot.
pub const SIMULATION_YEARS: usize = 41;

/// Fixed term for every originated mortgage.
pub const MORTGAGE_TERM_YEARS: u32 = 30;

pub const MONTHS_PER_YEAR: u32 = 12;

/// The two named default-policy variants.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Preset {
    Literate,
    NonLiterate,
}

impl Preset {
    pub fn label(self) -> &'static str {
        match self {
            Preset::Literate => "literate",
            Preset::NonLiterate => "non-literate",
        }
    }
}

/// Policy parameters fixed for the lifetime of one run. The engine reads
/// these but never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct PolicyParams {
    pub house_price: f64,
    pub rent_amount: f64,
    pub loan_rate: f64,
    pub savings_rate: f64,
    pub debt_rate: f64,
    pub salary: f64,
    /// Fraction of the remaining debt balance paid each month as the minimum.
    pub debt_paydown_pct: f64,
    pub downpayment_pct: f64,
    /// Flat amount paid on top of the monthly debt minimum.
    pub additional_payment: f64,
    pub savings_allocation_pct: f64,
    pub checking_allocation_pct: f64,
}

/// Mutable financial state of one simulated individual. Owned exclusively by
/// the simulation loop; the mutators take it by `&mut` and nothing aliases it.
#[derive(Debug, Clone)]
pub struct Profile {
    pub checking: f64,
    pub savings: f64,
    pub debt: f64,
    /// Outstanding mortgage principal. Zero until origination.
    pub loan: f64,
    pub has_loan: bool,
    pub years_with_debt: u32,
    pub years_rented: u32,
    /// Cumulative amount applied against revolving debt.
    pub debt_paid: f64,
    /// Fixed annuity payment, computed once when the mortgage is first
    /// serviced. `None` means not yet computed.
    pub monthly_payment: Option<f64>,
    pub total_loan_interest: f64,
    pub total_savings_interest: f64,
    pub total_debt_interest: f64,
    pub initial_wealth: f64,
    pub params: PolicyParams,
}

impl Profile {
    pub fn new(
        initial_checking: f64,
        initial_savings: f64,
        initial_debt: f64,
        params: PolicyParams,
    ) -> Self {
        Self {
            checking: initial_checking,
            savings: initial_savings,
            debt: initial_debt,
            loan: 0.0,
            has_loan: false,
            years_with_debt: 0,
            years_rented: 0,
            debt_paid: 0.0,
            monthly_payment: None,
            total_loan_interest: 0.0,
            total_savings_interest: 0.0,
            total_debt_interest: 0.0,
            initial_wealth: initial_checking + initial_savings - initial_debt,
            params,
        }
    }

    /// Net worth, truncated toward zero for the reported series.
    pub fn wealth(&self) -> i64 {
        (self.checking + self.savings - self.loan - self.debt) as i64
    }
}

/// Everything one simulation run produces: the wealth series plus the
/// lifetime accumulators the profile tracked along the way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub wealth_by_year: Vec<i64>,
    pub years_with_debt: u32,
    pub years_rented: u32,
    pub debt_paid: f64,
    pub total_loan_interest: f64,
    pub total_savings_interest: f64,
    pub total_debt_interest: f64,
    pub final_checking: f64,
    pub final_savings: f64,
    pub final_loan: f64,
    pub final_debt: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub literate_final_wealth: i64,
    pub non_literate_final_wealth: i64,
    pub final_wealth_gap: i64,
    /// First year the literate trajectory is strictly ahead, if any.
    pub crossover_year: Option<usize>,
}
