//! Profile seeding: the two named default tables and optional per-profile
//! override files. A missing or malformed override file is never fatal; the
//! run falls back to the defaults and says so in the log.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{PolicyParams, Preset, Profile};

/// Starting balances plus policy parameters, ready to build a `Profile`.
#[derive(Debug, Clone, Copy)]
pub struct ProfileSeed {
    pub initial_savings: f64,
    pub initial_checking: f64,
    pub initial_debt: f64,
    pub params: PolicyParams,
}

impl ProfileSeed {
    /// The documented defaults table. The presets share everything except the
    /// additional debt payment, loan rate, savings rate, and downpayment bar.
    pub fn defaults(preset: Preset) -> Self {
        let (additional_payment, loan_rate, savings_rate, downpayment_pct) = match preset {
            Preset::Literate => (15.0, 0.045, 0.07, 0.20),
            Preset::NonLiterate => (1.0, 0.05, 0.01, 0.05),
        };

        Self {
            initial_savings: 5_000.0,
            initial_checking: 0.0,
            initial_debt: 30_100.0,
            params: PolicyParams {
                house_price: 175_000.0,
                rent_amount: 850.0,
                loan_rate,
                savings_rate,
                debt_rate: 0.20,
                salary: 59_000.0,
                debt_paydown_pct: 0.03,
                downpayment_pct,
                additional_payment,
                savings_allocation_pct: 0.20,
                checking_allocation_pct: 0.30,
            },
        }
    }

    /// Applies any fields present in `overrides` on top of this seed.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(v) = overrides.initial_savings {
            self.initial_savings = v;
        }
        if let Some(v) = overrides.initial_checking {
            self.initial_checking = v;
        }
        if let Some(v) = overrides.initial_debt {
            self.initial_debt = v;
        }
        if let Some(v) = overrides.house_price {
            self.params.house_price = v;
        }
        if let Some(v) = overrides.rent_amount {
            self.params.rent_amount = v;
        }
        if let Some(v) = overrides.loan_rate {
            self.params.loan_rate = v;
        }
        if let Some(v) = overrides.savings_rate {
            self.params.savings_rate = v;
        }
        if let Some(v) = overrides.debt_rate {
            self.params.debt_rate = v;
        }
        if let Some(v) = overrides.salary {
            self.params.salary = v;
        }
        if let Some(v) = overrides.debt_paydown_pct {
            self.params.debt_paydown_pct = v;
        }
        if let Some(v) = overrides.downpayment_pct {
            self.params.downpayment_pct = v;
        }
        if let Some(v) = overrides.additional_payment {
            self.params.additional_payment = v;
        }
        if let Some(v) = overrides.savings_allocation_pct {
            self.params.savings_allocation_pct = v;
        }
        if let Some(v) = overrides.checking_allocation_pct {
            self.params.checking_allocation_pct = v;
        }
    }

    /// Builds the profile, re-deriving initial wealth from the merged
    /// balances.
    pub fn build(self) -> Profile {
        Profile::new(
            self.initial_checking,
            self.initial_savings,
            self.initial_debt,
            self.params,
        )
    }
}

/// Override record read from a JSON file. Every field is optional; absent
/// fields keep their preset defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Overrides {
    pub initial_savings: Option<f64>,
    pub initial_checking: Option<f64>,
    pub initial_debt: Option<f64>,
    pub house_price: Option<f64>,
    pub rent_amount: Option<f64>,
    pub loan_rate: Option<f64>,
    pub savings_rate: Option<f64>,
    pub debt_rate: Option<f64>,
    pub salary: Option<f64>,
    pub debt_paydown_pct: Option<f64>,
    pub downpayment_pct: Option<f64>,
    pub additional_payment: Option<f64>,
    pub savings_allocation_pct: Option<f64>,
    pub checking_allocation_pct: Option<f64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read overrides file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse overrides file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn load_overrides(path: &Path) -> Result<Overrides, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Seeds a profile for a preset, applying the overrides file when one is
/// given and readable. Any failure to load falls back to the full defaults.
pub fn seed_profile(preset: Preset, overrides_path: Option<&Path>) -> Profile {
    let mut seed = ProfileSeed::defaults(preset);
    if let Some(path) = overrides_path {
        match load_overrides(path) {
            Ok(overrides) => seed.apply(&overrides),
            Err(err) => log::warn!(
                "using defaults for the {} profile: {err}",
                preset.label()
            ),
        }
    }
    seed.build()
}
