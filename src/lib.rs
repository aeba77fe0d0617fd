//! Lifetime wealth projection comparing a financially literate saver with a
//! non-literate one under fixed monthly cash-allocation policies.
//!
//! The core engine lives in [`core`]: per-year mutators for savings
//! compounding, revolving-debt servicing, rent, and mortgage amortization,
//! plus the 41-year driver that records the net-worth series. [`config`]
//! seeds profiles from the two named presets with optional JSON overrides.

pub mod config;
pub mod core;

pub use config::{Overrides, ProfileSeed, load_overrides, seed_profile};
pub use core::{
    ComparisonSummary, PolicyParams, Preset, Profile, RunResult, compare_runs, run_profile,
    simulate,
};
