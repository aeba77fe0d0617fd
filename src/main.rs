use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use wealthsim::config::seed_profile;
use wealthsim::core::{ComparisonSummary, Preset, RunResult, compare_runs, run_profile};

/// Projects 41 years of net worth for a financially literate and a
/// non-literate saver and writes one wealth series per profile.
#[derive(Parser, Debug)]
#[command(name = "wealthsim", version, about)]
struct Cli {
    /// JSON overrides for the literate profile.
    #[arg(long, value_name = "FILE")]
    literate_overrides: Option<PathBuf>,

    /// JSON overrides for the non-literate profile.
    #[arg(long, value_name = "FILE")]
    non_literate_overrides: Option<PathBuf>,

    /// Directory the wealth series files are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Also write a combined JSON summary to this path.
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary<'a> {
    literate: &'a RunResult,
    non_literate: &'a RunResult,
    comparison: &'a ComparisonSummary,
}

fn write_wealth_series(path: &Path, wealth_by_year: &[i64]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    for wealth in wealth_by_year {
        writeln!(file, "{wealth}")?;
    }
    Ok(())
}

fn print_run(label: &str, run: &RunResult) {
    println!("{label}:");
    let final_wealth = run.wealth_by_year.last().copied().unwrap_or(0);
    println!("  Final wealth:       {final_wealth}");
    println!("  Years with debt:    {}", run.years_with_debt);
    println!("  Years rented:       {}", run.years_rented);
    println!("  Debt paid:          {:.2}", run.debt_paid);
    println!("  Loan interest:      {:.2}", run.total_loan_interest);
    println!("  Savings interest:   {:.2}", run.total_savings_interest);
    println!("  Debt interest:      {:.2}", run.total_debt_interest);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut literate = seed_profile(Preset::Literate, cli.literate_overrides.as_deref());
    let mut non_literate =
        seed_profile(Preset::NonLiterate, cli.non_literate_overrides.as_deref());

    let literate_run = run_profile(&mut literate);
    let non_literate_run = run_profile(&mut non_literate);
    let comparison = compare_runs(&literate_run, &non_literate_run);

    print_run("Literate", &literate_run);
    println!();
    print_run("Non-literate", &non_literate_run);
    println!();
    println!("Final wealth gap:   {}", comparison.final_wealth_gap);
    match comparison.crossover_year {
        Some(year) => println!("Literate ahead from year {year}"),
        None => println!("Literate never overtakes the non-literate profile"),
    }

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("could not create output directory {}", cli.out_dir.display()))?;

    // Output failures are reported but never alter the computed series or
    // stop the remaining files from being written.
    let mut write_failed = false;
    let outputs = [
        ("wealth_literate.txt", &literate_run.wealth_by_year),
        ("wealth_non_literate.txt", &non_literate_run.wealth_by_year),
    ];
    for (name, series) in outputs {
        let path = cli.out_dir.join(name);
        if let Err(err) = write_wealth_series(&path, series) {
            log::error!("could not write {}: {err}", path.display());
            write_failed = true;
        } else {
            println!("Wrote {}", path.display());
        }
    }

    if let Some(summary_path) = &cli.summary {
        let summary = Summary {
            literate: &literate_run,
            non_literate: &non_literate_run,
            comparison: &comparison,
        };
        let json = serde_json::to_string_pretty(&summary).context("could not encode summary")?;
        if let Err(err) = fs::write(summary_path, json) {
            log::error!("could not write {}: {err}", summary_path.display());
            write_failed = true;
        } else {
            println!("Wrote {}", summary_path.display());
        }
    }

    if write_failed {
        anyhow::bail!("one or more output files could not be written");
    }
    Ok(())
}
