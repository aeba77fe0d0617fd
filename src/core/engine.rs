use super::types::{
    ComparisonSummary, MONTHS_PER_YEAR, MORTGAGE_TERM_YEARS, Profile, RunResult, SIMULATION_YEARS,
};

/// Satisfies a cash draw from checking first, with any shortfall taken from
/// savings. Savings is deliberately not floored at zero: a draw larger than
/// both balances leaves savings negative and the simulation carries on.
fn draw_funds(profile: &mut Profile, amount: f64) {
    if profile.checking < amount {
        let from_checking = profile.checking;
        profile.checking = 0.0;
        profile.savings -= amount - from_checking;
    } else {
        profile.checking -= amount;
    }
}

/// One year of savings growth. Interest is tracked on the post-compounding
/// balance, matching the rest of the accrual accounting.
pub fn compound_savings(profile: &mut Profile, annual_rate: f64) {
    profile.savings *= 1.0 + annual_rate;
    profile.total_savings_interest += profile.savings * annual_rate;
}

/// One year of revolving-debt servicing: twelve monthly payments of
/// `debt * debt_paydown_pct + additional_payment`, each clamped to the
/// remaining balance, followed by a single annual interest accrual.
///
/// The accrual runs even when the balance reached zero mid-year; in that case
/// it is a no-op on the balance but still counts the year as a debt year.
pub fn service_debt(profile: &mut Profile, annual_rate: f64, additional_payment: f64) {
    for _ in 0..MONTHS_PER_YEAR {
        if profile.debt > 0.0 {
            let requested = profile.debt * profile.params.debt_paydown_pct + additional_payment;
            let payment = requested.min(profile.debt);

            draw_funds(profile, payment);
            profile.debt_paid += payment;
            profile.debt -= payment;
        }
    }

    profile.debt *= 1.0 + annual_rate;
    profile.total_debt_interest += profile.debt * annual_rate;
    profile.years_with_debt += 1;
}

/// One year of renting: twelve monthly draws at the given rent. Counts as a
/// single rented year no matter how the draws were funded.
pub fn pay_rent(profile: &mut Profile, monthly_rent: f64) {
    for _ in 0..MONTHS_PER_YEAR {
        draw_funds(profile, monthly_rent);
    }
    profile.years_rented += 1;
}

/// Fixed monthly payment that fully amortizes `loan_amount` over `term_years`
/// at the given annual rate (standard annuity formula).
pub fn annuity_monthly_payment(loan_amount: f64, annual_rate: f64, term_years: u32) -> f64 {
    let i = annual_rate / 12.0;
    let growth = (1.0 + i).powf(12.0 * term_years as f64);
    let discount_factor = (growth - 1.0) / (i * growth);
    loan_amount / discount_factor
}

/// One year of mortgage servicing. The annuity payment is computed on the
/// first call for a profile and reused for the lifetime of the loan; later
/// calls ignore their `original_loan_amount`/rate/term arguments for the
/// payment amount.
///
/// Each month the interest accrued on the current balance is capitalized into
/// the loan before the payment is applied, and the payment is clamped so the
/// final month pays off exactly the remaining balance.
pub fn service_mortgage(
    profile: &mut Profile,
    original_loan_amount: f64,
    annual_rate: f64,
    term_years: u32,
) {
    let monthly_payment = *profile.monthly_payment.get_or_insert_with(|| {
        annuity_monthly_payment(original_loan_amount, annual_rate, term_years)
    });

    let monthly_rate = annual_rate / 12.0;
    for _ in 0..MONTHS_PER_YEAR {
        let accrued = profile.loan * monthly_rate;
        profile.total_loan_interest += accrued;
        profile.loan += accrued;

        let payment = monthly_payment.min(profile.loan);
        draw_funds(profile, payment);
        profile.loan -= payment;
    }
}

/// Runs the full projection for one profile and returns the wealth series:
/// the year-0 snapshot plus forty processed years.
///
/// Each processed year deposits the salary shares, originates the mortgage
/// the first time savings clears the downpayment, services the mortgage or
/// pays rent (neither once the home is owned outright), services any
/// remaining debt, compounds savings, and records truncated net worth.
pub fn simulate(profile: &mut Profile, annual_salary: f64) -> Vec<i64> {
    let mut wealth_by_year = Vec::with_capacity(SIMULATION_YEARS);
    wealth_by_year.push(profile.initial_wealth as i64);

    let downpayment = profile.params.downpayment_pct * profile.params.house_price;
    let mut original_loan_amount = 0.0;

    for _ in 1..SIMULATION_YEARS {
        profile.checking += annual_salary * profile.params.checking_allocation_pct;
        profile.savings += annual_salary * profile.params.savings_allocation_pct;

        if profile.savings > downpayment && !profile.has_loan {
            profile.has_loan = true;
            profile.savings -= downpayment;
            original_loan_amount = profile.params.house_price - downpayment;
            profile.loan = original_loan_amount;
        }

        if profile.has_loan {
            if profile.loan > 0.0 {
                service_mortgage(
                    profile,
                    original_loan_amount,
                    profile.params.loan_rate,
                    MORTGAGE_TERM_YEARS,
                );
            }
        } else {
            pay_rent(profile, profile.params.rent_amount);
        }

        if profile.debt > 0.0 {
            service_debt(profile, profile.params.debt_rate, profile.params.additional_payment);
        }

        compound_savings(profile, profile.params.savings_rate);
        wealth_by_year.push(profile.wealth());
    }

    wealth_by_year
}

/// Runs `simulate` and packages the series with the profile's lifetime
/// accumulators.
pub fn run_profile(profile: &mut Profile) -> RunResult {
    let wealth_by_year = simulate(profile, profile.params.salary);
    RunResult {
        wealth_by_year,
        years_with_debt: profile.years_with_debt,
        years_rented: profile.years_rented,
        debt_paid: profile.debt_paid,
        total_loan_interest: profile.total_loan_interest,
        total_savings_interest: profile.total_savings_interest,
        total_debt_interest: profile.total_debt_interest,
        final_checking: profile.checking,
        final_savings: profile.savings,
        final_loan: profile.loan,
        final_debt: profile.debt,
    }
}

pub fn compare_runs(literate: &RunResult, non_literate: &RunResult) -> ComparisonSummary {
    let literate_final_wealth = literate.wealth_by_year.last().copied().unwrap_or(0);
    let non_literate_final_wealth = non_literate.wealth_by_year.last().copied().unwrap_or(0);

    let crossover_year = literate
        .wealth_by_year
        .iter()
        .zip(non_literate.wealth_by_year.iter())
        .position(|(literate_wealth, non_literate_wealth)| literate_wealth > non_literate_wealth);

    ComparisonSummary {
        literate_final_wealth,
        non_literate_final_wealth,
        final_wealth_gap: literate_final_wealth - non_literate_final_wealth,
        crossover_year,
    }
}
