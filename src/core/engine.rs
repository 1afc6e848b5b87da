use log::debug;

use super::buy::project_buy;
use super::comparison::{BREAK_EVEN_SEARCH_YEARS, CostCurves, compare};
use super::error::InputError;
use super::money::round_cents;
use super::rent::project_rent;
use super::types::{CalculatorInputs, CalculatorResult, YearlyBreakdownEntry};
use super::validation::validate_inputs;

/// Projects both scenarios over the inputs' horizon and compares them.
///
/// Pure and deterministic: identical inputs give identical results.
///
/// # Panics
///
/// If `time_horizon_years` is zero. Use [`try_run`] for unchecked inputs.
pub fn run(inputs: &CalculatorInputs) -> CalculatorResult {
    let horizon = inputs.time_horizon_years;
    assert!(horizon > 0, "time horizon must be at least one year");

    let curves = CostCurves::build(inputs, horizon.max(BREAK_EVEN_SEARCH_YEARS));
    let comparison = compare(inputs, &curves);
    let yearly_breakdown = yearly_breakdown(&curves, horizon);

    debug!(
        "projected {horizon} years: {} ({} confidence), break-even year {}",
        comparison.recommendation.as_str(),
        comparison.confidence.as_str(),
        comparison.break_even_year
    );

    CalculatorResult {
        inputs: *inputs,
        buy_scenario: project_buy(inputs, horizon),
        rent_scenario: project_rent(inputs, horizon),
        comparison,
        yearly_breakdown,
    }
}

pub fn try_run(inputs: &CalculatorInputs) -> Result<CalculatorResult, InputError> {
    validate_inputs(inputs)?;
    Ok(run(inputs))
}

fn yearly_breakdown(curves: &CostCurves, horizon: u32) -> Vec<YearlyBreakdownEntry> {
    (1..=horizon)
        .map(|year| {
            let buy = curves.buy(year);
            let rent = curves.rent(year);
            let buy_total_cost = curves.cumulative_buy_cost(year);
            let rent_total_cost = curves.cumulative_rent_cost(year);

            YearlyBreakdownEntry {
                year,
                buy_total_cost: round_cents(buy_total_cost),
                buy_monthly_costs: buy.total_monthly_cost,
                buy_equity: buy.current_equity,
                buy_net_worth: buy.current_equity,
                home_value: buy.home_value,
                rent_total_cost: round_cents(rent_total_cost),
                rent_monthly_costs: rent.total_monthly_cost,
                rent_investment_value: rent.total_investment_value,
                rent_net_worth: rent.total_investment_value,
                cumulative_difference: round_cents(buy_total_cost - rent_total_cost),
                monthly_difference: round_cents(
                    buy.total_monthly_cost - rent.total_monthly_cost,
                ),
            }
        })
        .collect()
}
