use super::money::{compound, round_cents};
use super::types::{CalculatorInputs, RentScenarioResult};

/// Security deposit, in months of the starting rent.
pub const SECURITY_DEPOSIT_MONTHS: f64 = 1.5;

/// Cost and investment picture of renting during `year` (1-indexed).
///
/// The down payment that buying would have tied up is assumed invested in
/// the stock market instead. Growth is credited for the full `year` years,
/// one more than the buy side's opportunity cost uses.
pub fn project_rent(inputs: &CalculatorInputs, year: u32) -> RentScenarioResult {
    let elapsed = year.saturating_sub(1);
    let down_payment = inputs.down_payment();

    let monthly_rent = inputs.monthly_rent * compound(inputs.rent_growth_rate, elapsed);
    let renters_insurance_annual =
        inputs.renters_insurance * compound(inputs.inflation_rate, elapsed);
    let monthly_renters_insurance = renters_insurance_annual / 12.0;
    let monthly_utilities = (-inputs.utility_difference).max(0.0);
    let total_monthly_cost = monthly_rent + monthly_renters_insurance + monthly_utilities;

    let investment_growth = down_payment * (compound(inputs.stock_market_growth_rate, year) - 1.0);
    let total_investment_value = down_payment + investment_growth;

    let (moving_costs, security_deposit) = if year == 1 {
        (
            inputs.moving_costs,
            inputs.monthly_rent * SECURITY_DEPOSIT_MONTHS,
        )
    } else {
        (0.0, 0.0)
    };

    RentScenarioResult {
        monthly_rent: round_cents(monthly_rent),
        monthly_renters_insurance: round_cents(monthly_renters_insurance),
        monthly_utilities: round_cents(monthly_utilities),
        total_monthly_cost: round_cents(total_monthly_cost),

        invested_down_payment: round_cents(down_payment),
        investment_growth: round_cents(investment_growth),
        total_investment_value: round_cents(total_investment_value),

        moving_costs: round_cents(moving_costs),
        security_deposit: round_cents(security_deposit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::buy::project_buy;
    use crate::core::types::DEFAULT_INPUTS;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn first_year_defaults() {
        let rent = project_rent(&DEFAULT_INPUTS, 1);
        assert_approx(rent.monthly_rent, 2_000.0);
        assert_approx(rent.monthly_renters_insurance, 16.67);
        assert_approx(rent.monthly_utilities, 0.0);
        assert_approx(rent.total_monthly_cost, 2_016.67);
        assert_approx(rent.invested_down_payment, 80_000.0);
        assert_approx(rent.investment_growth, 5_600.0);
        assert_approx(rent.total_investment_value, 85_600.0);
        assert_approx(rent.moving_costs, 2_000.0);
        assert_approx(rent.security_deposit, 3_000.0);
    }

    #[test]
    fn later_years_grow_rent_and_drop_one_time_costs() {
        let rent = project_rent(&DEFAULT_INPUTS, 2);
        assert_approx(rent.monthly_rent, 2_060.0);
        assert_approx(rent.total_monthly_cost, 2_077.08);
        assert_approx(rent.total_investment_value, 91_592.0);
        assert_approx(rent.one_time_costs(), 0.0);

        let rent = project_rent(&DEFAULT_INPUTS, 10);
        assert_approx(rent.total_monthly_cost, 2_630.36);
        assert_approx(rent.total_investment_value, 157_372.11);
    }

    #[test]
    fn security_deposit_uses_starting_rent() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.monthly_rent = 3_100.0;
        inputs.rent_growth_rate = 10.0;
        assert_approx(project_rent(&inputs, 1).security_deposit, 4_650.0);
    }

    #[test]
    fn utility_credit_only_when_renting_is_cheaper() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.utility_difference = -75.0;
        assert_approx(project_rent(&inputs, 1).monthly_utilities, 75.0);

        inputs.utility_difference = 75.0;
        assert_approx(project_rent(&inputs, 1).monthly_utilities, 0.0);
    }

    // Renting credits one extra year of growth compared with the buy side's
    // opportunity cost for the same down payment.
    #[test]
    fn investment_growth_runs_one_year_ahead_of_opportunity_cost() {
        for year in 1..=10 {
            let rent = project_rent(&DEFAULT_INPUTS, year);
            let next_buy = project_buy(&DEFAULT_INPUTS, year + 1);
            assert_approx(
                rent.investment_growth,
                next_buy.opportunity_cost_of_down_payment,
            );
        }
        assert!(project_rent(&DEFAULT_INPUTS, 1).investment_growth > 0.0);
        assert_approx(project_buy(&DEFAULT_INPUTS, 1).opportunity_cost_of_down_payment, 0.0);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_one_time_costs_only_in_first_year(
            rent in 100u32..20_000,
            moving in 0u32..20_000,
            year in 2u32..31
        ) {
            let mut inputs = DEFAULT_INPUTS;
            inputs.monthly_rent = rent as f64;
            inputs.moving_costs = moving as f64;

            prop_assert!(project_rent(&inputs, 1).one_time_costs() > 0.0);
            prop_assert_eq!(project_rent(&inputs, year).one_time_costs(), 0.0);
        }
    }
}
