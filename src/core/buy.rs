use super::money::{compound, round_cents};
use super::mortgage::{pmi, year_detail};
use super::types::{BuyScenarioResult, CalculatorInputs};

/// Cost and equity picture of owning during `year` (1-indexed).
pub fn project_buy(inputs: &CalculatorInputs, year: u32) -> BuyScenarioResult {
    let elapsed = year.saturating_sub(1);
    let down_payment = inputs.down_payment();
    let loan_amount = inputs.loan_amount();
    let closing_costs = inputs.purchase_price * (inputs.closing_cost_rate / 100.0);

    let home_value = inputs.purchase_price * compound(inputs.home_price_appreciation, elapsed);
    let mortgage = year_detail(
        loan_amount,
        inputs.mortgage_rate,
        inputs.mortgage_term_years,
        year,
    );

    // Tax and maintenance track the appraised value, not the purchase price.
    let monthly_property_tax = home_value * inputs.property_tax_rate / 100.0 / 12.0;
    let monthly_insurance = inputs.home_insurance / 12.0;
    let monthly_pmi = pmi(
        loan_amount,
        home_value,
        mortgage.remaining_balance,
        inputs.pmi_rate,
        inputs.down_payment_percentage,
    );
    let monthly_hoa = inputs.hoa_fees;
    let monthly_maintenance = home_value * inputs.maintenance_rate / 100.0 / 12.0;
    let monthly_utilities = inputs.utility_difference;

    let total_monthly_cost = mortgage.monthly_payment
        + monthly_property_tax
        + monthly_insurance
        + monthly_pmi
        + monthly_hoa
        + monthly_maintenance
        + monthly_utilities;

    let total_upfront_costs = if year == 1 {
        down_payment + closing_costs + inputs.moving_costs
    } else {
        0.0
    };

    let annual_property_tax = monthly_property_tax * 12.0;
    let annual_mortgage_interest = mortgage.monthly_interest * 12.0;
    let salt_deduction = annual_property_tax.min(inputs.salt_deduction_limit);
    let annual_tax_savings =
        (salt_deduction + annual_mortgage_interest) * (inputs.tax_bracket / 100.0);

    let opportunity_cost =
        down_payment * compound(inputs.stock_market_growth_rate, elapsed) - down_payment;

    BuyScenarioResult {
        monthly_mortgage_payment: round_cents(mortgage.monthly_payment),
        monthly_property_tax: round_cents(monthly_property_tax),
        monthly_insurance: round_cents(monthly_insurance),
        monthly_pmi: round_cents(monthly_pmi),
        monthly_hoa: round_cents(monthly_hoa),
        monthly_maintenance: round_cents(monthly_maintenance),
        monthly_utilities: round_cents(monthly_utilities),
        total_monthly_cost: round_cents(total_monthly_cost),

        down_payment: round_cents(down_payment),
        closing_costs: round_cents(closing_costs),
        moving_costs: round_cents(inputs.moving_costs),
        total_upfront_costs: round_cents(total_upfront_costs),

        annual_tax_savings: round_cents(annual_tax_savings),
        opportunity_cost_of_down_payment: round_cents(opportunity_cost),

        current_equity: round_cents(home_value - mortgage.remaining_balance),
        home_value: round_cents(home_value),
        mortgage_balance: round_cents(mortgage.remaining_balance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
        let buy = project_buy(&DEFAULT_INPUTS, 1);
        assert_approx(buy.home_value, 400_000.0);
        assert_approx(buy.monthly_mortgage_payment, 2_128.97);
        assert_approx(buy.monthly_property_tax, 400.0);
        assert_approx(buy.monthly_insurance, 100.0);
        assert_approx(buy.monthly_pmi, 0.0);
        assert_approx(buy.monthly_maintenance, 500.0);
        assert_approx(buy.monthly_utilities, 50.0);
        assert_approx(buy.total_monthly_cost, 3_178.97);
        assert_approx(buy.total_upfront_costs, 94_000.0);
        assert_approx(buy.annual_tax_savings, 6_503.3);
        assert_approx(buy.opportunity_cost_of_down_payment, 0.0);
        assert_approx(buy.current_equity, 83_250.59);
        assert_approx(buy.mortgage_balance, 316_749.41);
    }

    #[test]
    fn later_year_defaults() {
        let buy = project_buy(&DEFAULT_INPUTS, 2);
        assert_approx(buy.home_value, 412_000.0);
        assert_approx(buy.total_monthly_cost, 3_205.97);
        assert_approx(buy.total_upfront_costs, 0.0);
        assert_approx(buy.opportunity_cost_of_down_payment, 5_600.0);

        let buy = project_buy(&DEFAULT_INPUTS, 10);
        assert_approx(buy.home_value, 521_909.27);
        assert_approx(buy.current_equity, 247_309.64);
        assert_approx(buy.opportunity_cost_of_down_payment, 67_076.74);
    }

    #[test]
    fn salt_deduction_is_capped() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.purchase_price = 2_000_000.0;
        inputs.property_tax_rate = 2.0;
        inputs.mortgage_rate = 0.0;

        // 40k of property tax is capped at the 10k SALT limit; no interest at 0%.
        let buy = project_buy(&inputs, 1);
        assert_approx(buy.annual_tax_savings, 2_400.0);
    }

    #[test]
    fn pmi_applies_below_twenty_percent_down() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.down_payment_percentage = 10.0;
        assert_approx(project_buy(&inputs, 1).monthly_pmi, 150.0);
        assert_approx(project_buy(&inputs, 4).monthly_pmi, 150.0);
        assert_approx(project_buy(&inputs, 5).monthly_pmi, 0.0);
    }

    #[test]
    fn negative_utility_difference_lowers_owning_cost() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.utility_difference = -80.0;
        let buy = project_buy(&inputs, 1);
        assert_approx(buy.monthly_utilities, -80.0);
        assert_approx(buy.total_monthly_cost, 3_048.97);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_upfront_costs_only_in_first_year(
            price in 50_000u32..2_000_000,
            down_pct in 0u32..60,
            closing_bp in 0u32..800,
            moving in 1u32..20_000,
            year in 2u32..31
        ) {
            let mut inputs = DEFAULT_INPUTS;
            inputs.purchase_price = price as f64;
            inputs.down_payment_percentage = down_pct as f64;
            inputs.closing_cost_rate = closing_bp as f64 / 100.0;
            inputs.moving_costs = moving as f64;

            prop_assert!(project_buy(&inputs, 1).total_upfront_costs > 0.0);
            prop_assert_eq!(project_buy(&inputs, year).total_upfront_costs, 0.0);
        }

        #[test]
        fn prop_home_value_compounds_yearly(
            price in 50_000u32..2_000_000,
            appreciation_bp in 0u32..1_000,
            year in 2u32..31
        ) {
            let mut inputs = DEFAULT_INPUTS;
            inputs.purchase_price = price as f64;
            inputs.home_price_appreciation = appreciation_bp as f64 / 100.0;

            prop_assert_eq!(project_buy(&inputs, 1).home_value, inputs.purchase_price);
            let previous = project_buy(&inputs, year - 1).home_value;
            let current = project_buy(&inputs, year).home_value;
            let ratio = 1.0 + inputs.home_price_appreciation / 100.0;
            // Both sides are rounded to cents.
            prop_assert!((current - previous * ratio).abs() <= 0.01 * ratio + 0.01);
        }
    }
}
