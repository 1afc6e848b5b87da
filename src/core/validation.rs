use super::error::InputError;
use super::types::CalculatorInputs;

/// Longest mortgage term or time horizon accepted, in years.
pub const MAX_YEARS: u32 = 50;

/// Rejects inputs outside the domain the projections are defined on.
///
/// The projections themselves never validate; this is the check callers run
/// at the boundary before handing inputs over.
pub fn validate_inputs(inputs: &CalculatorInputs) -> Result<(), InputError> {
    let non_negative = [
        ("purchasePrice", inputs.purchase_price),
        ("downPaymentPercentage", inputs.down_payment_percentage),
        ("monthlyRent", inputs.monthly_rent),
        ("mortgageRate", inputs.mortgage_rate),
        ("stockMarketGrowthRate", inputs.stock_market_growth_rate),
        ("propertyTaxRate", inputs.property_tax_rate),
        ("homeInsurance", inputs.home_insurance),
        ("hoaFees", inputs.hoa_fees),
        ("maintenanceRate", inputs.maintenance_rate),
        ("pmiRate", inputs.pmi_rate),
        ("homePriceAppreciation", inputs.home_price_appreciation),
        ("inflationRate", inputs.inflation_rate),
        ("rentGrowthRate", inputs.rent_growth_rate),
        ("closingCostRate", inputs.closing_cost_rate),
        ("movingCosts", inputs.moving_costs),
        ("rentersInsurance", inputs.renters_insurance),
        ("taxBracket", inputs.tax_bracket),
        ("saltDeductionLimit", inputs.salt_deduction_limit),
    ];

    for (field, value) in non_negative {
        if !value.is_finite() {
            return Err(InputError::NonFinite { field });
        }
        if value < 0.0 {
            return Err(InputError::Negative { field });
        }
    }

    if !inputs.utility_difference.is_finite() {
        return Err(InputError::NonFinite {
            field: "utilityDifference",
        });
    }

    for (field, value) in [
        ("downPaymentPercentage", inputs.down_payment_percentage),
        ("taxBracket", inputs.tax_bracket),
    ] {
        if value > 100.0 {
            return Err(InputError::OutOfRange {
                field,
                min: 0.0,
                max: 100.0,
            });
        }
    }

    for (field, value) in [
        ("mortgageTermYears", inputs.mortgage_term_years),
        ("timeHorizonYears", inputs.time_horizon_years),
    ] {
        if value == 0 || value > MAX_YEARS {
            return Err(InputError::InvalidYears {
                field,
                value,
                max: MAX_YEARS,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DEFAULT_INPUTS;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate_inputs(&DEFAULT_INPUTS), Ok(()));
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.mortgage_rate = f64::NAN;
        let err = validate_inputs(&inputs).expect_err("NaN must be rejected");
        assert_eq!(err.field(), "mortgageRate");

        let mut inputs = DEFAULT_INPUTS;
        inputs.utility_difference = f64::INFINITY;
        let err = validate_inputs(&inputs).expect_err("infinity must be rejected");
        assert_eq!(
            err,
            InputError::NonFinite {
                field: "utilityDifference"
            }
        );
    }

    #[test]
    fn rejects_negative_amounts_but_not_utility_difference() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.utility_difference = -120.0;
        assert_eq!(validate_inputs(&inputs), Ok(()));

        inputs.monthly_rent = -1.0;
        let err = validate_inputs(&inputs).expect_err("negative rent must be rejected");
        assert_eq!(err, InputError::Negative { field: "monthlyRent" });
        assert_eq!(err.to_string(), "monthlyRent must be >= 0");
    }

    #[test]
    fn rejects_percentages_above_one_hundred() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.down_payment_percentage = 120.0;
        let err = validate_inputs(&inputs).expect_err("must reject 120% down");
        assert_eq!(err.field(), "downPaymentPercentage");
    }

    #[test]
    fn rejects_zero_or_excessive_years() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.time_horizon_years = 0;
        let err = validate_inputs(&inputs).expect_err("must reject zero horizon");
        assert_eq!(err.field(), "timeHorizonYears");

        let mut inputs = DEFAULT_INPUTS;
        inputs.mortgage_term_years = MAX_YEARS + 1;
        let err = validate_inputs(&inputs).expect_err("must reject long term");
        assert!(err.to_string().contains("mortgageTermYears"));
    }
}
