//! Plain-language notes that accompany a comparison.

use super::types::CalculatorInputs;

const QUICK_BREAK_EVEN_YEARS: u32 = 5;
const SLOW_BREAK_EVEN_YEARS: u32 = 15;
const SHORT_HORIZON_YEARS: u32 = 5;
const LOW_DOWN_PAYMENT_PCT: f64 = 20.0;

pub fn key_factors(
    inputs: &CalculatorInputs,
    buy_monthly: f64,
    rent_monthly: f64,
    break_even_year: u32,
) -> Vec<String> {
    let mut factors = Vec::new();

    if buy_monthly > rent_monthly * 1.3 {
        factors.push("High monthly cost difference favors renting");
    } else if rent_monthly > buy_monthly * 1.2 {
        factors.push("Lower monthly costs favor buying");
    }

    if inputs.home_price_appreciation > 4.0 {
        factors.push("Strong home appreciation expected");
    } else if inputs.home_price_appreciation < 2.0 {
        factors.push("Low home appreciation expected");
    }

    if inputs.stock_market_growth_rate > inputs.home_price_appreciation + 2.0 {
        factors.push("Stock market returns favor investing down payment");
    }

    if break_even_year <= QUICK_BREAK_EVEN_YEARS {
        factors.push("Quick break-even period favors buying");
    } else if break_even_year > SLOW_BREAK_EVEN_YEARS {
        factors.push("Long break-even period favors renting");
    }

    if inputs.down_payment_percentage < LOW_DOWN_PAYMENT_PCT {
        factors.push("PMI increases buying costs");
    }

    factors.into_iter().map(String::from).collect()
}

pub fn risks(inputs: &CalculatorInputs) -> Vec<String> {
    let mut risks = vec![
        "Market volatility could affect home values and investment returns",
        "Interest rate changes could impact refinancing opportunities",
    ];

    if inputs.down_payment_percentage < LOW_DOWN_PAYMENT_PCT {
        risks.push("Low down payment increases financial risk");
    }
    if inputs.time_horizon_years < SHORT_HORIZON_YEARS {
        risks.push("Short time horizon limits benefits of homeownership");
    }

    risks.push("Job mobility may be reduced by homeownership");
    risks.push("Maintenance costs could exceed estimates");

    risks.into_iter().map(String::from).collect()
}

pub fn assumptions(inputs: &CalculatorInputs) -> Vec<String> {
    vec![
        format!(
            "Home appreciates at {}% annually",
            inputs.home_price_appreciation
        ),
        format!(
            "Stock market returns {}% annually",
            inputs.stock_market_growth_rate
        ),
        format!("Rent increases at {}% annually", inputs.rent_growth_rate),
        format!(
            "Maintenance costs {}% of home value annually",
            inputs.maintenance_rate
        ),
        format!("Tax bracket remains at {}%", inputs.tax_bracket),
        "No major repairs or market disruptions".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DEFAULT_INPUTS;

    #[test]
    fn default_key_factors() {
        let factors = key_factors(&DEFAULT_INPUTS, 3_178.97, 2_016.67, 30);
        assert_eq!(
            factors,
            vec![
                "High monthly cost difference favors renting",
                "Stock market returns favor investing down payment",
                "Long break-even period favors renting",
            ]
        );
    }

    #[test]
    fn key_factors_for_a_cheap_low_down_payment_purchase() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.home_price_appreciation = 5.0;
        inputs.stock_market_growth_rate = 6.0;
        inputs.down_payment_percentage = 5.0;

        let factors = key_factors(&inputs, 1_500.0, 2_000.0, 3);
        assert_eq!(
            factors,
            vec![
                "Lower monthly costs favor buying",
                "Strong home appreciation expected",
                "Quick break-even period favors buying",
                "PMI increases buying costs",
            ]
        );
    }

    #[test]
    fn low_appreciation_is_flagged() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.home_price_appreciation = 1.5;
        inputs.stock_market_growth_rate = 3.0;
        let factors = key_factors(&inputs, 2_000.0, 2_000.0, 10);
        assert_eq!(factors, vec!["Low home appreciation expected"]);
    }

    #[test]
    fn risks_always_include_baseline_entries() {
        let risks = risks(&DEFAULT_INPUTS);
        assert_eq!(risks.len(), 4);
        assert!(risks.iter().any(|r| r.contains("Market volatility")));
        assert!(risks.iter().any(|r| r.contains("Maintenance costs")));
    }

    #[test]
    fn risks_flag_low_down_payment_and_short_horizon() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.down_payment_percentage = 10.0;
        inputs.time_horizon_years = 3;
        let risks = risks(&inputs);
        assert_eq!(risks.len(), 6);
        assert_eq!(risks[2], "Low down payment increases financial risk");
        assert_eq!(risks[3], "Short time horizon limits benefits of homeownership");
    }

    #[test]
    fn assumptions_echo_inputs() {
        let mut inputs = DEFAULT_INPUTS;
        inputs.stock_market_growth_rate = 6.5;
        let assumptions = assumptions(&inputs);
        assert_eq!(assumptions[0], "Home appreciates at 3% annually");
        assert_eq!(assumptions[1], "Stock market returns 6.5% annually");
        assert_eq!(assumptions[4], "Tax bracket remains at 24%");
        assert_eq!(assumptions.len(), 6);
    }
}
