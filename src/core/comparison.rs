//! Aggregation of the yearly buy and rent projections over a horizon.

use super::buy::project_buy;
use super::insights::{assumptions, key_factors, risks};
use super::money::round_cents;
use super::rent::project_rent;
use super::types::{
    BuyScenarioResult, CalculatorInputs, ComparisonResult, Confidence, Recommendation,
    RentScenarioResult,
};

/// Break-even is searched this far out regardless of the horizon.
pub const BREAK_EVEN_SEARCH_YEARS: u32 = 30;

const BUY_NET_WORTH_EDGE: f64 = 50_000.0;
const STRONG_BUY_NET_WORTH_EDGE: f64 = 75_000.0;
const RENT_NET_WORTH_EDGE: f64 = -50_000.0;
const RENT_COST_EDGE: f64 = 100_000.0;

const HIGH_CONFIDENCE_GAP: f64 = 100_000.0;
const MEDIUM_CONFIDENCE_GAP: f64 = 25_000.0;

/// Yearly projections for both scenarios plus running cost totals.
///
/// Year `y` lives at index `y - 1`; callers must ask for years in
/// `1..=years()`.
#[derive(Debug, Clone)]
pub struct CostCurves {
    buy: Vec<BuyScenarioResult>,
    rent: Vec<RentScenarioResult>,
    buy_outlay: Vec<f64>,
    rent_outlay: Vec<f64>,
}

impl CostCurves {
    pub fn build(inputs: &CalculatorInputs, years: u32) -> Self {
        let capacity = years as usize;
        let mut curves = Self {
            buy: Vec::with_capacity(capacity),
            rent: Vec::with_capacity(capacity),
            buy_outlay: Vec::with_capacity(capacity),
            rent_outlay: Vec::with_capacity(capacity),
        };

        let mut buy_total = 0.0;
        let mut rent_total = 0.0;
        for year in 1..=years {
            let buy = project_buy(inputs, year);
            buy_total += buy.total_monthly_cost * 12.0;
            if year == 1 {
                buy_total += buy.total_upfront_costs;
            }
            buy_total -= buy.annual_tax_savings;
            buy_total += buy.opportunity_cost_of_down_payment;

            let rent = project_rent(inputs, year);
            rent_total += rent.total_monthly_cost * 12.0;
            if year == 1 {
                rent_total += rent.one_time_costs();
            }

            curves.buy.push(buy);
            curves.rent.push(rent);
            curves.buy_outlay.push(buy_total);
            curves.rent_outlay.push(rent_total);
        }
        curves
    }

    pub fn years(&self) -> u32 {
        self.buy.len() as u32
    }

    pub fn buy(&self, year: u32) -> &BuyScenarioResult {
        &self.buy[year as usize - 1]
    }

    pub fn rent(&self, year: u32) -> &RentScenarioResult {
        &self.rent[year as usize - 1]
    }

    /// Everything spent on owning through `year`, net of tax savings and
    /// the down payment's forgone returns, less the equity held at `year`.
    pub fn cumulative_buy_cost(&self, year: u32) -> f64 {
        self.buy_outlay[year as usize - 1] - self.buy(year).current_equity
    }

    /// Everything spent on renting through `year`, less the value of the
    /// invested down payment at `year`.
    pub fn cumulative_rent_cost(&self, year: u32) -> f64 {
        self.rent_outlay[year as usize - 1] - self.rent(year).total_investment_value
    }

    /// First year at which owning has cost no more than renting, or the
    /// last searched year when that never happens.
    pub fn break_even_year(&self) -> u32 {
        let limit = BREAK_EVEN_SEARCH_YEARS.min(self.years());
        (1..=limit)
            .find(|&year| self.cumulative_buy_cost(year) <= self.cumulative_rent_cost(year))
            .unwrap_or(BREAK_EVEN_SEARCH_YEARS)
    }
}

pub fn cumulative_buy_cost(inputs: &CalculatorInputs, target_year: u32) -> f64 {
    CostCurves::build(inputs, target_year).cumulative_buy_cost(target_year)
}

pub fn cumulative_rent_cost(inputs: &CalculatorInputs, target_year: u32) -> f64 {
    CostCurves::build(inputs, target_year).cumulative_rent_cost(target_year)
}

pub fn find_break_even(inputs: &CalculatorInputs) -> u32 {
    CostCurves::build(inputs, BREAK_EVEN_SEARCH_YEARS).break_even_year()
}

/// First matching rule wins.
pub fn recommend(
    total_cost_difference: f64,
    net_worth_difference: f64,
    break_even_year: u32,
    horizon_years: u32,
) -> Recommendation {
    if break_even_year <= horizon_years && net_worth_difference > BUY_NET_WORTH_EDGE {
        return Recommendation::Buy;
    }
    if total_cost_difference > RENT_COST_EDGE && break_even_year > horizon_years {
        return Recommendation::Rent;
    }
    if net_worth_difference > STRONG_BUY_NET_WORTH_EDGE {
        return Recommendation::Buy;
    }
    if net_worth_difference < RENT_NET_WORTH_EDGE {
        return Recommendation::Rent;
    }
    Recommendation::Neutral
}

pub fn confidence(total_cost_difference: f64, net_worth_difference: f64) -> Confidence {
    let cost_gap = total_cost_difference.abs();
    let net_worth_gap = net_worth_difference.abs();

    if cost_gap > HIGH_CONFIDENCE_GAP || net_worth_gap > HIGH_CONFIDENCE_GAP {
        Confidence::High
    } else if cost_gap > MEDIUM_CONFIDENCE_GAP || net_worth_gap > MEDIUM_CONFIDENCE_GAP {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Summarises `curves` at the inputs' horizon.
///
/// `curves` must cover at least `max(horizon, BREAK_EVEN_SEARCH_YEARS)`
/// years.
pub fn compare(inputs: &CalculatorInputs, curves: &CostCurves) -> ComparisonResult {
    let horizon = inputs.time_horizon_years;

    let total_buy_cost = round_cents(curves.cumulative_buy_cost(horizon));
    let total_rent_cost = round_cents(curves.cumulative_rent_cost(horizon));
    let total_cost_difference = total_buy_cost - total_rent_cost;

    let buy_first_month = curves.buy(1).total_monthly_cost;
    let rent_first_month = curves.rent(1).total_monthly_cost;
    let monthly_difference = buy_first_month - rent_first_month;

    let buy_net_worth = curves.buy(horizon).current_equity;
    let rent_net_worth = curves.rent(horizon).total_investment_value;
    let net_worth_difference = buy_net_worth - rent_net_worth;

    let break_even_year = curves.break_even_year();

    ComparisonResult {
        recommendation: recommend(
            total_cost_difference,
            net_worth_difference,
            break_even_year,
            horizon,
        ),
        confidence: confidence(total_cost_difference, net_worth_difference),
        monthly_difference: round_cents(monthly_difference),
        total_cost_difference: round_cents(total_cost_difference),
        break_even_year,
        buy_net_worth: round_cents(buy_net_worth),
        rent_net_worth: round_cents(rent_net_worth),
        net_worth_difference: round_cents(net_worth_difference),
        key_factors: key_factors(inputs, buy_first_month, rent_first_month, break_even_year),
        risks: risks(inputs),
        assumptions: assumptions(inputs),
    }
}
