use serde::{Deserialize, Serialize};

/// Everything a single buy-vs-rent comparison depends on.
///
/// Rates are annual percentages written as plain numbers (`7.0` means 7%).
/// `utility_difference` is the only signed field: positive means owning costs
/// more per month than renting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInputs {
    pub purchase_price: f64,
    pub down_payment_percentage: f64,
    pub monthly_rent: f64,

    pub mortgage_rate: f64,
    pub mortgage_term_years: u32,
    pub stock_market_growth_rate: f64,

    pub property_tax_rate: f64,
    pub home_insurance: f64,
    pub hoa_fees: f64,
    pub maintenance_rate: f64,
    pub pmi_rate: f64,

    pub home_price_appreciation: f64,
    pub inflation_rate: f64,
    pub rent_growth_rate: f64,

    pub closing_cost_rate: f64,
    pub moving_costs: f64,
    pub renters_insurance: f64,
    pub utility_difference: f64,

    pub time_horizon_years: u32,
    pub tax_bracket: f64,
    pub salt_deduction_limit: f64,
}

pub const DEFAULT_INPUTS: CalculatorInputs = CalculatorInputs {
    purchase_price: 400_000.0,
    down_payment_percentage: 20.0,
    monthly_rent: 2_000.0,

    mortgage_rate: 7.0,
    mortgage_term_years: 30,
    stock_market_growth_rate: 7.0,

    property_tax_rate: 1.2,
    home_insurance: 1_200.0,
    hoa_fees: 0.0,
    maintenance_rate: 1.5,
    pmi_rate: 0.5,

    home_price_appreciation: 3.0,
    inflation_rate: 2.5,
    rent_growth_rate: 3.0,

    closing_cost_rate: 3.0,
    moving_costs: 2_000.0,
    renters_insurance: 200.0,
    utility_difference: 50.0,

    time_horizon_years: 10,
    tax_bracket: 24.0,
    salt_deduction_limit: 10_000.0,
};

impl Default for CalculatorInputs {
    fn default() -> Self {
        DEFAULT_INPUTS
    }
}

impl CalculatorInputs {
    pub fn down_payment(&self) -> f64 {
        self.purchase_price * (self.down_payment_percentage / 100.0)
    }

    pub fn loan_amount(&self) -> f64 {
        self.purchase_price - self.down_payment()
    }
}

/// Amortization snapshot for one loan year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageYear {
    pub monthly_payment: f64,
    pub monthly_interest: f64,
    pub monthly_principal: f64,
    /// Balance left once the year's payments are made.
    pub remaining_balance: f64,
    pub total_interest_to_date: f64,
    pub total_principal_to_date: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyScenarioResult {
    pub monthly_mortgage_payment: f64,
    pub monthly_property_tax: f64,
    pub monthly_insurance: f64,
    pub monthly_pmi: f64,
    pub monthly_hoa: f64,
    pub monthly_maintenance: f64,
    pub monthly_utilities: f64,
    pub total_monthly_cost: f64,

    pub down_payment: f64,
    pub closing_costs: f64,
    pub moving_costs: f64,
    /// Down payment, closing and moving costs; zero after the first year.
    pub total_upfront_costs: f64,

    pub annual_tax_savings: f64,
    pub opportunity_cost_of_down_payment: f64,

    pub current_equity: f64,
    pub home_value: f64,
    pub mortgage_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentScenarioResult {
    pub monthly_rent: f64,
    pub monthly_renters_insurance: f64,
    pub monthly_utilities: f64,
    pub total_monthly_cost: f64,

    pub invested_down_payment: f64,
    pub investment_growth: f64,
    pub total_investment_value: f64,

    pub moving_costs: f64,
    pub security_deposit: f64,
}

impl RentScenarioResult {
    pub fn one_time_costs(&self) -> f64 {
        self.moving_costs + self.security_deposit
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Rent,
    Neutral,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Rent => "RENT",
            Recommendation::Neutral => "NEUTRAL",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub recommendation: Recommendation,
    #[serde(rename = "confidenceLevel")]
    pub confidence: Confidence,
    /// First-year monthly cost of buying minus renting.
    pub monthly_difference: f64,
    pub total_cost_difference: f64,
    pub break_even_year: u32,
    pub buy_net_worth: f64,
    pub rent_net_worth: f64,
    pub net_worth_difference: f64,
    pub key_factors: Vec<String>,
    pub risks: Vec<String>,
    pub assumptions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBreakdownEntry {
    pub year: u32,

    pub buy_total_cost: f64,
    pub buy_monthly_costs: f64,
    pub buy_equity: f64,
    pub buy_net_worth: f64,
    pub home_value: f64,

    pub rent_total_cost: f64,
    pub rent_monthly_costs: f64,
    pub rent_investment_value: f64,
    pub rent_net_worth: f64,

    pub cumulative_difference: f64,
    pub monthly_difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResult {
    pub inputs: CalculatorInputs,
    pub buy_scenario: BuyScenarioResult,
    pub rent_scenario: RentScenarioResult,
    pub comparison: ComparisonResult,
    pub yearly_breakdown: Vec<YearlyBreakdownEntry>,
}
