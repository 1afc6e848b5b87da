mod buy;
mod comparison;
mod engine;
mod error;
mod export;
mod insights;
mod money;
mod mortgage;
mod rent;
mod types;
mod validation;

pub use buy::project_buy;
pub use comparison::{
    BREAK_EVEN_SEARCH_YEARS, CostCurves, compare, confidence, cumulative_buy_cost,
    cumulative_rent_cost, find_break_even, recommend,
};
pub use engine::{run, try_run};
pub use error::InputError;
pub use export::{ExportSummary, share_text};
pub use insights::{assumptions, key_factors, risks};
pub use money::round_cents;
pub use mortgage::{monthly_payment, pmi, remaining_balance, year_detail};
pub use rent::project_rent;
pub use types::{
    BuyScenarioResult, CalculatorInputs, CalculatorResult, ComparisonResult, Confidence,
    DEFAULT_INPUTS, MortgageYear, Recommendation, RentScenarioResult, YearlyBreakdownEntry,
};
pub use validation::{MAX_YEARS, validate_inputs};
