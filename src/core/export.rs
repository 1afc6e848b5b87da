use chrono::NaiveDate;
use serde::Serialize;

use super::types::{CalculatorResult, ComparisonResult, Confidence, Recommendation};

/// The subset of a result that is handed out as a downloadable summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub monthly_difference: f64,
    pub break_even: u32,
    pub net_worth_difference: f64,
    pub buy_monthly_cost: f64,
    pub rent_monthly_cost: f64,
    pub key_factors: Vec<String>,
    pub generated_on: NaiveDate,
}

impl ExportSummary {
    pub fn from_result(result: &CalculatorResult, generated_on: NaiveDate) -> Self {
        let comparison = &result.comparison;
        Self {
            recommendation: comparison.recommendation,
            confidence: comparison.confidence,
            monthly_difference: comparison.monthly_difference,
            break_even: comparison.break_even_year,
            net_worth_difference: comparison.net_worth_difference,
            buy_monthly_cost: result.buy_scenario.total_monthly_cost,
            rent_monthly_cost: result.rent_scenario.total_monthly_cost,
            key_factors: comparison.key_factors.clone(),
            generated_on,
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "buy-vs-rent-analysis-{}.json",
            self.generated_on.format("%Y-%m-%d")
        )
    }
}

/// One-line summary suitable for sharing.
pub fn share_text(comparison: &ComparisonResult) -> String {
    let direction = if comparison.monthly_difference > 0.0 {
        "more to buy"
    } else {
        "more to rent"
    };
    format!(
        "My recommendation: {} with {} confidence. Monthly difference: ${} {}.",
        comparison.recommendation.as_str(),
        comparison.confidence.as_str().to_lowercase(),
        comparison.monthly_difference.abs(),
        direction
    )
}
