use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    CalculatorInputs, CalculatorResult, DEFAULT_INPUTS, ExportSummary, InputError, run,
    share_text, validate_inputs,
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Full result as pretty-printed JSON
    #[default]
    Json,
    /// Export summary as pretty-printed JSON
    Export,
    /// One-line shareable recommendation
    Share,
    /// Year-by-year table
    Table,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ComparePayload {
    purchase_price: Option<f64>,
    down_payment_percentage: Option<f64>,
    monthly_rent: Option<f64>,

    mortgage_rate: Option<f64>,
    #[serde(alias = "mortgageTerm")]
    mortgage_term_years: Option<u32>,
    stock_market_growth_rate: Option<f64>,

    property_tax_rate: Option<f64>,
    home_insurance: Option<f64>,
    hoa_fees: Option<f64>,
    maintenance_rate: Option<f64>,
    pmi_rate: Option<f64>,

    home_price_appreciation: Option<f64>,
    inflation_rate: Option<f64>,
    rent_growth_rate: Option<f64>,

    closing_cost_rate: Option<f64>,
    moving_costs: Option<f64>,
    renters_insurance: Option<f64>,
    utility_difference: Option<f64>,

    #[serde(alias = "timeHorizon")]
    time_horizon_years: Option<u32>,
    tax_bracket: Option<f64>,
    salt_deduction_limit: Option<f64>,
}

#[derive(Parser, Debug)]
#[command(
    name = "rentbuy",
    about = "Buy vs rent comparison: mortgage amortization, yearly cost projections and a recommendation"
)]
pub struct Cli {
    #[arg(long, default_value_t = DEFAULT_INPUTS.purchase_price)]
    purchase_price: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.down_payment_percentage,
        help = "Down payment in percent of the purchase price"
    )]
    down_payment: f64,
    #[arg(long, default_value_t = DEFAULT_INPUTS.monthly_rent)]
    monthly_rent: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.mortgage_rate,
        help = "Annual mortgage rate in percent, e.g. 7"
    )]
    mortgage_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.mortgage_term_years,
        help = "Mortgage term in years"
    )]
    mortgage_term: u32,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.stock_market_growth_rate,
        help = "Expected annual stock market return in percent"
    )]
    stock_growth_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.property_tax_rate,
        help = "Annual property tax in percent of current home value"
    )]
    property_tax_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.home_insurance,
        help = "Annual home insurance premium"
    )]
    home_insurance: f64,
    #[arg(long, default_value_t = DEFAULT_INPUTS.hoa_fees, help = "Monthly HOA fees")]
    hoa_fees: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.maintenance_rate,
        help = "Annual maintenance in percent of current home value"
    )]
    maintenance_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.pmi_rate,
        help = "Annual PMI in percent of the original loan"
    )]
    pmi_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.home_price_appreciation,
        help = "Annual home price appreciation in percent"
    )]
    appreciation_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.inflation_rate,
        help = "Annual inflation in percent"
    )]
    inflation_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.rent_growth_rate,
        help = "Annual rent growth in percent"
    )]
    rent_growth_rate: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.closing_cost_rate,
        help = "Closing costs in percent of the purchase price"
    )]
    closing_cost_rate: f64,
    #[arg(long, default_value_t = DEFAULT_INPUTS.moving_costs)]
    moving_costs: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.renters_insurance,
        help = "Annual renter's insurance premium"
    )]
    renters_insurance: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = DEFAULT_INPUTS.utility_difference,
        help = "Monthly utility difference; positive means owning costs more"
    )]
    utility_difference: f64,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.time_horizon_years,
        help = "Years to compare over"
    )]
    time_horizon: u32,
    #[arg(
        long,
        default_value_t = DEFAULT_INPUTS.tax_bracket,
        help = "Marginal tax bracket in percent"
    )]
    tax_bracket: f64,
    #[arg(long, default_value_t = DEFAULT_INPUTS.salt_deduction_limit)]
    salt_deduction_limit: f64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportResponse {
    #[serde(flatten)]
    summary: ExportSummary,
    file_name: String,
    share_text: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_inputs(cli: &Cli) -> Result<CalculatorInputs, InputError> {
    let inputs = CalculatorInputs {
        purchase_price: cli.purchase_price,
        down_payment_percentage: cli.down_payment,
        monthly_rent: cli.monthly_rent,
        mortgage_rate: cli.mortgage_rate,
        mortgage_term_years: cli.mortgage_term,
        stock_market_growth_rate: cli.stock_growth_rate,
        property_tax_rate: cli.property_tax_rate,
        home_insurance: cli.home_insurance,
        hoa_fees: cli.hoa_fees,
        maintenance_rate: cli.maintenance_rate,
        pmi_rate: cli.pmi_rate,
        home_price_appreciation: cli.appreciation_rate,
        inflation_rate: cli.inflation_rate,
        rent_growth_rate: cli.rent_growth_rate,
        closing_cost_rate: cli.closing_cost_rate,
        moving_costs: cli.moving_costs,
        renters_insurance: cli.renters_insurance,
        utility_difference: cli.utility_difference,
        time_horizon_years: cli.time_horizon,
        tax_bracket: cli.tax_bracket,
        salt_deduction_limit: cli.salt_deduction_limit,
    };
    validate_inputs(&inputs)?;
    Ok(inputs)
}

/// Runs one comparison from parsed command-line arguments and renders it in
/// the requested format.
pub fn render_cli(cli: &Cli) -> Result<String, InputError> {
    let inputs = build_inputs(cli)?;
    let result = run(&inputs);
    Ok(render(&result, cli.format, Local::now().date_naive()))
}

fn render(result: &CalculatorResult, format: OutputFormat, today: NaiveDate) -> String {
    match format {
        OutputFormat::Json => to_pretty_json(result),
        OutputFormat::Export => to_pretty_json(&ExportSummary::from_result(result, today)),
        OutputFormat::Share => share_text(&result.comparison),
        OutputFormat::Table => render_table(result),
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> String {
    // Result types hold only numbers, strings and dates.
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn render_table(result: &CalculatorResult) -> String {
    let comparison = &result.comparison;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Year | BuyCost | BuyMonthly | Equity | HomeValue | RentCost | RentMonthly | Invested | CumDiff"
    );
    for row in &result.yearly_breakdown {
        let _ = writeln!(
            out,
            "{:4} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2}",
            row.year,
            row.buy_total_cost,
            row.buy_monthly_costs,
            row.buy_equity,
            row.home_value,
            row.rent_total_cost,
            row.rent_monthly_costs,
            row.rent_investment_value,
            row.cumulative_difference,
        );
    }
    let _ = writeln!(
        out,
        "\nRecommendation: {} ({} confidence)",
        comparison.recommendation.as_str(),
        comparison.confidence.as_str()
    );
    let _ = writeln!(out, "Break-even year: {}", comparison.break_even_year);
    let _ = writeln!(
        out,
        "Net worth: buy {:.2}, rent {:.2}, difference {:.2}",
        comparison.buy_net_worth, comparison.rent_net_worth, comparison.net_worth_difference
    );
    out
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/defaults", get(defaults_handler))
        .route(
            "/api/compare",
            get(compare_get_handler).post(compare_post_handler),
        )
        .route(
            "/api/export",
            get(export_get_handler).post(export_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    info!("rentbuy HTTP API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{port}/api/compare");

    axum::serve(listener, app).await
}

async fn defaults_handler() -> Response {
    json_response(StatusCode::OK, DEFAULT_INPUTS)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn compare_get_handler(Query(payload): Query<ComparePayload>) -> Response {
    compare_handler_impl(payload)
}

async fn compare_post_handler(Json(payload): Json<ComparePayload>) -> Response {
    compare_handler_impl(payload)
}

async fn export_get_handler(Query(payload): Query<ComparePayload>) -> Response {
    export_handler_impl(payload)
}

async fn export_post_handler(Json(payload): Json<ComparePayload>) -> Response {
    export_handler_impl(payload)
}

fn compare_handler_impl(payload: ComparePayload) -> Response {
    match inputs_from_payload(payload) {
        Ok(inputs) => json_response(StatusCode::OK, run(&inputs)),
        Err(err) => rejected(err),
    }
}

fn export_handler_impl(payload: ComparePayload) -> Response {
    match inputs_from_payload(payload) {
        Ok(inputs) => {
            let result = run(&inputs);
            json_response(
                StatusCode::OK,
                build_export_response(&result, Local::now().date_naive()),
            )
        }
        Err(err) => rejected(err),
    }
}

fn rejected(err: InputError) -> Response {
    warn!("rejected comparison request: {err}");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn build_export_response(result: &CalculatorResult, today: NaiveDate) -> ExportResponse {
    let summary = ExportSummary::from_result(result, today);
    ExportResponse {
        file_name: summary.file_name(),
        share_text: share_text(&result.comparison),
        summary,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn inputs_from_json(json: &str) -> Result<CalculatorInputs, String> {
    let payload = serde_json::from_str::<ComparePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    inputs_from_payload(payload).map_err(|e| e.to_string())
}

fn inputs_from_payload(payload: ComparePayload) -> Result<CalculatorInputs, InputError> {
    let mut inputs = DEFAULT_INPUTS;

    if let Some(v) = payload.purchase_price {
        inputs.purchase_price = v;
    }
    if let Some(v) = payload.down_payment_percentage {
        inputs.down_payment_percentage = v;
    }
    if let Some(v) = payload.monthly_rent {
        inputs.monthly_rent = v;
    }

    if let Some(v) = payload.mortgage_rate {
        inputs.mortgage_rate = v;
    }
    if let Some(v) = payload.mortgage_term_years {
        inputs.mortgage_term_years = v;
    }
    if let Some(v) = payload.stock_market_growth_rate {
        inputs.stock_market_growth_rate = v;
    }

    if let Some(v) = payload.property_tax_rate {
        inputs.property_tax_rate = v;
    }
    if let Some(v) = payload.home_insurance {
        inputs.home_insurance = v;
    }
    if let Some(v) = payload.hoa_fees {
        inputs.hoa_fees = v;
    }
    if let Some(v) = payload.maintenance_rate {
        inputs.maintenance_rate = v;
    }
    if let Some(v) = payload.pmi_rate {
        inputs.pmi_rate = v;
    }

    if let Some(v) = payload.home_price_appreciation {
        inputs.home_price_appreciation = v;
    }
    if let Some(v) = payload.inflation_rate {
        inputs.inflation_rate = v;
    }
    if let Some(v) = payload.rent_growth_rate {
        inputs.rent_growth_rate = v;
    }

    if let Some(v) = payload.closing_cost_rate {
        inputs.closing_cost_rate = v;
    }
    if let Some(v) = payload.moving_costs {
        inputs.moving_costs = v;
    }
    if let Some(v) = payload.renters_insurance {
        inputs.renters_insurance = v;
    }
    if let Some(v) = payload.utility_difference {
        inputs.utility_difference = v;
    }

    if let Some(v) = payload.time_horizon_years {
        inputs.time_horizon_years = v;
    }
    if let Some(v) = payload.tax_bracket {
        inputs.tax_bracket = v;
    }
    if let Some(v) = payload.salt_deduction_limit {
        inputs.salt_deduction_limit = v;
    }

    validate_inputs(&inputs)?;
    Ok(inputs)
}
