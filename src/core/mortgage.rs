//! Fixed-rate mortgage amortization.
//!
//! All amounts are rounded to cents at the point they are produced, so that
//! downstream sums see the same figures a borrower's statement would show.

use super::money::round_cents;
use super::types::MortgageYear;

/// Loan-to-value (in percent) at or below which PMI is dropped.
pub const PMI_CANCELLATION_LTV: f64 = 78.0;

/// Down payment percentage from which no PMI is ever charged.
pub const PMI_EXEMPT_DOWN_PAYMENT: f64 = 20.0;

fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

fn payment_count(term_years: u32) -> u32 {
    term_years * 12
}

/// Level monthly payment `P·c(1+c)^n / ((1+c)^n − 1)`.
///
/// A zero rate falls back to straight-line repayment; a non-positive loan,
/// a zero term or a negative rate yield no payment at all.
pub fn monthly_payment(loan_amount: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    if loan_amount <= 0.0 || term_years == 0 || annual_rate_pct < 0.0 {
        return 0.0;
    }

    let n = payment_count(term_years) as f64;
    let c = monthly_rate(annual_rate_pct);
    if c == 0.0 {
        return round_cents(loan_amount / n);
    }

    let growth = (1.0 + c).powf(n);
    round_cents(loan_amount * (c * growth) / (growth - 1.0))
}

/// Principal still owed after `payments_made` monthly payments.
pub fn remaining_balance(
    loan_amount: f64,
    annual_rate_pct: f64,
    term_years: u32,
    payments_made: u32,
) -> f64 {
    if payments_made == 0 {
        return loan_amount;
    }
    let total_payments = payment_count(term_years);
    if payments_made >= total_payments {
        return 0.0;
    }

    let c = monthly_rate(annual_rate_pct);
    if c == 0.0 {
        let payment = monthly_payment(loan_amount, annual_rate_pct, term_years);
        return round_cents(loan_amount - payment * payments_made as f64).max(0.0);
    }

    let full = (1.0 + c).powf(total_payments as f64);
    let made = (1.0 + c).powf(payments_made as f64);
    round_cents(loan_amount * (full - made) / (full - 1.0)).max(0.0)
}

/// Interest/principal split for loan year `year` (1-indexed).
///
/// Monthly figures are averages over the payments actually due in that
/// year; once the loan is paid off nothing further accrues.
pub fn year_detail(
    loan_amount: f64,
    annual_rate_pct: f64,
    term_years: u32,
    year: u32,
) -> MortgageYear {
    let total_payments = payment_count(term_years);
    let payments_before = year.saturating_sub(1) * 12;
    let payment = monthly_payment(loan_amount, annual_rate_pct, term_years);
    let c = monthly_rate(annual_rate_pct);

    let mut year_interest = 0.0;
    let mut year_principal = 0.0;
    for month in 1..=12 {
        let current = payments_before + month;
        if current > total_payments {
            break;
        }
        let opening =
            remaining_balance(loan_amount, annual_rate_pct, term_years, current - 1);
        let interest = opening * c;
        year_interest += interest;
        year_principal += payment - interest;
    }

    let payments_made = (year * 12).min(total_payments);
    let balance = remaining_balance(loan_amount, annual_rate_pct, term_years, payments_made);
    let principal_to_date = loan_amount - balance;
    let interest_to_date = payment * payments_made as f64 - principal_to_date;

    MortgageYear {
        monthly_payment: payment,
        monthly_interest: round_cents(year_interest / 12.0),
        monthly_principal: round_cents(year_principal / 12.0),
        remaining_balance: balance,
        total_interest_to_date: round_cents(interest_to_date),
        total_principal_to_date: round_cents(principal_to_date),
    }
}

/// Monthly PMI premium given the loan's current loan-to-value.
pub fn pmi(
    original_loan: f64,
    current_home_value: f64,
    current_balance: f64,
    annual_pmi_rate_pct: f64,
    down_payment_pct: f64,
) -> f64 {
    if down_payment_pct >= PMI_EXEMPT_DOWN_PAYMENT || current_home_value <= 0.0 {
        return 0.0;
    }

    let ltv = current_balance / current_home_value * 100.0;
    if ltv <= PMI_CANCELLATION_LTV {
        return 0.0;
    }

    round_cents(original_loan * (annual_pmi_rate_pct / 100.0) / 12.0)
}
