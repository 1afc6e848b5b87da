/// Rounds to whole cents, with halves going up (towards positive infinity).
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Growth factor for `years` of annual compounding at `rate_pct` percent.
pub fn compound(rate_pct: f64, years: u32) -> f64 {
    (1.0 + rate_pct / 100.0).powi(years as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_cents_rounds_halves_up() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.12);
        assert_eq!(round_cents(1_234.564), 1_234.56);
        assert_eq!(round_cents(-2.5), -2.5);
    }

    #[test]
    fn compound_is_one_at_year_zero() {
        assert_eq!(compound(7.0, 0), 1.0);
        assert!((compound(10.0, 2) - 1.21).abs() < 1e-12);
    }
}
