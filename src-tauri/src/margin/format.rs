//! Display formatting for simulation values, pt-BR style.
//!
//! These helpers are presentation-only: rounding happens here and nowhere
//! in the calculator. The frontend carries its own equivalents for values
//! it formats locally.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a currency amount as "R$ 1.234,56". Negative amounts carry a
/// leading minus sign: "-R$ 260,00".
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (units, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.abs().is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, group_thousands(units), cents)
}

/// Format a percentage with two decimals and a comma separator: "67,50%".
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",") + "%"
}

/// Format a duration in hours as "2h", "1h 30min" or "45min".
pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    match (h, m) {
        (0, m) => format!("{}min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}

fn group_thousands(units: &str) -> String {
    let digits: Vec<char> = units.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_currency(Decimal::from(800)), "R$ 800,00");
        assert_eq!(format_currency(Decimal::from(1_000_000)), "R$ 1.000.000,00");
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Decimal::from(-260)), "-R$ 260,00");
        // Rounds to zero: no stray sign.
        assert_eq!(format_currency(Decimal::new(-1, 3)), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_rounds_at_display_only() {
        assert_eq!(format_currency(Decimal::new(13500005, 5)), "R$ 135,00");
        assert_eq!(format_currency(Decimal::new(135005, 3)), "R$ 135,01");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(67.5), "67,50%");
        assert_eq!(format_percentage(0.0), "0,00%");
        assert_eq!(format_percentage(-12.345), "-12,35%");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(2.0), "2h");
        assert_eq!(format_hours(1.5), "1h 30min");
        assert_eq!(format_hours(0.75), "45min");
        assert_eq!(format_hours(0.0), "0min");
    }
}
