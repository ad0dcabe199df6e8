//! Display formatting for FCFA amounts and rates (French locale)
//!
//! Callers build their UI strings from these helpers, so the exact output is
//! part of the contract: thousands grouped with a non-breaking space, comma
//! as decimal separator, a non-breaking space before the FCFA / % suffix.

use rust_decimal::{Decimal, RoundingStrategy};

const NBSP: char = '\u{a0}';

/// Format a whole-franc amount: `1234567 -> "1 234 567 FCFA"`
///
/// The amount is rounded half-up to whole francs first; FCFA has no
/// sub-unit in practice.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let mut digits = rounded.abs().to_string();
    // Decimal prints "-0" scale-0 values without a fraction part, but be
    // defensive about a trailing ".0" from non-normalized inputs
    if let Some(dot) = digits.find('.') {
        digits.truncate(dot);
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 6);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.insert(0, '-');
    }

    grouped.push(NBSP);
    grouped.push_str("FCFA");
    grouped
}

/// Format an annual rate in percent: `4.5 -> "4,5 %"`, `8.25 -> "8,25 %"`
///
/// One or two decimals: trailing zeros beyond the first decimal are dropped.
pub fn format_rate_percent(rate: Decimal) -> String {
    let rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let two_decimals = format!("{:.2}", rounded);
    let trimmed = two_decimals
        .strip_suffix('0')
        .unwrap_or(&two_decimals)
        .replace('.', ",");
    format!("{}{}%", trimmed, NBSP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "0\u{a0}FCFA");
        assert_eq!(format_currency(dec!(999)), "999\u{a0}FCFA");
        assert_eq!(format_currency(dec!(1000)), "1\u{a0}000\u{a0}FCFA");
        assert_eq!(format_currency(dec!(30000)), "30\u{a0}000\u{a0}FCFA");
        assert_eq!(format_currency(dec!(627000)), "627\u{a0}000\u{a0}FCFA");
        assert_eq!(
            format_currency(dec!(200848202)),
            "200\u{a0}848\u{a0}202\u{a0}FCFA"
        );
    }

    #[test]
    fn test_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(1999.5)), "2\u{a0}000\u{a0}FCFA");
        assert_eq!(format_currency(dec!(1999.4)), "1\u{a0}999\u{a0}FCFA");
    }

    #[test]
    fn test_negative_amount() {
        // Interest deltas can go negative in comparison output
        assert_eq!(format_currency(dec!(-1500)), "-1\u{a0}500\u{a0}FCFA");
    }

    #[test]
    fn test_rate_comma_separator() {
        assert_eq!(format_rate_percent(dec!(4.5)), "4,5\u{a0}%");
        assert_eq!(format_rate_percent(dec!(6.0)), "6,0\u{a0}%");
        assert_eq!(format_rate_percent(dec!(10)), "10,0\u{a0}%");
        assert_eq!(format_rate_percent(dec!(8.25)), "8,25\u{a0}%");
    }
}
