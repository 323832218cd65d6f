//! Display formatting for money and margins.

use rust_decimal::{Decimal, RoundingStrategy};

/// Two decimals with thousands separators: `1234.5` -> `"1,234.50"`.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Fraction as a percentage with one decimal: `0.4667` -> `"46.7%"`.
pub fn percent(fraction: Decimal) -> String {
    format!("{:.1}%", percent_value(fraction))
}

/// Fraction as a percentage number rounded to one decimal (chart values).
pub fn percent_value(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
