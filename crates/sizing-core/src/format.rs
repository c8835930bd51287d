//! German-locale money and percentage formatting.
//!
//! Amounts render like `€8.000,00`: `.` groups thousands, `,` separates
//! the two decimal places. Percentages keep a decimal dot (`8.00%`).

use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY: &str = "€";

/// Format an amount with exactly two decimals, e.g. `€8.000,00`.
pub fn format_eur(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = group(&format!("{:.2}", rounded.abs()));
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", CURRENCY, body)
    } else {
        format!("{}{}", CURRENCY, body)
    }
}

/// Like [`format_eur`], with a leading `+` for positive amounts.
pub fn format_eur_signed(value: Decimal) -> String {
    let formatted = format_eur(value);
    if value > Decimal::ZERO {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Format an amount with up to three decimals and no trailing zeros,
/// e.g. `€100.000` or `€2.500,5`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let body = group(&rounded.abs().to_string());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", CURRENCY, body)
    } else {
        format!("{}{}", CURRENCY, body)
    }
}

/// Format a percentage with two decimals, e.g. `8.00%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}

/// Like [`format_percent`], with a leading `+` for positive values.
pub fn format_percent_signed(value: Decimal) -> String {
    let formatted = format_percent(value);
    if value > Decimal::ZERO {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Regroup a plain `1234567.89` string into `1.234.567,89`.
fn group(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut out = String::with_capacity(plain.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }

    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}
