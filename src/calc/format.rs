//! Brazilian Real currency formatting.
//!
//! Output is always `R$ ` followed by an optional `-`, the integer part grouped
//! by thousands with `.`, a `,` and exactly two decimals: `R$ 1.234,56`,
//! `R$ -500,75`, `R$ 0,00`.

use crate::domain::Decimal;

const SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Format a display number as Brazilian Real.
///
/// The number is first read as its shortest round-trip decimal (`1.005` is
/// `1.005`, not `1.00499999...`) and then rounded half-up to two places.
pub fn format_brl(value: f64) -> String {
    if value.is_nan() {
        return format!("{SYMBOL} NaN");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{SYMBOL} {sign}∞");
    }

    match Decimal::from_f64(value) {
        Ok(decimal) => format_brl_decimal(decimal),
        // Beyond the decimal range: the float's own two-place rendering.
        Err(_) => {
            let rendered = format!("{:.2}", value.abs());
            let (int_part, frac_part) = rendered
                .split_once('.')
                .unwrap_or((rendered.as_str(), "00"));
            assemble(value < 0.0, int_part, frac_part)
        }
    }
}

/// Format an exact decimal as Brazilian Real, rounding half-up to two places.
///
/// The sign follows the input, so `-0.001` formats as `R$ -0,00`.
pub fn format_brl_decimal(value: Decimal) -> String {
    let rounded = value.round_half_up(2);
    let mut magnitude = rounded.abs().inner();
    magnitude.rescale(2);
    let rendered = magnitude.to_string();
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), "00"));

    assemble(value.is_negative(), int_part, frac_part)
}

fn assemble(negative: bool, int_part: &str, frac_part: &str) -> String {
    let sign = if negative { "-" } else { "" };
    format!(
        "{SYMBOL} {sign}{}{DECIMAL_SEPARATOR}{frac_part}",
        group_thousands(int_part)
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
    out
}
