//! Money formatting

use rusty_money::{Money, iso::Currency};

/// Format a minor-unit amount for display.
///
/// Ringgit renders the way the storefront labels prices (`RM 12.00`); other
/// known currencies use their symbol and anything else falls back to the ISO
/// code as a suffix. Minor units are split by the currency's exponent, so
/// currencies without a minor unit have no fractional part.
pub fn format_price(minor_units: i64, currency: &Currency) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let amount = format_amount(minor_units.unsigned_abs(), currency.exponent);

    match currency.iso_alpha_code {
        "MYR" => format!("{sign}RM {amount}"),
        "GBP" => format!("{sign}£{amount}"),
        "USD" => format!("{sign}${amount}"),
        "EUR" => format!("{sign}€{amount}"),
        code => format!("{sign}{amount} {code}"),
    }
}

fn format_amount(abs_minor: u64, exponent: u32) -> String {
    let (Some(divisor), Ok(width)) = (10_u64.checked_pow(exponent), usize::try_from(exponent))
    else {
        return abs_minor.to_string();
    };

    if width == 0 {
        return abs_minor.to_string();
    }

    let major_units = abs_minor / divisor;
    let fractional = abs_minor % divisor;

    format!("{major_units}.{fractional:0width$}")
}

/// Format a money value for display.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format_price(money.to_minor_units(), money.currency())
}
