//! Discount Fixtures

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    discounts::DiscountRule,
    fixtures::{FixtureError, parse_percentage, parse_price},
};

/// Wrapper for discount codes in YAML
#[derive(Debug, Deserialize)]
pub struct DiscountsFixture {
    /// Map of code -> rule fixture
    pub discounts: FxHashMap<String, DiscountFixture>,
}

/// Discount rule fixture, e.g. `{ type: percentage, value: "10%" }`
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DiscountFixture {
    /// Percentage of the subtotal ("10%" or "0.10")
    Percentage(String),

    /// Fixed amount off ("5.00 MYR")
    Flat(String),
}

impl DiscountFixture {
    /// Convert into a rule priced in the catalog currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be parsed, a flat amount is
    /// negative, or a flat amount is not in `currency`.
    pub fn into_rule(self, currency: &Currency) -> Result<DiscountRule<'_>, FixtureError> {
        match self {
            DiscountFixture::Percentage(value) => {
                Ok(DiscountRule::Percentage(parse_percentage(&value)?))
            }
            DiscountFixture::Flat(value) => {
                let (minor_units, parsed_currency) = parse_price(&value)?;

                if parsed_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        parsed_currency.iso_alpha_code.to_string(),
                    ));
                }

                if minor_units < 0 {
                    return Err(FixtureError::InvalidPrice(value));
                }

                Ok(DiscountRule::Flat(Money::from_minor(minor_units, currency)))
            }
        }
    }
}
