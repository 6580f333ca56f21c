//! Discounts
//!
//! A static table of discount codes. Codes match case-insensitively and each
//! maps to either a percentage of the subtotal or a flat amount off.

use std::{fmt, fs, path::Path};

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::fixtures::{FixtureError, discounts::DiscountsFixture};

const BRATSTVO_DISCOUNTS_YAML: &str = include_str!("../fixtures/discounts/bratstvo.yml");

/// Errors specific to discount calculations.
#[derive(Debug, Error)]
pub enum DiscountError {
    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A discount code, normalised to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscountCode(String);

impl DiscountCode {
    /// Normalise raw user input into a code.
    pub fn new(code: &str) -> Self {
        Self(code.to_uppercase())
    }

    /// The normalised code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a discount code takes off the subtotal.
#[derive(Debug, Copy, Clone)]
pub enum DiscountRule<'a> {
    /// A percentage of the subtotal (e.g., "10% off")
    Percentage(Percentage),

    /// A fixed amount off (e.g., "RM5 off"), not capped to the subtotal
    Flat(Money<'a, Currency>),
}

impl<'a> DiscountRule<'a> {
    /// Calculate the discount amount for a subtotal.
    ///
    /// Flat amounts are returned as-is, even when larger than the subtotal;
    /// clamping happens when the total is derived.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a percentage cannot be safely represented in minor units
    ///   (`DiscountError::PercentConversion`).
    /// - a flat amount is in a different currency from the subtotal (`DiscountError::Money`).
    pub fn discount_on(
        &self,
        subtotal: &Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        match self {
            DiscountRule::Percentage(percent) => {
                let discount_minor = percent_of_minor(percent, subtotal.to_minor_units())?;

                Ok(Money::from_minor(discount_minor, subtotal.currency()))
            }
            DiscountRule::Flat(amount) => {
                if amount.currency() != subtotal.currency() {
                    return Err(DiscountError::Money(MoneyError::CurrencyMismatch {
                        expected: subtotal.currency().iso_alpha_code,
                        actual: amount.currency().iso_alpha_code,
                    }));
                }

                Ok(*amount)
            }
        }
    }
}

/// Calculate the discount amount in minor units based on a percentage and a minor unit amount.
///
/// # Errors
///
/// Returns an error if the percentage calculation overflows or cannot be safely represented
/// (`DiscountError::PercentConversion`).
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, DiscountError> {
    let minor = Decimal::from_i64(minor).ok_or(DiscountError::PercentConversion)?;

    ((*percent) * Decimal::ONE) // decimal_percentage doesn't expose the underlying Decimal
        .checked_mul(minor)
        .ok_or(DiscountError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(DiscountError::PercentConversion)
}

/// How the code currently typed into the checkout form resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountStatus {
    /// The code field is empty.
    NotEntered,

    /// The code matches a rule.
    Applied(DiscountCode),

    /// The code is non-empty and matches nothing; checkout still proceeds at full price.
    Invalid,
}

impl DiscountStatus {
    /// Whether the view should show the invalid-code hint.
    pub fn is_invalid(&self) -> bool {
        matches!(self, DiscountStatus::Invalid)
    }

    /// The matched code, if any.
    pub fn applied_code(&self) -> Option<&DiscountCode> {
        match self {
            DiscountStatus::Applied(code) => Some(code),
            DiscountStatus::NotEntered | DiscountStatus::Invalid => None,
        }
    }
}

/// Static code -> rule lookup table
#[derive(Debug, Clone, Default)]
pub struct DiscountTable<'a> {
    rules: FxHashMap<DiscountCode, DiscountRule<'a>>,
}

impl<'a> DiscountTable<'a> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning any rule previously stored under the same code.
    pub fn insert(&mut self, code: &str, rule: DiscountRule<'a>) -> Option<DiscountRule<'a>> {
        self.rules.insert(DiscountCode::new(code), rule)
    }

    /// Parse a discounts fixture, pricing flat rules in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid, a rule cannot be parsed, or two
    /// codes differ only by case.
    pub fn from_yaml(yaml: &str, currency: &'a Currency) -> Result<Self, FixtureError> {
        let fixture: DiscountsFixture = serde_norway::from_str(yaml)?;

        let mut table = Self::new();

        for (code, rule_fixture) in fixture.discounts {
            let rule = rule_fixture.into_rule(currency)?;

            if table.insert(&code, rule).is_some() {
                return Err(FixtureError::DuplicateDiscountCode(code));
            }
        }

        Ok(table)
    }

    /// Load a discounts fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>, currency: &'a Currency) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents, currency)
    }

    /// The Bratstvo Store codes bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture fails to parse or is not in `currency`.
    pub fn bratstvo(currency: &'a Currency) -> Result<Self, FixtureError> {
        Self::from_yaml(BRATSTVO_DISCOUNTS_YAML, currency)
    }

    /// Case-insensitive exact match of raw input against the table.
    pub fn lookup(&self, input: &str) -> Option<(DiscountCode, &DiscountRule<'a>)> {
        let code = DiscountCode::new(input);

        self.rules.get(&code).map(|rule| (code, rule))
    }

    /// Resolve raw input into a status for the view.
    pub fn status(&self, input: &str) -> DiscountStatus {
        if input.is_empty() {
            return DiscountStatus::NotEntered;
        }

        self.lookup(input)
            .map_or(DiscountStatus::Invalid, |(code, _rule)| {
                DiscountStatus::Applied(code)
            })
    }

    /// Discount for raw input against a subtotal. Unmatched input discounts nothing.
    ///
    /// # Errors
    ///
    /// Returns a [`DiscountError`] if the matched rule cannot be applied.
    pub fn discount_for(
        &self,
        input: &str,
        subtotal: &Money<'a, Currency>,
    ) -> Result<Money<'a, Currency>, DiscountError> {
        match self.lookup(input) {
            Some((_code, rule)) => rule.discount_on(subtotal),
            None => Ok(Money::from_minor(0, subtotal.currency())),
        }
    }

    /// Codes in the table, sorted.
    pub fn codes(&self) -> Vec<&DiscountCode> {
        let mut codes: Vec<&DiscountCode> = self.rules.keys().collect();

        codes.sort_by(|left, right| left.as_str().cmp(right.as_str()));

        codes
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
