//! Receipt
//!
//! Priced view of a cart: subtotal, discount and the clamped total.

use std::io;

use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLine},
    discounts::{DiscountCode, DiscountError, DiscountTable},
    money::format_money,
    pricing::TotalPriceError,
};

/// Label shown in place of a discount code when none applies.
pub const NO_DISCOUNT_LABEL: &str = "Tiada";

/// Errors that can occur when building a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating the subtotal from cart lines.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Error applying the discount rule.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Subtotal, discount and total for a cart and discount code.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<'a> {
    /// Sum of unit price × quantity
    subtotal: Money<'a, Currency>,

    /// Amount the matched rule takes off, uncapped
    discount: Money<'a, Currency>,

    /// `max(0, subtotal - discount)`
    total: Money<'a, Currency>,

    /// The code that matched, if any
    applied_code: Option<DiscountCode>,
}

impl<'a> Receipt<'a> {
    /// Create a receipt, deriving the total and clamping it at zero.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError::CurrencyMismatch`] if the amounts are in different currencies.
    pub fn new(
        subtotal: Money<'a, Currency>,
        discount: Money<'a, Currency>,
        applied_code: Option<DiscountCode>,
    ) -> Result<Self, MoneyError> {
        if subtotal.currency() != discount.currency() {
            return Err(MoneyError::CurrencyMismatch {
                expected: subtotal.currency().iso_alpha_code,
                actual: discount.currency().iso_alpha_code,
            });
        }

        let total_minor = subtotal
            .to_minor_units()
            .saturating_sub(discount.to_minor_units())
            .max(0);

        Ok(Self {
            subtotal,
            discount,
            total: Money::from_minor(total_minor, subtotal.currency()),
            applied_code,
        })
    }

    /// Price a cart against the discount table using the raw code input.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if the subtotal or discount cannot be calculated.
    pub fn price(
        cart: &Cart<'a>,
        discounts: &DiscountTable<'a>,
        code_input: &str,
    ) -> Result<Self, ReceiptError> {
        let subtotal = cart.subtotal()?;

        let (discount, applied_code) = match discounts.lookup(code_input) {
            Some((code, rule)) => (rule.discount_on(&subtotal)?, Some(code)),
            None => (Money::from_minor(0, cart.currency()), None),
        };

        Ok(Self::new(subtotal, discount, applied_code)?)
    }

    /// Total cost before the discount
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Amount the discount rule takes off
    pub fn discount(&self) -> Money<'a, Currency> {
        self.discount
    }

    /// Amount to pay, never negative
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// The matched discount code
    pub fn applied_code(&self) -> Option<&DiscountCode> {
        self.applied_code.as_ref()
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'a Currency {
        self.subtotal.currency()
    }

    /// Savings actually realised, `subtotal - total`.
    ///
    /// Differs from [`Receipt::discount`] when a flat discount exceeds the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Label for the discount row: the applied code, or "Tiada".
    pub fn discount_label(&self) -> &str {
        self.applied_code
            .as_ref()
            .map_or(NO_DISCOUNT_LABEL, DiscountCode::as_str)
    }

    /// Writes the lines and totals as a table.
    ///
    /// # Errors
    ///
    /// Returns an error if a line total cannot be calculated or the output cannot be written.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        lines: &[CartLine<'_>],
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["#", "Item", "Kuantiti", "Harga Seunit", "Jumlah"]);

        for (idx, line) in lines.iter().enumerate() {
            builder.push_record([
                format!("{}", idx + 1),
                line.name().to_string(),
                line.quantity().to_string(),
                format_money(line.unit_price()),
                format_money(&line.total()?),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..5), Alignment::right());

        writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let rows = [
            ("Jumlah Kecil:".to_string(), format_money(&self.subtotal)),
            (
                format!("Diskaun ({}):", self.discount_label()),
                format!("- {}", format_money(&self.discount)),
            ),
            ("Jumlah Keseluruhan:".to_string(), format_money(&self.total)),
        ];

        let label_width = rows
            .iter()
            .map(|(label, _value)| label.chars().count())
            .max()
            .unwrap_or_default();

        for (label, value) in rows {
            writeln!(out, " {label:<label_width$}  {value}").map_err(|_err| ReceiptError::IO)?;
        }

        Ok(())
    }
}
