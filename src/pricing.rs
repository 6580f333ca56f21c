//! Prices

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{cart::CartLine, products::ProductId};

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No lines were provided, so currency could not be determined.
    #[error("no lines provided; cannot determine currency")]
    NoItems,

    /// Unit price × quantity does not fit in minor units.
    #[error("line total for product {0} overflowed")]
    QuantityOverflow(ProductId),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates unit price × quantity for a single line.
///
/// # Errors
///
/// Returns [`TotalPriceError::QuantityOverflow`] if the product does not fit in minor units.
pub fn line_total<'a>(line: &CartLine<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    let unit_price = line.unit_price();

    let minor_units = unit_price
        .to_minor_units()
        .checked_mul(i64::from(line.quantity()))
        .ok_or(TotalPriceError::QuantityOverflow(line.id()))?;

    Ok(Money::from_minor(minor_units, unit_price.currency()))
}

/// Calculates the total price of a list of lines
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: No lines were provided, so currency could not be determined.
/// - [`TotalPriceError::QuantityOverflow`]: A line total does not fit in minor units.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(lines: &[CartLine<'a>]) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = lines.first().ok_or(TotalPriceError::NoItems)?;

    lines.iter().try_fold(
        Money::from_minor(0, first.unit_price().currency()),
        |acc, line| Ok(acc.add(line_total(line)?)?),
    )
}
