//! Orders
//!
//! An order is an immutable snapshot of the cart, customer and receipt taken
//! when checkout succeeds.

use std::{fmt, io};

use jiff::Timestamp;
use rand::Rng;

use crate::{
    cart::CartLine,
    customer::{CustomerField, CustomerInfo},
    receipt::{Receipt, ReceiptError},
};

/// Order identifier, `ORD-{unix millis}-{0..=999}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Derive an id from the placement time and a random suffix.
    pub fn generate<R: Rng + ?Sized>(now: Timestamp, rng: &mut R) -> Self {
        let suffix: u16 = rng.gen_range(0..1000);

        OrderId(format!("ORD-{}-{suffix}", now.as_millisecond()))
    }

    /// The id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the customer pays. Only cash on delivery is offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Cash on delivery
    #[default]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Label shown to the customer.
    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => {
                "Pembayaran Tunai Semasa Penghantaran (Cash on Delivery)"
            }
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    id: OrderId,
    lines: Vec<CartLine<'a>>,
    customer: CustomerInfo,
    receipt: Receipt<'a>,
    placed_at: Timestamp,
    payment: PaymentMethod,
}

impl<'a> Order<'a> {
    /// Freeze the given lines, customer and receipt into an order.
    pub fn new(
        id: OrderId,
        lines: Vec<CartLine<'a>>,
        customer: CustomerInfo,
        receipt: Receipt<'a>,
        placed_at: Timestamp,
    ) -> Self {
        Self {
            id,
            lines,
            customer,
            receipt,
            placed_at,
            payment: PaymentMethod::CashOnDelivery,
        }
    }

    /// Order id
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Ordered lines, in cart order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Customer details at the time of ordering.
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Subtotal, discount and total.
    pub fn receipt(&self) -> &Receipt<'a> {
        &self.receipt
    }

    /// When the order was placed.
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// Payment method
    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    /// Placement time as `YYYY-MM-DD HH:MM:SS UTC`.
    pub fn placed_at_display(&self) -> String {
        format!("{} UTC", self.placed_at.strftime("%Y-%m-%d %H:%M:%S"))
    }

    /// Writes the confirmation: id, customer details, lines and totals.
    ///
    /// # Errors
    ///
    /// Returns an error if a line total cannot be calculated or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "Nombor Pesanan: {}", self.id).map_err(|_err| ReceiptError::IO)?;
        writeln!(out, "Tarikh Pesanan: {}", self.placed_at_display())
            .map_err(|_err| ReceiptError::IO)?;

        for field in CustomerField::ALL {
            writeln!(out, "{}: {}", field.label(), self.customer.get(field))
                .map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(out, "Kaedah Pembayaran: {}", self.payment.label())
            .map_err(|_err| ReceiptError::IO)?;
        writeln!(out).map_err(|_err| ReceiptError::IO)?;

        self.receipt.write_to(&mut out, &self.lines)
    }
}
