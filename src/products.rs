//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};

/// Placeholder shown on the product grid when a product image fails to load.
pub const IMAGE_FALLBACK_URL: &str =
    "https://placehold.co/150x150/dbeafe/1e40af?text=Tiada+Gambar";

/// Placeholder shown on cart thumbnails when a product image fails to load.
pub const THUMBNAIL_FALLBACK_URL: &str = "https://placehold.co/64x64/e0f2fe/0369a1?text=Img";

/// Catalog product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u32);

impl ProductId {
    /// Wrap a raw product id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'a, Currency>,

    /// Image URL
    pub image: String,
}

impl<'a> Product<'a> {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;

    use super::*;

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId::new(42).to_string(), "42");
        assert_eq!(ProductId::from(7).get(), 7);
    }

    #[test]
    fn new_product_converts_fields() {
        let product = Product::new(1, "Kopi Susu", Money::from_minor(1200, iso::MYR), "kopi.png");

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Kopi Susu");
        assert_eq!(product.price, Money::from_minor(1200, iso::MYR));
        assert_eq!(product.image, "kopi.png");
    }
}
