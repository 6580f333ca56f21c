//! Product Fixtures

use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_price},
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id, unique within the fixture
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "12.00 MYR")
    pub price: String,

    /// Product image URL
    pub image: String,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let id = ProductId::new(fixture.id);
        let (minor_units, currency) = parse_price(&fixture.price)?;

        if minor_units < 0 {
            return Err(FixtureError::NegativePrice(id));
        }

        Ok(Product {
            id,
            name: fixture.name,
            price: Money::from_minor(minor_units, currency),
            image: fixture.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::MYR;
    use testresult::TestResult;

    use super::*;

    fn fixture(price: &str) -> ProductFixture {
        ProductFixture {
            id: 2,
            name: "Roti Bakar".to_string(),
            price: price.to_string(),
            image: "roti.png".to_string(),
        }
    }

    #[test]
    fn converts_into_product() -> TestResult {
        let product = Product::try_from(fixture("8.50 MYR"))?;

        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.name, "Roti Bakar");
        assert_eq!(product.price, Money::from_minor(850, MYR));
        assert_eq!(product.image, "roti.png");

        Ok(())
    }

    #[test]
    fn rejects_negative_price() {
        assert!(matches!(
            Product::try_from(fixture("-1.00 MYR")),
            Err(FixtureError::NegativePrice(id)) if id == ProductId::new(2)
        ));
    }

    #[test]
    fn deserializes_from_yaml() -> TestResult {
        let yaml = r#"
products:
  - id: 1
    name: "Kopi Susu"
    price: "12.00 MYR"
    image: "kopi.png"
"#;

        let parsed: ProductsFixture = serde_norway::from_str(yaml)?;

        assert_eq!(parsed.products.len(), 1);
        assert_eq!(
            parsed.products.first().map(|product| product.name.as_str()),
            Some("Kopi Susu")
        );

        Ok(())
    }
}
