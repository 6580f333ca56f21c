//! Catalog
//!
//! The immutable, ordered product list the storefront sells from.

use std::{fs, path::Path};

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;

use crate::{
    fixtures::{FixtureError, products::ProductsFixture},
    products::{Product, ProductId},
};

const BRATSTVO_PRODUCTS_YAML: &str = include_str!("../fixtures/products/bratstvo.yml");

/// Product catalog
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    currency: &'a Currency,
}

impl<'a> Catalog<'a> {
    /// Build a catalog from products, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no products, two products share an id,
    /// or the products are not all priced in the same currency.
    pub fn with_products(products: Vec<Product<'a>>) -> Result<Self, FixtureError> {
        let currency = products
            .first()
            .map(|product| product.price.currency())
            .ok_or(FixtureError::NoProducts)?;

        let mut seen = FxHashSet::default();

        for product in &products {
            if !seen.insert(product.id) {
                return Err(FixtureError::DuplicateProductId(product.id));
            }

            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(FixtureError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    product_currency.iso_alpha_code.to_string(),
                ));
            }
        }

        Ok(Self { products, currency })
    }

    /// Parse a products fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or any product fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_products(products)
    }

    /// Load a products fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// The Bratstvo Store menu bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture fails to parse.
    pub fn bratstvo() -> Result<Self, FixtureError> {
        Self::from_yaml(BRATSTVO_PRODUCTS_YAML)
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product<'a>] {
        &self.products
    }

    /// Iterate over products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a validated catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }
}
