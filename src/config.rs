//! Store configuration
//!
//! A named fixture set: catalog plus discount codes, either bundled or read from
//! `fixtures/products/<set>.yml` and `fixtures/discounts/<set>.yml`.

use std::path::Path;

use tracing::info;

use crate::{catalog::Catalog, discounts::DiscountTable, fixtures::FixtureError, store::Store};

/// Display name of the bundled store.
pub const BRATSTVO_STORE_NAME: &str = "Bratstvo Store";

/// Catalog and discount codes for one store.
#[derive(Debug, Clone)]
pub struct StoreConfig<'a> {
    /// Store name shown in the header
    pub name: String,

    /// Products for sale
    pub catalog: Catalog<'a>,

    /// Discount codes, priced in the catalog currency
    pub discounts: DiscountTable<'a>,
}

impl StoreConfig<'static> {
    /// The bundled Bratstvo Store fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled fixture fails to parse.
    pub fn bratstvo() -> Result<Self, FixtureError> {
        let catalog = Catalog::bratstvo()?;
        let discounts = DiscountTable::bratstvo(catalog.currency())?;

        Ok(Self {
            name: BRATSTVO_STORE_NAME.to_string(),
            catalog,
            discounts,
        })
    }

    /// Load a fixture set from a fixtures directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either fixture file cannot be read or parsed.
    pub fn load(base_path: impl AsRef<Path>, set: &str) -> Result<Self, FixtureError> {
        let base_path = base_path.as_ref();

        let catalog = Catalog::load(base_path.join("products").join(format!("{set}.yml")))?;
        let discounts = DiscountTable::load(
            base_path.join("discounts").join(format!("{set}.yml")),
            catalog.currency(),
        )?;

        info!(
            set,
            products = catalog.len(),
            codes = discounts.len(),
            "loaded fixtures"
        );

        Ok(Self {
            name: set.to_string(),
            catalog,
            discounts,
        })
    }
}

impl<'a> StoreConfig<'a> {
    /// Build a fresh store from this configuration.
    pub fn into_store(self) -> Store<'a> {
        Store::new(self.catalog, self.discounts)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn bundled_config() -> TestResult {
        let config = StoreConfig::bratstvo()?;

        assert_eq!(config.name, "Bratstvo Store");
        assert_eq!(config.catalog.len(), 5);
        assert_eq!(config.discounts.len(), 4);

        Ok(())
    }

    #[test]
    fn load_from_directory() -> TestResult {
        let dir = tempfile::tempdir()?;

        fs::create_dir_all(dir.path().join("products"))?;
        fs::create_dir_all(dir.path().join("discounts"))?;

        fs::write(
            dir.path().join("products/kedai.yml"),
            "products:\n  - id: 1\n    name: Teh Tarik\n    price: \"3.50 MYR\"\n    image: teh.png\n",
        )?;
        fs::write(
            dir.path().join("discounts/kedai.yml"),
            "discounts:\n  SEDAP:\n    type: flat\n    value: \"1.00 MYR\"\n",
        )?;

        let config = StoreConfig::load(dir.path(), "kedai")?;

        assert_eq!(config.name, "kedai");
        assert_eq!(config.catalog.len(), 1);
        assert!(config.discounts.lookup("sedap").is_some());

        Ok(())
    }

    #[test]
    fn load_missing_set_fails() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = StoreConfig::load(dir.path(), "none");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }
}
