//! Customer details collected on the checkout form.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;
use thiserror::Error;

/// Error parsing a form field name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown customer field: {0}")]
pub struct UnknownCustomerField(String);

/// A required checkout form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    /// Full name
    Name,

    /// Email address
    Email,

    /// Phone number
    Phone,

    /// Delivery address
    Address,
}

impl CustomerField {
    /// Fields in form order.
    pub const ALL: [CustomerField; 4] = [
        CustomerField::Name,
        CustomerField::Email,
        CustomerField::Phone,
        CustomerField::Address,
    ];

    /// Form input name.
    pub const fn as_str(self) -> &'static str {
        match self {
            CustomerField::Name => "name",
            CustomerField::Email => "email",
            CustomerField::Phone => "phone",
            CustomerField::Address => "address",
        }
    }

    /// Form label.
    pub const fn label(self) -> &'static str {
        match self {
            CustomerField::Name => "Nama Penuh",
            CustomerField::Email => "E-mel",
            CustomerField::Phone => "Nombor Telefon",
            CustomerField::Address => "Alamat Penghantaran",
        }
    }
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerField {
    type Err = UnknownCustomerField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownCustomerField(s.to_string()))
    }
}

/// Name, email, phone and delivery address. All required, none format-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Delivery address
    pub address: String,

    /// Phone number
    pub phone: String,
}

impl CustomerInfo {
    /// Read a field.
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::Address => &self.address,
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let slot = match field {
            CustomerField::Name => &mut self.name,
            CustomerField::Email => &mut self.email,
            CustomerField::Phone => &mut self.phone,
            CustomerField::Address => &mut self.address,
        };

        *slot = value.into();
    }

    /// Empty fields, in form order.
    pub fn missing_fields(&self) -> SmallVec<[CustomerField; 4]> {
        CustomerField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Whether every field has a value.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn complete() -> CustomerInfo {
        CustomerInfo {
            name: "Aisyah".to_string(),
            email: "aisyah@contoh.com".to_string(),
            address: "12 Jalan Bunga, Kuala Lumpur".to_string(),
            phone: "012-3456789".to_string(),
        }
    }

    #[test]
    fn default_is_missing_everything() {
        let info = CustomerInfo::default();

        assert_eq!(info.missing_fields().as_slice(), CustomerField::ALL);
        assert!(!info.is_complete());
    }

    #[test]
    fn complete_info_has_no_missing_fields() {
        assert!(complete().is_complete());
    }

    #[test]
    fn missing_fields_in_form_order() {
        let mut info = complete();

        info.set(CustomerField::Address, "");
        info.set(CustomerField::Name, "");

        assert_eq!(
            info.missing_fields().as_slice(),
            [CustomerField::Name, CustomerField::Address]
        );
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut info = complete();

        info.set(CustomerField::Phone, " ");

        assert!(info.is_complete());
    }

    #[test]
    fn set_then_get() {
        let mut info = CustomerInfo::default();

        info.set(CustomerField::Email, "a@b.c");

        assert_eq!(info.get(CustomerField::Email), "a@b.c");
        assert_eq!(info.email, "a@b.c");
    }

    #[test]
    fn clear_resets() {
        let mut info = complete();

        info.clear();

        assert_eq!(info, CustomerInfo::default());
    }

    #[test]
    fn field_from_form_name() -> TestResult {
        assert_eq!("phone".parse::<CustomerField>()?, CustomerField::Phone);
        assert_eq!(
            "postcode".parse::<CustomerField>(),
            Err(UnknownCustomerField("postcode".to_string()))
        );

        Ok(())
    }

    #[test]
    fn field_labels() {
        assert_eq!(CustomerField::Address.label(), "Alamat Penghantaran");
        assert_eq!(CustomerField::Email.to_string(), "email");
    }
}
