//! Loader module
//!
//! Reads order records from JSON, validates them and builds the order
//! snapshot handed to the analytics engine.

mod error;
pub mod records;
pub mod validator;

use std::path::Path;

use crate::domain::OrderSnapshot;

pub use error::LoadError;
pub use records::{CustomerRecord, OrderRecord, ProductRecord};
pub use validator::{ValidationErrors, ValidationRules};

/// Read the raw order records of a JSON file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Builds order snapshots from validated records
#[derive(Debug, Clone, Default)]
pub struct OrdersLoader {
    rules: ValidationRules,
}

impl OrdersLoader {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate every record, then build the snapshot.
    ///
    /// Nothing is loaded unless every record is valid. A record repeating an
    /// earlier customer identity replaces that customer's cart.
    pub fn load(&self, records: &[OrderRecord]) -> Result<OrderSnapshot, LoadError> {
        for (index, record) in records.iter().enumerate() {
            let errors = self.rules.validate_record(record);
            if !errors.is_empty() {
                tracing::warn!(index, "Rejected order record: {}", errors);
                return Err(LoadError::InvalidRecord { index, errors });
            }
        }

        let mut snapshot = OrderSnapshot::new();
        for record in records {
            let (customer, cart) = record.to_entry()?;
            let label = customer.to_string();
            if snapshot.insert_cart(customer, cart)?.is_some() {
                tracing::warn!("Duplicate customer {} replaced an earlier cart", label);
            }
        }

        tracing::info!(
            records = records.len(),
            customers = snapshot.len(),
            "Orders loaded"
        );
        Ok(snapshot)
    }

    /// Parse a JSON document and load it.
    pub fn load_str(&self, json: &str) -> Result<OrderSnapshot, LoadError> {
        let records: Vec<OrderRecord> = serde_json::from_str(json)?;
        self.load(&records)
    }

    /// Read a JSON file and load it.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<OrderSnapshot, LoadError> {
        let records = read_records(path)?;
        self.load(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Customer, DomainError, MoneyError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    const TWO_CUSTOMERS: &str = r#"[
        {
            "client": { "name": "ANDREW", "surname": "JOHNS", "age": 18, "balance": "2000.00" },
            "client_orders": [ { "name": "TV", "category": "ELECTRONICS", "price": "1200" } ]
        },
        {
            "client": { "name": "JULIA", "surname": "SMITH", "age": 22, "balance": "2000.00" },
            "client_orders": [ { "name": "DISHWASHER", "category": "AGD", "price": "2000" } ]
        }
    ]"#;

    #[test]
    fn test_load_str() {
        let snapshot = OrdersLoader::default().load_str(TWO_CUSTOMERS).unwrap();

        assert_eq!(snapshot.len(), 2);
        let julia = Customer::new("JULIA", "SMITH", 0, dec!(0));
        assert_eq!(snapshot.cart(&julia).unwrap().value(), dec!(2000));
    }

    #[test]
    fn test_load_empty_document() {
        let snapshot = OrdersLoader::default().load_str("[]").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_invalid_record_loads_nothing() {
        let json = TWO_CUSTOMERS.replace("\"age\": 22", "\"age\": 12");

        let err = OrdersLoader::default().load_str(&json).unwrap_err();
        match err {
            LoadError::InvalidRecord { index, errors } => {
                assert_eq!(index, 1);
                assert!(errors.get("client.age").is_some());
            }
            other => panic!("Expected InvalidRecord, got: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = OrdersLoader::default().load_str("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.is_data_error());

        // wrong field type
        let err = OrdersLoader::default()
            .load_str(&TWO_CUSTOMERS.replace("\"age\": 18", "\"age\": \"18\""))
            .unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = OrdersLoader::default()
            .load_file("/definitely/not/here/orders.json")
            .unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_duplicate_identity_replaces_cart() {
        let json = TWO_CUSTOMERS.replace("JULIA", "ANDREW").replace("SMITH", "JOHNS");

        let snapshot = OrdersLoader::default().load_str(&json).unwrap();
        assert_eq!(snapshot.len(), 1);

        let (customer, cart) = snapshot.iter().next().unwrap();
        assert_eq!(customer.age(), 18);
        assert_eq!(cart.value(), dec!(2000));
    }

    const HUGE_PRICES: &str = r#"[
        {
            "client": { "name": "ANDREW", "surname": "JOHNS", "age": 18, "balance": "2000.00" },
            "client_orders": [
                { "name": "TV", "category": "ELECTRONICS", "price": "50000000000000000000000000000" },
                { "name": "TV", "category": "ELECTRONICS", "price": "50000000000000000000000000000" }
            ]
        }
    ]"#;

    #[test]
    fn test_price_above_ceiling_is_rejected() {
        let err = OrdersLoader::default().load_str(HUGE_PRICES).unwrap_err();

        match err {
            LoadError::InvalidRecord { index, errors } => {
                assert_eq!(index, 0);
                assert_eq!(
                    errors.fields().collect::<Vec<_>>(),
                    vec!["client_orders[0].price", "client_orders[1].price"]
                );
            }
            other => panic!("Expected InvalidRecord, got: {:?}", other),
        }
    }

    #[test]
    fn test_cart_overflow_is_an_error_without_ceiling() {
        let rules = ValidationRules {
            money_max_value: Decimal::MAX,
            ..ValidationRules::default()
        };

        let err = OrdersLoader::new(rules).load_str(HUGE_PRICES).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Domain(DomainError::InvalidMoney(MoneyError::Overflow))
        ));
        assert!(err.is_data_error());
    }

    #[test]
    fn test_custom_rules() {
        let rules = ValidationRules {
            min_age: 21,
            ..ValidationRules::default()
        };

        let err = OrdersLoader::new(rules).load_str(TWO_CUSTOMERS).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRecord { index: 0, .. }));
    }
}
