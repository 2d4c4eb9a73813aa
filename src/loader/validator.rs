//! Record validation
//!
//! Checks raw order records before any entity is built. Every field is
//! checked and every problem collected, so one pass reports all issues of a
//! record.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{parse_money, Category};

use super::records::{CustomerRecord, OrderRecord, ProductRecord};

/// Limits applied to incoming records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Youngest accepted customer
    pub min_age: u32,
    /// Longest accepted customer or product name, in characters
    pub name_max_length: usize,
    /// Most decimal places accepted in balances and prices
    pub money_max_scale: u32,
    /// Largest accepted balance or price
    pub money_max_value: Decimal,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_age: 18,
            name_max_length: 64,
            money_max_scale: 2,
            money_max_value: Decimal::from(1_000_000_000_000u64),
        }
    }
}

/// Problems found in one record, keyed by field path. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Merge `other`, prefixing its field names with `prefix`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for (field, messages) in other.0 {
            self.0
                .entry(format!("{prefix}.{field}"))
                .or_default()
                .extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl ValidationRules {
    pub fn validate_customer(&self, record: &CustomerRecord) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.check_person_name("name", &record.name, &mut errors);
        self.check_person_name("surname", &record.surname, &mut errors);

        if record.age < i64::from(self.min_age) {
            errors.push("age", format!("Age must be at least {}", self.min_age));
        } else if u32::try_from(record.age).is_err() {
            errors.push("age", "Age is out of range");
        }

        self.check_money("balance", &record.balance, &mut errors);
        errors
    }

    pub fn validate_product(&self, record: &ProductRecord) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let name = record.name.trim();
        if name.is_empty() {
            errors.push("name", "Name cannot be empty");
        } else if record.name.chars().count() > self.name_max_length {
            errors.push("name", format!("Name is longer than {} characters", self.name_max_length));
        } else if record.name.chars().any(char::is_control) {
            errors.push("name", "Name is not formatted correctly");
        }

        if record.category.parse::<Category>().is_err() {
            errors.push("category", "Category is not defined");
        }

        self.check_money("price", &record.price, &mut errors);
        errors
    }

    pub fn validate_record(&self, record: &OrderRecord) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.merge_prefixed("client", self.validate_customer(&record.client));
        for (i, product) in record.client_orders.iter().enumerate() {
            errors.merge_prefixed(&format!("client_orders[{i}]"), self.validate_product(product));
        }
        errors
    }

    fn check_person_name(&self, field: &str, value: &str, errors: &mut ValidationErrors) {
        let label = capitalize(field);
        if value.trim().is_empty() {
            errors.push(field, format!("{label} cannot be empty"));
        } else if value.chars().count() > self.name_max_length {
            errors.push(
                field,
                format!("{label} is longer than {} characters", self.name_max_length),
            );
        } else if !value
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\''))
        {
            errors.push(field, format!("{label} is not formatted correctly"));
        }
    }

    fn check_money(&self, field: &str, value: &str, errors: &mut ValidationErrors) {
        match parse_money(value, self.money_max_scale) {
            Err(e) => errors.push(field, format!("{} is not valid: {e}", capitalize(field))),
            Ok(amount) if amount > self.money_max_value => errors.push(
                field,
                format!("{} exceeds {}", capitalize(field), self.money_max_value),
            ),
            Ok(_) => {}
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn andrew() -> CustomerRecord {
        CustomerRecord {
            name: "ANDREW".to_string(),
            surname: "JOHNS".to_string(),
            age: 18,
            balance: "2000.00".to_string(),
        }
    }

    fn tv() -> ProductRecord {
        ProductRecord {
            name: "TV".to_string(),
            category: "ELECTRONICS".to_string(),
            price: "1200".to_string(),
        }
    }

    #[test]
    fn test_valid_customer() {
        let errors = ValidationRules::default().validate_customer(&andrew());
        assert!(errors.is_empty(), "unexpected errors: {errors}");
    }

    #[test]
    fn test_customer_collects_every_problem() {
        let record = CustomerRecord {
            name: "ANDREW1".to_string(),
            surname: "".to_string(),
            age: 17,
            balance: "12.345".to_string(),
        };

        let errors = ValidationRules::default().validate_customer(&record);

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["age", "balance", "name", "surname"]);
        assert_eq!(errors.get("name").unwrap(), ["Name is not formatted correctly"]);
        assert_eq!(errors.get("surname").unwrap(), ["Surname cannot be empty"]);
        assert_eq!(errors.get("age").unwrap(), ["Age must be at least 18"]);
    }

    #[test]
    fn test_customer_name_rules() {
        let rules = ValidationRules {
            name_max_length: 5,
            ..ValidationRules::default()
        };
        let record = CustomerRecord {
            name: "O'NEIL".to_string(),
            surname: "DE-LA".to_string(),
            ..andrew()
        };

        let errors = rules.validate_customer(&record);
        assert_eq!(errors.get("name").unwrap(), ["Name is longer than 5 characters"]);
        assert!(errors.get("surname").is_none());
    }

    #[test]
    fn test_customer_negative_balance() {
        let record = CustomerRecord {
            balance: "-1.00".to_string(),
            ..andrew()
        };

        let errors = ValidationRules::default().validate_customer(&record);
        assert!(errors.get("balance").is_some());
    }

    #[test]
    fn test_money_above_ceiling() {
        let rules = ValidationRules {
            money_max_value: Decimal::from(5000),
            ..ValidationRules::default()
        };
        let record = ProductRecord {
            price: "5000.01".to_string(),
            ..tv()
        };

        let errors = rules.validate_product(&record);
        assert_eq!(errors.get("price").unwrap(), ["Price exceeds 5000"]);
        assert!(rules
            .validate_product(&ProductRecord { price: "5000".to_string(), ..tv() })
            .is_empty());

        let customer = CustomerRecord {
            balance: "50000000000000000000000000000".to_string(),
            ..andrew()
        };
        let errors = ValidationRules::default().validate_customer(&customer);
        assert_eq!(errors.get("balance").unwrap(), ["Balance exceeds 1000000000000"]);
    }

    #[test]
    fn test_valid_product() {
        assert!(ValidationRules::default().validate_product(&tv()).is_empty());
    }

    #[test]
    fn test_product_unknown_category_and_bad_price() {
        let record = ProductRecord {
            name: " ".to_string(),
            category: "GARDEN".to_string(),
            price: "abc".to_string(),
        };

        let errors = ValidationRules::default().validate_product(&record);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["category", "name", "price"]);
    }

    #[test]
    fn test_record_prefixes_fields() {
        let record = OrderRecord {
            client: CustomerRecord { age: 5, ..andrew() },
            client_orders: vec![tv(), ProductRecord { price: "-3".to_string(), ..tv() }],
        };

        let errors = ValidationRules::default().validate_record(&record);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["client.age", "client_orders[1].price"]
        );
        assert!(errors.to_string().starts_with("client.age: Age must be at least 18"));
    }
}
