//! Customer entity
//!
//! A customer is identified by name and surname only. Age and balance are
//! attributes: two customers with the same name and surname are the same
//! ledger key even when their age or balance differ.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Customer placing orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    surname: String,
    age: u32,
    balance: Decimal,
}

impl Customer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, age: u32, balance: Decimal) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            age,
            balance,
        }
    }

    /// Identity key used wherever a customer is placed in an associative
    /// container. `PartialEq` and `Hash` are both defined on top of it.
    pub fn identity(&self) -> (&str, &str) {
        (&self.name, &self.surname)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance left after spending `spent`. May be negative.
    ///
    /// `None` when the result does not fit in a Decimal.
    pub fn balance_after_spending(&self, spent: Decimal) -> Option<Decimal> {
        self.balance.checked_sub(spent)
    }

    /// Structural comparison including the non-identity attributes.
    pub fn same_attributes(&self, other: &Customer) -> bool {
        self == other && self.age == other.age && self.balance == other.balance
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    #[test]
    fn test_identity_ignores_age_and_balance() {
        let jack = Customer::new("JACK", "SPARROW", 24, dec!(22000.00));
        let ghost = Customer::new("JACK", "SPARROW", 18, dec!(1.00));

        assert_eq!(jack, ghost);
        assert!(!jack.same_attributes(&ghost));
    }

    #[test]
    fn test_different_surname_is_different_customer() {
        let a = Customer::new("JACK", "SPARROW", 24, dec!(0));
        let b = Customer::new("JACK", "SMITH", 24, dec!(0));

        assert_ne!(a, b);
    }

    #[test]
    fn test_identity_collapses_map_keys() {
        let mut map = HashMap::new();
        map.insert(Customer::new("JACK", "SPARROW", 24, dec!(22000)), 1);
        map.insert(Customer::new("JACK", "SPARROW", 18, dec!(5)), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&Customer::new("JACK", "SPARROW", 99, dec!(0))], 2);
    }

    #[test]
    fn test_balance_after_spending_can_go_negative() {
        let andrew = Customer::new("ANDREW", "JOHNS", 18, dec!(2000.00));

        assert_eq!(andrew.balance_after_spending(dec!(7600)), Some(dec!(-5600)));
        assert_eq!(andrew.balance_after_spending(dec!(2000)), Some(dec!(0)));
        assert_eq!(andrew.balance_after_spending(-Decimal::MAX), None);
    }
}
