//! Product and Category
//!
//! Products are compared by every field: two products differing only in
//! price are distinct.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::{MoneyError, Price};

/// Product category
///
/// The set is closed and known at compile time. Declaration order is the
/// iteration and sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Home,
    Electronics,
    Kitchen,
    Rtv,
    Agd,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Home,
        Category::Electronics,
        Category::Kitchen,
        Category::Rtv,
        Category::Agd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Home => "HOME",
            Category::Electronics => "ELECTRONICS",
            Category::Kitchen => "KITCHEN",
            Category::Rtv => "RTV",
            Category::Agd => "AGD",
        }
    }
}

/// Category name not in the enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product offered in the shop
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    category: Category,
    price: Price,
}

impl Product {
    pub fn new(name: impl Into<String>, category: Category, price: Price) -> Self {
        Self {
            name: name.into(),
            category,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Cost of `quantity` units of this product
    pub fn cost_for(&self, quantity: u32) -> Result<Decimal, MoneyError> {
        self.price.times(quantity)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.category, self.price)
    }
}
