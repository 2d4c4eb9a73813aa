//! Domain module
//!
//! Entities, money primitives and the order snapshot consumed by the
//! analytics engine.

pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod snapshot;

pub use customer::Customer;
pub use error::{DomainError, DomainResult};
pub use money::{parse_money, MoneyError, Price};
pub use product::{Category, Product, UnknownCategory};
pub use snapshot::{Cart, OrderSnapshot};
