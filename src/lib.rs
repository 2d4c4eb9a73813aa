//! orders_analytics Library
//!
//! Descriptive statistics over an in-memory order ledger: top spenders,
//! popular categories per age, category price statistics and top buyers.

pub mod analytics;
pub mod config;
pub mod domain;
pub mod loader;
pub mod telemetry;

mod error;

pub use analytics::{AnalyticsReport, CategoryStats, OrdersAnalytics};
pub use config::{Config, ConfigError, LogFormat};
pub use domain::{Cart, Category, Customer, DomainError, OrderSnapshot, Price, Product};
pub use error::{AppError, AppResult};
pub use loader::{LoadError, OrdersLoader, ValidationRules};
