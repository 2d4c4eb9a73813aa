//! Analytics report
//!
//! Runs every query once and gathers the results in one serializable value.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Category, Customer};

use super::engine::{CategoryStats, OrdersAnalytics};

/// Cart summary of one customer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub customer: Customer,
    pub cart_value: Decimal,
    pub projected_balance: Decimal,
}

/// Every statistic the engine computes, for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub top_spenders: Vec<Customer>,
    pub top_spenders_by_category: BTreeMap<Category, Vec<Customer>>,
    pub top_categories_by_age: BTreeMap<u32, Vec<Category>>,
    pub category_statistics: BTreeMap<Category, CategoryStats>,
    pub top_buyers_by_category: BTreeMap<Category, Vec<Customer>>,
    /// One entry per customer, in snapshot order
    pub carts: Vec<CartSummary>,
}

impl AnalyticsReport {
    pub fn build(engine: &OrdersAnalytics) -> Self {
        let top_spenders_by_category = Category::ALL
            .into_iter()
            .map(|category| (category, engine.customers_with_top_spend_in_category(category)))
            .collect();

        let values = engine.cart_value_per_customer();
        let balances = engine.projected_balances_after_checkout();
        let carts = engine
            .snapshot()
            .customers()
            .filter_map(|customer| {
                Some(CartSummary {
                    customer: customer.clone(),
                    cart_value: *values.get(customer)?,
                    projected_balance: *balances.get(customer)?,
                })
            })
            .collect();

        let report = Self {
            top_spenders: engine.customers_with_top_spend(),
            top_spenders_by_category,
            top_categories_by_age: engine.top_categories_by_customer_age(),
            category_statistics: engine.category_price_statistics(),
            top_buyers_by_category: engine.categories_with_top_buyers(),
            carts,
        };

        tracing::info!(
            "Report built: {} customers, {} categories with statistics",
            report.carts.len(),
            report.category_statistics.len()
        );
        report
    }

    /// Total value of every cart
    pub fn total_order_value(&self) -> Decimal {
        self.carts.iter().map(|c| c.cart_value).sum()
    }
}
