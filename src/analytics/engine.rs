//! Orders Analytics Engine
//!
//! Read-only statistics over an order snapshot. Every query recomputes its
//! aggregate from the snapshot; nothing is cached between calls.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Category, Customer, OrderSnapshot, Product};

use super::tally::Tally;
use super::tie_break::{leading_equal_run_by, top_count};

/// Price statistics of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    /// Mean price of the distinct products seen in the category
    pub mean_price: Decimal,
    /// Every product sharing the highest price
    pub most_expensive: Vec<Product>,
    /// Every product sharing the lowest price
    pub cheapest: Vec<Product>,
}

/// Analytics engine owning one order snapshot
#[derive(Debug, Clone, Default)]
pub struct OrdersAnalytics {
    snapshot: OrderSnapshot,
}

/// Keys tied for the top value of a ranking (sorted descending).
fn leaders<K, V: PartialEq>(ranked: Vec<(K, V)>) -> Vec<K> {
    // an empty ranking has no leaders
    let winners = top_count(&ranked).unwrap_or(0);
    ranked.into_iter().take(winners).map(|(key, _)| key).collect()
}

impl OrdersAnalytics {
    pub fn new(snapshot: OrderSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &OrderSnapshot {
        &self.snapshot
    }

    /// Give the snapshot back to the caller
    pub fn into_snapshot(self) -> OrderSnapshot {
        self.snapshot
    }

    // =========================================================================
    // Spend rankings
    // =========================================================================

    /// Customers tied for the highest total spend, in snapshot order.
    pub fn customers_with_top_spend(&self) -> Vec<Customer> {
        if self.snapshot.is_empty() {
            return Vec::new();
        }

        let mut spend = Tally::new();
        for (customer, cart) in self.snapshot.iter() {
            spend.add(customer, cart.value());
        }

        let winners: Vec<Customer> = leaders(spend.into_ranked()).into_iter().cloned().collect();
        tracing::debug!("Top spenders: {} of {} customers", winners.len(), self.snapshot.len());
        winners
    }

    /// Customers tied for the highest spend on products of `category`.
    ///
    /// Returns nothing when nobody spent anything in the category.
    pub fn customers_with_top_spend_in_category(&self, category: Category) -> Vec<Customer> {
        if self.snapshot.is_empty() {
            return Vec::new();
        }

        let mut spend = Tally::new();
        for (customer, cart) in self.snapshot.iter() {
            spend.touch(customer);
            for (product, _, cost) in cart.priced_lines() {
                if product.category() == category {
                    spend.add(customer, cost);
                }
            }
        }

        let ranked = spend.into_ranked();
        if ranked.first().map_or(true, |(_, top)| top.is_zero()) {
            tracing::debug!("No spend in category {}", category);
            return Vec::new();
        }

        let winners: Vec<Customer> = leaders(ranked).into_iter().cloned().collect();
        tracing::debug!("Top spenders in {}: {}", category, winners.len());
        winners
    }

    // =========================================================================
    // Category rankings
    // =========================================================================

    /// Most frequent categories per customer age.
    ///
    /// Each product line contributes one occurrence of its category to the
    /// owner's age. Ages without any product line are not reported.
    pub fn top_categories_by_customer_age(&self) -> BTreeMap<u32, Vec<Category>> {
        let mut by_age: BTreeMap<u32, Tally<Category, u64>> = BTreeMap::new();
        for (customer, cart) in self.snapshot.iter() {
            for (product, _) in cart.lines() {
                by_age
                    .entry(customer.age())
                    .or_default()
                    .add(product.category(), 1);
            }
        }

        let top: BTreeMap<u32, Vec<Category>> = by_age
            .into_iter()
            .map(|(age, categories)| (age, leaders(categories.into_ranked())))
            .collect();
        tracing::debug!("Top categories computed for {} ages", top.len());
        top
    }

    /// Price statistics for every category seen in the snapshot.
    ///
    /// Products are de-duplicated: a product ordered by several customers
    /// counts once.
    pub fn category_price_statistics(&self) -> BTreeMap<Category, CategoryStats> {
        let mut seen: HashSet<&Product> = HashSet::new();
        let mut by_category: BTreeMap<Category, Vec<&Product>> = BTreeMap::new();
        for (_, cart) in self.snapshot.iter() {
            for (product, _) in cart.lines() {
                if seen.insert(product) {
                    by_category.entry(product.category()).or_default().push(product);
                }
            }
        }

        let stats: BTreeMap<Category, CategoryStats> = by_category
            .into_iter()
            .map(|(category, products)| (category, Self::price_stats(products)))
            .collect();
        tracing::debug!("Price statistics computed for {} categories", stats.len());
        stats
    }

    fn price_stats(mut products: Vec<&Product>) -> CategoryStats {
        // bounded by the snapshot total: every distinct product sits in a cart
        let total: Decimal = products.iter().map(|p| p.price().value()).sum();
        let mean_price = total / Decimal::from(products.len());

        products.sort_by(|a, b| b.price().cmp(&a.price()));
        let most_expensive = leading_equal_run_by(&products, |p| p.price())
            .iter()
            .map(|&p| p.clone())
            .collect();

        products.sort_by(|a, b| a.price().cmp(&b.price()));
        let cheapest = leading_equal_run_by(&products, |p| p.price())
            .iter()
            .map(|&p| p.clone())
            .collect();

        CategoryStats {
            mean_price,
            most_expensive,
            cheapest,
        }
    }

    /// Customers tied for the largest quantity bought, for every category.
    ///
    /// Always one entry per category; categories nobody bought from map to an
    /// empty list.
    pub fn categories_with_top_buyers(&self) -> BTreeMap<Category, Vec<Customer>> {
        let mut quantities: BTreeMap<Category, Tally<&Customer, u64>> =
            Category::ALL.into_iter().map(|c| (c, Tally::new())).collect();

        for (customer, cart) in self.snapshot.iter() {
            for (product, quantity) in cart.lines() {
                quantities
                    .entry(product.category())
                    .or_default()
                    .add(customer, u64::from(quantity));
            }
        }

        quantities
            .into_iter()
            .map(|(category, buyers)| {
                let top: Vec<Customer> = leaders(buyers.into_ranked()).into_iter().cloned().collect();
                (category, top)
            })
            .collect()
    }

    // =========================================================================
    // Per-customer aggregates
    // =========================================================================

    /// Exact cart value of every customer.
    pub fn cart_value_per_customer(&self) -> HashMap<Customer, Decimal> {
        self.snapshot
            .iter()
            .map(|(customer, cart)| (customer.clone(), cart.value()))
            .collect()
    }

    /// Balance of every customer after paying for the cart. May be negative.
    pub fn projected_balances_after_checkout(&self) -> HashMap<Customer, Decimal> {
        self.cart_value_per_customer()
            .into_iter()
            .map(|(customer, value)| {
                // representable for every cart admitted to the snapshot
                let balance = customer.balance() - value;
                (customer, balance)
            })
            .collect()
    }
}
