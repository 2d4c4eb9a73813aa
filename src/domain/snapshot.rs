//! Order snapshot
//!
//! Customer carts held in insertion order. Iteration order is the order in
//! which customers (and products within a cart) were first inserted, which is
//! what makes ranking ties deterministic.
//!
//! All money arithmetic is checked on the way in. Once a cart is part of a
//! snapshot, the sum of every cart value and every projected balance fits in
//! a Decimal, so reads never overflow.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::customer::Customer;
use super::error::{DomainError, DomainResult};
use super::money::MoneyError;
use super::product::Product;

#[derive(Debug, Clone)]
struct CartLine {
    product: Product,
    quantity: u32,
    cost: Decimal,
}

/// Products a customer ordered, with the ordered quantity of each.
///
/// Quantities are always at least 1.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    index: HashMap<Product, usize>,
    value: Decimal,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from a list of products, one unit per occurrence.
    ///
    /// # Errors
    /// - `DomainError::InvalidArgument` if a quantity overflows
    /// - `DomainError::InvalidMoney` if the cart value overflows
    pub fn from_products<I>(products: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut cart = Self::new();
        for product in products {
            cart.add(product, 1)?;
        }
        Ok(cart)
    }

    /// Add `quantity` units of `product`, accumulating with existing units.
    ///
    /// # Errors
    /// - `DomainError::InvalidArgument` if quantity < 1 or the total overflows
    /// - `DomainError::InvalidMoney` if the cart value overflows
    pub fn add(&mut self, product: Product, quantity: i64) -> DomainResult<()> {
        let quantity = checked_quantity(quantity)?;
        let total = self.quantity_of(&product).checked_add(quantity).ok_or_else(|| {
            DomainError::invalid_argument(format!("quantity overflow for product {}", product.name()))
        })?;
        self.put(product, total)
    }

    /// Set the quantity of `product`, replacing existing units.
    ///
    /// # Errors
    /// - `DomainError::InvalidArgument` if quantity < 1
    /// - `DomainError::InvalidMoney` if the cart value overflows
    pub fn set(&mut self, product: Product, quantity: i64) -> DomainResult<()> {
        let quantity = checked_quantity(quantity)?;
        self.put(product, quantity)
    }

    /// Remove a product line, returning its quantity.
    pub fn remove(&mut self, product: &Product) -> Option<u32> {
        let position = self.index.remove(product)?;
        let line = self.lines.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        self.value -= line.cost;
        Some(line.quantity)
    }

    /// Quantity ordered of `product` (0 when absent)
    pub fn quantity_of(&self, product: &Product) -> u32 {
        self.index.get(product).map_or(0, |&i| self.lines[i].quantity)
    }

    /// Product lines in insertion order
    pub fn lines(&self) -> impl Iterator<Item = (&Product, u32)> + '_ {
        self.lines.iter().map(|line| (&line.product, line.quantity))
    }

    /// Product lines with their cost (price x quantity)
    pub fn priced_lines(&self) -> impl Iterator<Item = (&Product, u32, Decimal)> + '_ {
        self.lines
            .iter()
            .map(|line| (&line.product, line.quantity, line.cost))
    }

    /// Exact value of the cart: sum of price x quantity
    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn put(&mut self, product: Product, quantity: u32) -> DomainResult<()> {
        let cost = product.cost_for(quantity)?;
        let slot = self.index.get(&product).copied();
        let previous = slot.map_or(Decimal::ZERO, |i| self.lines[i].cost);
        // costs are non-negative and sum to `value`, so the subtraction is exact
        let value = (self.value - previous)
            .checked_add(cost)
            .ok_or(MoneyError::Overflow)?;

        match slot {
            Some(i) => {
                self.lines[i].quantity = quantity;
                self.lines[i].cost = cost;
            }
            None => {
                self.index.insert(product.clone(), self.lines.len());
                self.lines.push(CartLine {
                    product,
                    quantity,
                    cost,
                });
            }
        }
        self.value = value;
        Ok(())
    }
}

fn checked_quantity(quantity: i64) -> DomainResult<u32> {
    if quantity < 1 {
        return Err(DomainError::invalid_argument(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    u32::try_from(quantity)
        .map_err(|_| DomainError::invalid_argument(format!("quantity too large: {quantity}")))
}

impl PartialEq for Cart {
    /// Carts are equal when they hold the same quantities, regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .lines()
                .all(|(product, quantity)| other.quantity_of(product) == quantity)
    }
}

impl Eq for Cart {}

/// All customer carts at one instant.
///
/// Customers are keyed by identity (name and surname). Inserting a cart for a
/// customer whose identity is already present replaces that cart and keeps the
/// first-seen customer value.
#[derive(Debug, Clone, Default)]
pub struct OrderSnapshot {
    entries: Vec<(Customer, Cart)>,
    index: HashMap<Customer, usize>,
    total_value: Decimal,
}

impl OrderSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the given carts, inserted in order.
    pub fn from_carts<I>(carts: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (Customer, Cart)>,
    {
        let mut snapshot = Self::new();
        for (customer, cart) in carts {
            snapshot.insert_cart(customer, cart)?;
        }
        Ok(snapshot)
    }

    /// Insert `cart` for `customer`.
    ///
    /// Returns the replaced cart when the customer identity was already present.
    ///
    /// # Errors
    /// - `DomainError::InvalidMoney` if the snapshot total or the customer's
    ///   projected balance would overflow; the snapshot is left unchanged
    pub fn insert_cart(&mut self, customer: Customer, cart: Cart) -> DomainResult<Option<Cart>> {
        match self.index.get(&customer).copied() {
            Some(i) => {
                let others = self.total_value - self.entries[i].1.value();
                self.total_value = checked_total(&self.entries[i].0, &cart, others)?;
                Ok(Some(std::mem::replace(&mut self.entries[i].1, cart)))
            }
            None => {
                self.total_value = checked_total(&customer, &cart, self.total_value)?;
                self.index.insert(customer.clone(), self.entries.len());
                self.entries.push((customer, cart));
                Ok(None)
            }
        }
    }

    /// Add `quantity` units of `product` to the customer's cart, creating the
    /// customer entry when needed.
    pub fn add_line(&mut self, customer: Customer, product: Product, quantity: i64) -> DomainResult<()> {
        let mut cart = self.cart(&customer).cloned().unwrap_or_default();
        cart.add(product, quantity)?;
        self.insert_cart(customer, cart)?;
        Ok(())
    }

    /// Remove a customer and return its cart.
    pub fn remove_customer(&mut self, customer: &Customer) -> Option<Cart> {
        let position = self.index.remove(customer)?;
        let (_, cart) = self.entries.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        self.total_value -= cart.value();
        Some(cart)
    }

    pub fn cart(&self, customer: &Customer) -> Option<&Cart> {
        self.index.get(customer).map(|&i| &self.entries[i].1)
    }

    /// Customer carts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Customer, &Cart)> + '_ {
        self.entries.iter().map(|(customer, cart)| (customer, cart))
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.entries.iter().map(|(customer, _)| customer)
    }

    /// Sum of every cart value
    pub fn total_value(&self) -> Decimal {
        self.total_value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// New snapshot total once `cart` joins `base`, checking the projected balance.
fn checked_total(customer: &Customer, cart: &Cart, base: Decimal) -> DomainResult<Decimal> {
    customer
        .balance_after_spending(cart.value())
        .ok_or(MoneyError::Overflow)?;
    Ok(base.checked_add(cart.value()).ok_or(MoneyError::Overflow)?)
}

impl TryFrom<Vec<(Customer, Cart)>> for OrderSnapshot {
    type Error = DomainError;

    fn try_from(carts: Vec<(Customer, Cart)>) -> DomainResult<Self> {
        Self::from_carts(carts)
    }
}
