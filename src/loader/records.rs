//! Order records
//!
//! Untyped shapes of the JSON orders document. Money values travel as
//! strings so that they are never parsed through floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Cart, Category, Customer, DomainError, MoneyError, Price, Product};

/// One customer with the products they ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub client: CustomerRecord,
    /// One entry per ordered unit; repeated products add up
    pub client_orders: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub surname: String,
    pub age: i64,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub category: String,
    pub price: String,
}

impl CustomerRecord {
    pub fn to_customer(&self) -> Result<Customer, DomainError> {
        let age = u32::try_from(self.age)
            .map_err(|_| DomainError::invalid_argument(format!("age out of range: {}", self.age)))?;
        let balance: Decimal = self
            .balance
            .trim()
            .parse()
            .map_err(|e: rust_decimal::Error| MoneyError::ParseError(e.to_string()))?;

        Ok(Customer::new(self.name.clone(), self.surname.clone(), age, balance))
    }
}

impl From<&Customer> for CustomerRecord {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name().to_string(),
            surname: customer.surname().to_string(),
            age: i64::from(customer.age()),
            balance: customer.balance().to_string(),
        }
    }
}

impl ProductRecord {
    pub fn to_product(&self) -> Result<Product, DomainError> {
        let category: Category = self
            .category
            .parse()
            .map_err(|e: crate::domain::UnknownCategory| DomainError::invalid_argument(e.to_string()))?;
        let price: Price = self.price.parse()?;

        Ok(Product::new(self.name.clone(), category, price))
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            category: product.category().to_string(),
            price: product.price().to_string(),
        }
    }
}

impl OrderRecord {
    /// Record for `customer`, repeating each product once per ordered unit.
    pub fn from_cart(customer: &Customer, cart: &Cart) -> Self {
        let client_orders = cart
            .lines()
            .flat_map(|(product, quantity)| {
                std::iter::repeat(ProductRecord::from(product)).take(quantity as usize)
            })
            .collect();

        Self {
            client: CustomerRecord::from(customer),
            client_orders,
        }
    }

    /// Customer and cart described by this record.
    pub fn to_entry(&self) -> Result<(Customer, Cart), DomainError> {
        let customer = self.client.to_customer()?;
        let products = self
            .client_orders
            .iter()
            .map(ProductRecord::to_product)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((customer, Cart::from_products(products)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tv_record() -> ProductRecord {
        ProductRecord {
            name: "TV".to_string(),
            category: "ELECTRONICS".to_string(),
            price: "1200".to_string(),
        }
    }

    #[test]
    fn test_customer_record_to_customer() {
        let record = CustomerRecord {
            name: "ANDREW".to_string(),
            surname: "JOHNS".to_string(),
            age: 18,
            balance: "2000.00".to_string(),
        };

        let customer = record.to_customer().unwrap();
        assert_eq!(customer.identity(), ("ANDREW", "JOHNS"));
        assert_eq!(customer.age(), 18);
        assert_eq!(customer.balance(), dec!(2000.00));
    }

    #[test]
    fn test_customer_record_rejects_negative_age() {
        let record = CustomerRecord {
            name: "ANDREW".to_string(),
            surname: "JOHNS".to_string(),
            age: -1,
            balance: "0".to_string(),
        };

        assert!(matches!(record.to_customer(), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_product_record_to_product() {
        let product = tv_record().to_product().unwrap();

        assert_eq!(product.category(), Category::Electronics);
        assert_eq!(product.price().value(), dec!(1200));
    }

    #[test]
    fn test_product_record_unknown_category() {
        let record = ProductRecord {
            category: "GARDEN".to_string(),
            ..tv_record()
        };

        assert!(matches!(record.to_product(), Err(DomainError::InvalidArgument(_))));
    }

    #[test]
    fn test_order_record_repeats_products_per_unit() {
        let json = r#"{
            "client": { "name": "ANDREW", "surname": "JOHNS", "age": 18, "balance": "2000.00" },
            "client_orders": [
                { "name": "TV", "category": "ELECTRONICS", "price": "1200" },
                { "name": "SOFA", "category": "HOME", "price": "3200" },
                { "name": "SOFA", "category": "HOME", "price": "3200" }
            ]
        }"#;
        let record: OrderRecord = serde_json::from_str(json).unwrap();

        let (customer, cart) = record.to_entry().unwrap();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.value(), dec!(7600));

        let rebuilt = OrderRecord::from_cart(&customer, &cart);
        assert_eq!(rebuilt.client_orders.len(), 3);
        assert_eq!(rebuilt.to_entry().unwrap().1, cart);
    }
}
