use crate::utils::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub type ProductId = i64;

/// A cart line. Display fields coming from the catalog are kept as-is in
/// `details` so they survive persistence untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub amount: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Product {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id,
            amount,
            details: Map::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.details.get("title").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<f64> {
        self.details.get("price").and_then(Value::as_f64)
    }

    pub fn image(&self) -> Option<&str> {
        self.details.get("image").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// Ordered cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Total number of units across all lines.
    pub fn total_amount(&self) -> i64 {
        self.items.iter().map(|p| p.amount).sum()
    }

    /// Sum of `price * amount` over lines that carry a numeric price.
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|p| p.price().map(|price| price * p.amount as f64))
            .sum()
    }

    /// Appends a new line. Fails if the id is already present.
    pub fn with_product(&self, product: Product) -> Result<Self> {
        if self.find(product.id).is_some() {
            return Err(CartError::DuplicateProduct { id: product.id });
        }
        let mut items = self.items.clone();
        items.push(product);
        Ok(Self { items })
    }

    pub fn with_amount(&self, id: ProductId, amount: i64) -> Self {
        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == id {
                    Product {
                        amount,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();
        Self { items }
    }

    pub fn without(&self, id: ProductId) -> Self {
        let items = self.items.iter().filter(|p| p.id != id).cloned().collect();
        Self { items }
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for product in &items {
            if !seen.insert(product.id) {
                return Err(CartError::DuplicateProduct { id: product.id });
            }
        }
        Ok(Self { items })
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
