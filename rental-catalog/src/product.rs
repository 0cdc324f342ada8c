use serde::{Deserialize, Serialize};
use crate::pricing::ProductPricing;

/// Core product structure.
///
/// A product owns its attributes and pricing rows; children are only ever
/// reached through the owning product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub attributes: Vec<Attribute>,
    pub pricings: Vec<ProductPricing>,
}

/// Named product attribute, e.g. "Color".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub id: i32,
    /// Lookup-only reference to the owning product.
    pub product_id: i32,
    pub name: String,
    pub values: Vec<AttributeValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeValue {
    pub id: i32,
    pub attribute_id: i32,
    pub value: String,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, description: impl Into<String>, sku: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            sku: sku.into(),
            attributes: Vec::new(),
            pricings: Vec::new(),
        }
    }

    /// True when at least one pricing row is for the named region.
    pub fn has_region(&self, region: &str) -> bool {
        self.pricings.iter().any(|p| p.region.name == region)
    }

    /// True when at least one pricing row covers the given duration.
    pub fn has_rental_period(&self, duration_months: i64) -> bool {
        self.pricings
            .iter()
            .any(|p| i64::from(p.rental_period.duration_months) == duration_months)
    }
}

impl Attribute {
    pub fn new(id: i32, product_id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            product_id,
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, id: i32, value: impl Into<String>) -> Self {
        self.values.push(AttributeValue {
            id,
            attribute_id: self.id,
            value: value.into(),
        });
        self
    }
}
