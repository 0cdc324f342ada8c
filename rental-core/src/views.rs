//! Response shapes returned by the catalog API.
//!
//! Views are built from entities by the mapping functions below and carry
//! only what clients see: pricings are flattened to region name and
//! duration, with no foreign keys.

use rental_catalog::{Attribute, AttributeValue, Product, ProductPricing};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeValueView {
    pub id: i32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeView {
    pub id: i32,
    pub name: String,
    pub values: Vec<AttributeValueView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingView {
    /// Duration in months.
    pub rental_period: i32,
    /// Region name.
    pub region: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub sku: String,
    pub attributes: Vec<AttributeView>,
    pub pricings: Vec<PricingView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    pub items: Vec<ProductDetail>,
    pub total: u64,
}

pub fn attribute_value_view(value: &AttributeValue) -> AttributeValueView {
    AttributeValueView {
        id: value.id,
        value: value.value.clone(),
    }
}

pub fn attribute_view(attribute: &Attribute) -> AttributeView {
    AttributeView {
        id: attribute.id,
        name: attribute.name.clone(),
        values: attribute.values.iter().map(attribute_value_view).collect(),
    }
}

pub fn pricing_view(pricing: &ProductPricing) -> PricingView {
    PricingView {
        rental_period: pricing.rental_period.duration_months,
        region: pricing.region.name.clone(),
        price: pricing.price,
    }
}

/// Map a product using only the given attribute window. Pricings are
/// always mapped in full.
pub fn product_detail(product: &Product, attributes: &[Attribute]) -> ProductDetail {
    ProductDetail {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        sku: product.sku.clone(),
        attributes: attributes.iter().map(attribute_view).collect(),
        pricings: product.pricings.iter().map(pricing_view).collect(),
    }
}
