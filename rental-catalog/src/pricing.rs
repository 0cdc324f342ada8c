use serde::{Deserialize, Serialize};

/// Discrete rental duration, in months. `duration_months` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RentalPeriod {
    pub id: i32,
    pub duration_months: i32,
}

/// Named geographic pricing zone. `name` is unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Region {
    pub id: i32,
    pub name: String,
}

/// Price of one product for one region and rental period combination.
///
/// The referenced region and rental period are resolved when the row is
/// loaded, so a pricing never carries dangling foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductPricing {
    pub id: i32,
    pub product_id: i32,
    pub rental_period: RentalPeriod,
    pub region: Region,
    pub price: f64,
}
