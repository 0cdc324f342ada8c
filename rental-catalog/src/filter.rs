use crate::product::Product;

/// Optional filters for product listings.
///
/// Starts unconditional; each filter is attached independently. A product
/// passes when it has some pricing row for `region` AND some (possibly
/// different) pricing row for `rental_period`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub region: Option<String>,
    /// Kept wide so out-of-range durations simply match nothing.
    pub rental_period: Option<i64>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_rental_period(mut self, duration_months: i64) -> Self {
        self.rental_period = Some(duration_months);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(region) = &self.region {
            if !product.has_region(region) {
                return false;
            }
        }
        if let Some(months) = self.rental_period {
            if !product.has_rental_period(months) {
                return false;
            }
        }
        true
    }
}
