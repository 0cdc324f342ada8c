pub mod product;
pub mod pricing;
pub mod filter;
pub mod page;

pub use product::{Attribute, AttributeValue, Product};
pub use pricing::{ProductPricing, Region, RentalPeriod};
pub use filter::ProductFilter;
pub use page::{PageError, PageRequest, DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
