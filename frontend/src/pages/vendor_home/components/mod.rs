pub mod footer;
pub mod offers;
pub mod products;

pub use footer::FeedbackFooter;
pub use offers::OffersSection;
pub use products::PopularProductsSection;
