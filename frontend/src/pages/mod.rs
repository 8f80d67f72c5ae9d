pub mod feedback;
pub mod vendor_home;

pub use feedback::FeedbackPage;
pub use vendor_home::VendorHomePage;
