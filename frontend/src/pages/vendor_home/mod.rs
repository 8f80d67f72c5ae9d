pub mod components;
pub mod content;
pub mod panel;
pub mod view_model;

pub use panel::VendorHomePage;
