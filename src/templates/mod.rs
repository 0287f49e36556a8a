pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{listing_card, no_results, search_form};
pub use layouts::site::site_layout;
