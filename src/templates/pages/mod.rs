pub mod detail;
pub mod home;
pub mod listings;

pub use detail::detail_page;
pub use home::home_page;
pub use listings::{properties_page, stays_page};
