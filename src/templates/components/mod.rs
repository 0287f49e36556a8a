pub mod listing_card;
pub mod no_results;
pub mod search_form;

pub use listing_card::listing_card;
pub use no_results::no_results;
pub use search_form::search_form;
