pub mod assets;
pub mod errors;
pub mod html;

pub use assets::asset_response;
pub use errors::html_error_response;
pub use html::html_response;
