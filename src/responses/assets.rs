use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// Static assets ship inside the binary; there is no file serving.
pub const MAIN_CSS: &str = include_str!("../../assets/main.css");
pub const APP_JS: &str = include_str!("../../assets/app.js");

pub fn asset_response(content: &'static str, content_type: mime::Mime) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(content.to_string()))
        .map_err(|_| ServerError::InternalError)
}
