use crate::domain::filter::{filter_listings, SearchCriteria};
use crate::domain::listing::Mode;
use crate::errors::{ResultResp, ServerError};
use crate::responses::assets::{APP_JS, MAIN_CSS};
use crate::responses::{asset_response, html_response};
use crate::store::ListingStore;
use crate::templates;
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, store: &ListingStore) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        // The two listing modes. The route decides the mode; everything
        // downstream (filter fields, card wording, grid id) follows it.
        ("GET", "/stays") => listings_page(Mode::Stay, &req, store),
        ("GET", "/properties") => listings_page(Mode::Property, &req, store),

        ("GET", "/static/main.css") => asset_response(MAIN_CSS, mime::TEXT_CSS),
        ("GET", "/static/app.js") => asset_response(APP_JS, mime::APPLICATION_JAVASCRIPT),

        ("GET", p) if p.starts_with("/stays/") => detail_page(Mode::Stay, p, store),
        ("GET", p) if p.starts_with("/properties/") => detail_page(Mode::Property, p, store),

        _ => Err(ServerError::NotFound),
    }
}

/// Renders a mode's grid: the full sequence when the request carries no
/// search parameters, the filtered subsequence otherwise. Every request
/// filters from the full store sequence, never from a prior result.
fn listings_page(mode: Mode, req: &Request, store: &ListingStore) -> ResultResp {
    let params = parse_query(req);
    let criteria = SearchCriteria::from_params(mode, &params);
    let results = filter_listings(mode, store.get(mode), &criteria);

    let page = match mode {
        Mode::Stay => templates::pages::stays_page(&results, &criteria),
        Mode::Property => templates::pages::properties_page(&results, &criteria),
    };
    html_response(page)
}

fn detail_page(mode: Mode, path: &str, store: &ListingStore) -> ResultResp {
    let id = path
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .ok_or(ServerError::NotFound)?;

    let listing = store.find(mode, id).ok_or(ServerError::NotFound)?;
    html_response(templates::pages::detail_page(mode, listing))
}

// Decodes the query string into a flat map; form_urlencoded handles the
// `+` and percent escapes submitted by the search form.
fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}
