use crate::domain::listing::Listing;
use crate::store::ListingStore;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::json;
use std::io::Read;

/// A small fixed store exercising the interesting shapes: explicit and
/// legacy images, placeholder colors, declared and undeclared rooms, a
/// listing without a category.
pub fn fixture_store() -> ListingStore {
    let stays: Vec<Listing> = serde_json::from_value(json!([
        {
            "id": 1,
            "title": "Lakeview Studio",
            "location": "Naivasha",
            "desc": "",
            "amenities": "Wifi · Hot tub",
            "dates": "Mar 3 – 9",
            "price": 3000,
            "rooms": "studio",
            "rating": 4.8,
            "images": [
                "https://picsum.photos/seed/test-1a/640/420",
                "https://picsum.photos/seed/test-1b/640/420"
            ]
        },
        {
            "id": 2,
            "title": "Hilltop House",
            "location": "Limuru",
            "desc": "4 bedroom family home",
            "dates": "Apr 1 – 8",
            "price": 9000,
            "rating": 4.9,
            "imageColor": "#dce8dc"
        },
        {
            "id": 3,
            "title": "Garden Cottage",
            "location": "Karen",
            "desc": "Cozy 2 bedroom cottage",
            "dates": "Mar 5 – 12",
            "price": 5500,
            "rating": "New",
            "image": "https://picsum.photos/seed/test-3/640/420"
        }
    ]))
    .expect("stay fixtures should parse");

    let properties: Vec<Listing> = serde_json::from_value(json!([
        {
            "id": 1,
            "title": "Westlands Apartment",
            "location": "Nairobi",
            "desc": "Spacious 2 bedroom apartment with city views.",
            "dates": "Listed 2 weeks ago",
            "price": 85000,
            "priceLabel": "per month",
            "type": "apartment",
            "rooms": "2",
            "rating": 4.6,
            "images": ["https://picsum.photos/seed/test-p1/640/420"]
        },
        {
            "id": 2,
            "title": "Karen Villa",
            "location": "Karen",
            "desc": "5 bedroom villa on half an acre.",
            "dates": "Listed 1 month ago",
            "price": 32000000,
            "type": "house",
            "rating": 4.8,
            "images": ["https://picsum.photos/seed/test-p2/640/420"]
        },
        {
            "id": 3,
            "title": "Riverside Plot",
            "location": "Nakuru",
            "desc": "Quarter-acre serviced plot.",
            "dates": "Listed 5 days ago",
            "price": 12000000,
            "rating": 4.0,
            "imageColor": "#e8e0d0"
        }
    ]))
    .expect("property fixtures should parse");

    ListingStore::new(stays, properties)
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn read_body(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

pub fn card_count(body: &str) -> usize {
    body.matches("<article").count()
}
