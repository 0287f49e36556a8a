// src/domain/filter.rs

use crate::domain::listing::{Listing, Mode};
use std::collections::HashMap;

/// Room phrases accepted by the text fallback when a listing carries no
/// explicit `rooms` token. A query of "2" matches "2 bedroom", "2-bedroom",
/// "2 bd", "2 br" or "2 room" anywhere in title + description.
const ROOM_PHRASE_SUFFIXES: [&str; 5] = [" bedroom", "-bedroom", " bd", " br", " room"];

/// The search form's criteria, parsed from the request's query parameters.
/// An absent criterion matches every listing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchCriteria {
    pub query: Option<String>,
    pub max_price: Option<i64>,
    pub kind: Option<String>,
    pub rooms: Option<String>,
}

impl SearchCriteria {
    /// Reads the well-known form fields: `location` and `price` on both
    /// pages, `type` on the property page, `rooms` on the stays page.
    pub fn from_params(mode: Mode, params: &HashMap<String, String>) -> Self {
        let text = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            query: text("location"),
            max_price: params.get("price").and_then(|raw| parse_price(raw)),
            kind: if mode == Mode::Property { text("type") } else { None },
            rooms: if mode == Mode::Stay { text("rooms") } else { None },
        }
    }

    /// The conjunction of all four predicates. Each absent criterion is
    /// vacuously true.
    pub fn matches(&self, mode: Mode, listing: &Listing) -> bool {
        self.text_match(listing)
            && self.price_match(listing)
            && self.kind_match(mode, listing)
            && self.rooms_match(listing)
    }

    // Case-insensitive substring over title + location + desc + amenities.
    fn text_match(&self, listing: &Listing) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        let haystack = format!(
            "{} {} {} {}",
            listing.title,
            listing.location,
            listing.desc,
            listing.amenities.as_deref().unwrap_or("")
        )
        .to_lowercase();
        haystack.contains(&query.to_lowercase())
    }

    fn price_match(&self, listing: &Listing) -> bool {
        self.max_price.map_or(true, |budget| listing.price <= budget)
    }

    // Category equality, property pages only. A listing without a category
    // matches any type filter.
    fn kind_match(&self, mode: Mode, listing: &Listing) -> bool {
        if mode != Mode::Property {
            return true;
        }
        let Some(wanted) = self.kind.as_deref() else {
            return true;
        };
        match listing.kind.as_deref() {
            Some(kind) => kind.eq_ignore_ascii_case(wanted),
            None => true,
        }
    }

    // Exact token equality when the listing declares its rooms; otherwise
    // the text heuristic over title + description.
    fn rooms_match(&self, listing: &Listing) -> bool {
        let Some(wanted) = self.rooms.as_deref() else {
            return true;
        };
        match listing.rooms.as_deref() {
            Some(rooms) => rooms.eq_ignore_ascii_case(wanted),
            None => room_text_match(wanted, listing),
        }
    }
}

/// Parses a budget out of free-form input by stripping everything that is
/// not a digit ("KES 5,000" -> 5000). Non-positive or digit-free input
/// means no price filter.
pub fn parse_price(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let amount = digits.parse::<i64>().ok()?;
    (amount > 0).then_some(amount)
}

/// Produces the filtered subsequence, preserving source order. Pure and
/// non-mutating; every call filters the full sequence from scratch.
pub fn filter_listings<'a>(
    mode: Mode,
    listings: &'a [Listing],
    criteria: &SearchCriteria,
) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(mode, listing))
        .collect()
}

fn room_text_match(query: &str, listing: &Listing) -> bool {
    let wanted = query.to_lowercase();
    if wanted == "studio" {
        return listing.title.to_lowercase().contains("studio")
            || listing.desc.to_lowercase().contains("studio");
    }
    let content = format!("{} {}", listing.title, listing.desc).to_lowercase();
    ROOM_PHRASE_SUFFIXES
        .iter()
        .any(|suffix| content.contains(&format!("{wanted}{suffix}")))
}
