use crate::domain::filter::SearchCriteria;
use crate::domain::listing::Mode;
use maud::{html, Markup};

const PROPERTY_TYPES: &[(&str, &str)] = &[
    ("apartment", "Apartment"),
    ("house", "House"),
    ("townhouse", "Townhouse"),
    ("bedsitter", "Bedsitter"),
    ("commercial", "Commercial"),
];

// Same token vocabulary as the listings' `rooms` field.
const ROOM_OPTIONS: &[(&str, &str)] = &[
    ("studio", "Studio"),
    ("1", "1 Bedroom"),
    ("2", "2 Bedrooms"),
    ("3", "3 Bedrooms"),
];

/// The mode's search form. Submits back to the same page via GET, so every
/// search re-renders from the full listing sequence. Submitted values are
/// kept in the inputs.
pub fn search_form(mode: Mode, criteria: &SearchCriteria) -> Markup {
    html! {
        form class="search-form" method="get" action=(mode.page_path()) {
            label for="location" class="sr-only" { "Where to?" }
            input
                type="text"
                id="location"
                name="location"
                placeholder="Where to? e.g. Kilimani"
                value=[criteria.query.as_deref()];

            label for="price" class="sr-only" { "Max budget" }
            input
                type="text"
                id="price"
                name="price"
                placeholder="Max budget (KES)"
                value=[criteria.max_price];

            @match mode {
                Mode::Property => {
                    label for="type" class="sr-only" { "Property type" }
                    select id="type" name="type" {
                        option value="" { "Any type" }
                        @for (value, label) in PROPERTY_TYPES {
                            option value=(value) selected[criteria.kind.as_deref() == Some(*value)] {
                                (label)
                            }
                        }
                    }
                }
                Mode::Stay => {
                    label for="rooms" class="sr-only" { "Rooms" }
                    select id="rooms" name="rooms" {
                        option value="" { "Any rooms" }
                        @for (value, label) in ROOM_OPTIONS {
                            option value=(value) selected[criteria.rooms.as_deref() == Some(*value)] {
                                (label)
                            }
                        }
                    }
                }
            }

            button type="submit" class="btn" { "Search" }
        }
    }
}
