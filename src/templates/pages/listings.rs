use crate::domain::filter::SearchCriteria;
use crate::domain::listing::{Listing, Mode};
use crate::templates::{listing_card, no_results, search_form, site_layout};
use maud::{html, Markup};

pub fn stays_page(listings: &[&Listing], criteria: &SearchCriteria) -> Markup {
    listings_page(Mode::Stay, listings, criteria)
}

pub fn properties_page(listings: &[&Listing], criteria: &SearchCriteria) -> Markup {
    listings_page(Mode::Property, listings, criteria)
}

/// Search form plus grid. The grid is rebuilt in full on every request —
/// one card per listing in sequence order, or the mode's no-results
/// message when nothing matched.
fn listings_page(mode: Mode, listings: &[&Listing], criteria: &SearchCriteria) -> Markup {
    site_layout(
        mode.title(),
        html! {
            main class="container" {
                h1 { (mode.title()) }

                (search_form(mode, criteria))

                div id=(mode.grid_id()) class="listings__grid" {
                    @if listings.is_empty() {
                        (no_results(mode))
                    } @else {
                        @for listing in listings {
                            (listing_card(mode, listing))
                        }
                    }
                }
            }
        },
    )
}
