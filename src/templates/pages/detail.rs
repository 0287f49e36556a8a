use crate::domain::listing::{format_price, Listing, Mode};
use crate::templates::site_layout;
use maud::{html, Markup};

/// Single-listing page, reached from a card's stretched link.
pub fn detail_page(mode: Mode, listing: &Listing) -> Markup {
    let gallery = listing.gallery();

    site_layout(
        &listing.title,
        html! {
            main class="container detail" {
                a class="detail__back" href=(mode.page_path()) { "← Back to " (mode.title()) }

                h1 { (listing.title) }
                p class="detail__location" { (listing.location) " · ★ " (listing.rating) }

                @if gallery.is_empty() {
                    div
                        class="detail__placeholder"
                        style=(format!("background-color: {};", listing.placeholder_color(mode)))
                    {}
                } @else {
                    div class="detail__gallery" {
                        @for src in &gallery {
                            img src=(src) alt=(listing.title);
                        }
                    }
                }

                p class="detail__desc" { (listing.desc) }
                @if let Some(amenities) = &listing.amenities {
                    p class="detail__amenities" { (amenities) }
                }
                p class="detail__dates" { (listing.dates) }
                p class="detail__price" {
                    strong { "KES " (format_price(listing.price)) }
                    " " (listing.price_suffix(mode))
                }
            }
        },
    )
}
