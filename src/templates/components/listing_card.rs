use crate::domain::listing::{format_price, Listing, Mode};
use maud::{html, Markup};

/// One listing card. The whole card is clickable through the stretched
/// detail link; the carousel buttons sit on a higher layer so their clicks
/// never reach it.
pub fn listing_card(mode: Mode, listing: &Listing) -> Markup {
    let gallery = listing.gallery();
    let carousel_id = format!("carousel-{}", listing.id);
    let cid = carousel_id.as_str();
    let detail_href = format!("{}/{}", mode.page_path(), listing.id);

    let rating = match mode {
        Mode::Stay => format!("★ {}", listing.rating),
        Mode::Property => listing.rating.to_string(),
    };

    html! {
        article class="property-card" {
            a class="property-card__link" href=(detail_href) {}

            div class="property-card__image-wrapper" {
                @if gallery.is_empty() {
                    div
                        class="property-card__image-placeholder"
                        style=(format!("background-color: {};", listing.placeholder_color(mode)))
                    {}
                } @else {
                    div id=(cid) class="image-carousel" {
                        @for src in &gallery {
                            img src=(src) alt=(listing.title);
                        }
                    }
                    @if gallery.len() > 1 {
                        button type="button" class="carousel-btn prev" data-carousel=(cid) data-dir="-1" { "❮" }
                        button type="button" class="carousel-btn next" data-carousel=(cid) data-dir="1" { "❯" }
                        div class="image-carousel__count" { "1/" (gallery.len()) }
                    }
                }
            }

            div class="property-card__content" {
                div class="property-card__header" {
                    h3 class="property-card__title" { (listing.title) }
                    span class="property-card__rating" { (rating) }
                }
                p class="property-card__desc" { (listing.desc) }
                p class="property-card__dates" { (listing.dates) }
                p class="property-card__price" {
                    strong { "KES " (format_price(listing.price)) }
                    " " (listing.price_suffix(mode))
                }
                @if let Some(amenities) = &listing.amenities {
                    p class="property-card__amenities" { (amenities) }
                }
            }
        }
    }
}
