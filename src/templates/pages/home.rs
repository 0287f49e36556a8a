// templates/pages/home.rs

use crate::templates::site_layout;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    site_layout(
        "Jirani — Find your next place",
        html! {
            main class="container" {
                section class="hero" {
                    h1 { "Karibu Jirani" }
                    p class="lead" {
                        "Short stays and long-term homes across Kenya, listed by your neighbours."
                    }
                    div class="hero__actions" {
                        a class="btn" href="/stays" { "Browse short stays" }
                        a class="btn btn--secondary" href="/properties" { "Browse properties" }
                    }
                }
            }
        },
    )
}
