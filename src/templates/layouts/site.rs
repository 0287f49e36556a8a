use maud::{html, Markup, DOCTYPE};

/// Shared page shell. The header, menu toggle and nav link classes are the
/// markup contract relied on by /static/app.js; the script skips any
/// behavior whose elements are missing.
pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/app.js" defer {}
            }
            body {
                header class="header" {
                    a class="header__brand" href="/" {
                        svg
                            xmlns="http://www.w3.org/2000/svg"
                            width="24"
                            height="24"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="#2d60ff"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        {
                            path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                            path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                            path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                            path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                        }
                        span { "Jirani" }
                    }
                    button type="button" class="menu-toggle" { "☰" }
                    nav class="nav" {
                        ul {
                            li { a class="nav__link" href="/" { "Home" } }
                            li { a class="nav__link" href="/stays" { "Short Stays" } }
                            li { a class="nav__link" href="/properties" { "Properties" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
