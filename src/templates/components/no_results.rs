use crate::domain::listing::Mode;
use maud::{html, Markup};

/// Grid-spanning message shown instead of cards when a search matches
/// nothing. An empty result is not an error state.
pub fn no_results(mode: Mode) -> Markup {
    html! {
        div class="listings__empty" { (mode.no_results_message()) }
    }
}
