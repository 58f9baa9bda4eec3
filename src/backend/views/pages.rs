//! Static informational pages.

use maud::{html, Markup};

use crate::backend::views::context::TemplateData;
use crate::backend::views::layout::page;

pub fn about(data: &TemplateData) -> Markup {
    page(
        "About",
        data,
        html! {
            h2 { "About" }
            p {
                "Snippetbox is a place to paste and share short pieces of text. "
                "Anyone can read the latest snippets; sign up to publish your own. "
                "Every snippet disappears after a day, a week or a year."
            }
        },
    )
}
