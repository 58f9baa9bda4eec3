//! Snippet pages: the latest-snippets listing, a single snippet and the
//! creation form.

use maud::{html, Markup};

use crate::backend::snippets::types::SnippetCreateForm;
use crate::backend::views::context::{human_date, TemplateData};
use crate::backend::views::layout::{csrf_field, field_errors, page};
use crate::shared::{Snippet, PERMITTED_EXPIRY_DAYS};

pub fn home(data: &TemplateData, snippets: &[Snippet]) -> Markup {
    page(
        "Home",
        data,
        html! {
            h2 { "Latest Snippets" }
            @if snippets.is_empty() {
                p { "There's nothing to see here... yet!" }
            } @else {
                table {
                    tr {
                        th { "Title" }
                        th { "Created" }
                        th { "ID" }
                    }
                    @for snippet in snippets {
                        tr {
                            td { a href={ "/snippet/view/" (snippet.id) } { (snippet.title) } }
                            td { (human_date(&snippet.created)) }
                            td { "#" (snippet.id) }
                        }
                    }
                }
            }
        },
    )
}

pub fn view(data: &TemplateData, snippet: &Snippet) -> Markup {
    page(
        &format!("Snippet #{}", snippet.id),
        data,
        html! {
            div.snippet {
                div.metadata {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div.metadata {
                    time { "Created: " (human_date(&snippet.created)) }
                    time { "Expires: " (human_date(&snippet.expires)) }
                }
            }
        },
    )
}

pub fn create(data: &TemplateData, form: &SnippetCreateForm) -> Markup {
    page(
        "Create a New Snippet",
        data,
        html! {
            form action="/snippet/create" method="POST" {
                (csrf_field(&data.csrf_token))
                div {
                    label for="title" { "Title:" }
                    (field_errors(&form.validator, "title"))
                    input type="text" name="title" id="title" value=(form.title);
                }
                div {
                    label for="content" { "Content:" }
                    (field_errors(&form.validator, "content"))
                    textarea name="content" id="content" { (form.content) }
                }
                div {
                    label { "Delete in:" }
                    (field_errors(&form.validator, "expires"))
                    @for days in PERMITTED_EXPIRY_DAYS {
                        input type="radio" name="expires" value=(days)
                            checked[form.is_selected(days)];
                        " " (expiry_label(days)) " "
                    }
                }
                div {
                    input type="submit" value="Publish snippet";
                }
            }
        },
    )
}

fn expiry_label(days: i64) -> &'static str {
    match days {
        1 => "One Day",
        7 => "One Week",
        _ => "One Year",
    }
}
