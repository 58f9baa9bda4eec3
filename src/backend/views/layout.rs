//! Base layout and shared form fragments.
//!
//! Every page is wrapped in [`page`], which renders the header, the
//! navigation bar for the visitor's authentication state, the flash
//! banner and the footer.

use maud::{html, Markup, DOCTYPE};

use crate::backend::views::context::TemplateData;
use crate::shared::Validator;

const FONTS_STYLESHEET: &str = "https://fonts.googleapis.com/css?family=Ubuntu+Mono:400,700";

/// Render a full page around `content`
pub fn page(title: &str, data: &TemplateData, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
                link rel="stylesheet" href=(FONTS_STYLESHEET);
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                (nav(data))
                main {
                    @if let Some(flash) = &data.flash {
                        div.flash { (flash) }
                    }
                    (content)
                }
                footer {
                    "Powered by " a href="https://www.rust-lang.org/" { "Rust" }
                    " in " (data.current_year)
                }
                script src="/static/js/main.js" type="text/javascript" {}
            }
        }
    }
}

fn nav(data: &TemplateData) -> Markup {
    html! {
        nav {
            div {
                a href="/" { "Home" }
                a href="/about" { "About" }
                @if data.is_authenticated {
                    a href="/snippet/create" { "Create snippet" }
                }
            }
            div {
                @if data.is_authenticated {
                    a href="/user/account" { "Account" }
                    form action="/user/logout" method="POST" {
                        (csrf_field(&data.csrf_token))
                        button { "Logout" }
                    }
                } @else {
                    a href="/user/signup" { "Signup" }
                    a href="/user/login" { "Login" }
                }
            }
        }
    }
}

/// Hidden anti-forgery field embedded in every form
pub fn csrf_field(token: &str) -> Markup {
    html! {
        input type="hidden" name="csrf_token" value=(token);
    }
}

/// Error labels for one field
pub fn field_errors(validator: &Validator, field: &str) -> Markup {
    html! {
        @for message in validator.field_errors(field) {
            label.error { (message) }
        }
    }
}

/// Error banner for whole-form errors
pub fn non_field_errors(validator: &Validator) -> Markup {
    html! {
        @for message in validator.non_field_errors() {
            div.error { (message) }
        }
    }
}
