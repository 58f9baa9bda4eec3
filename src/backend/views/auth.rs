//! Account pages: signup, login, account details and password update.
//!
//! Password inputs are never pre-filled when a form is re-rendered.

use maud::{html, Markup};

use crate::backend::auth::handlers::types::{PasswordUpdateForm, UserLoginForm, UserSignupForm};
use crate::backend::views::context::{human_date, TemplateData};
use crate::backend::views::layout::{csrf_field, field_errors, non_field_errors, page};
use crate::shared::User;

pub fn signup(data: &TemplateData, form: &UserSignupForm) -> Markup {
    page(
        "Signup",
        data,
        html! {
            form action="/user/signup" method="POST" novalidate {
                (csrf_field(&data.csrf_token))
                div {
                    label for="name" { "Name:" }
                    (field_errors(&form.validator, "name"))
                    input type="text" name="name" id="name" value=(form.name);
                }
                div {
                    label for="email" { "Email:" }
                    (field_errors(&form.validator, "email"))
                    input type="email" name="email" id="email" value=(form.email);
                }
                div {
                    label for="password" { "Password:" }
                    (field_errors(&form.validator, "password"))
                    input type="password" name="password" id="password";
                }
                div {
                    input type="submit" value="Signup";
                }
            }
        },
    )
}

pub fn login(data: &TemplateData, form: &UserLoginForm) -> Markup {
    page(
        "Login",
        data,
        html! {
            form action="/user/login" method="POST" novalidate {
                (csrf_field(&data.csrf_token))
                (non_field_errors(&form.validator))
                div {
                    label for="email" { "Email:" }
                    (field_errors(&form.validator, "email"))
                    input type="email" name="email" id="email" value=(form.email);
                }
                div {
                    label for="password" { "Password:" }
                    (field_errors(&form.validator, "password"))
                    input type="password" name="password" id="password";
                }
                div {
                    input type="submit" value="Login";
                }
            }
        },
    )
}

pub fn account(data: &TemplateData, user: &User) -> Markup {
    page(
        "Your Account",
        data,
        html! {
            h2 { "Your Account" }
            table {
                tr {
                    th { "Name" }
                    td { (user.name) }
                }
                tr {
                    th { "Email" }
                    td { (user.email) }
                }
                tr {
                    th { "Joined" }
                    td { (human_date(&user.created)) }
                }
                tr {
                    th { "Password" }
                    td { a href="/account/password/update" { "Change password" } }
                }
            }
        },
    )
}

pub fn password_update(data: &TemplateData, form: &PasswordUpdateForm) -> Markup {
    page(
        "Change Password",
        data,
        html! {
            h2 { "Change Password" }
            form action="/account/password/update" method="POST" novalidate {
                (csrf_field(&data.csrf_token))
                div {
                    label for="current_password" { "Current password:" }
                    (field_errors(&form.validator, "current_password"))
                    input type="password" name="current_password" id="current_password";
                }
                div {
                    label for="new_password" { "New password:" }
                    (field_errors(&form.validator, "new_password"))
                    input type="password" name="new_password" id="new_password";
                }
                div {
                    label for="new_password_confirmation" { "Confirm new password:" }
                    (field_errors(&form.validator, "new_password_confirmation"))
                    input type="password"
                        name="new_password_confirmation"
                        id="new_password_confirmation";
                }
                div {
                    input type="submit" value="Change password";
                }
            }
        },
    )
}
