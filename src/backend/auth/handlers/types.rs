/**
 * Authentication Handler Types
 *
 * This module defines the form types submitted to the signup, login and
 * password update handlers. Each form carries its own [`Validator`] so the
 * re-rendered page can show the submitted values next to their errors.
 *
 * Unknown fields (notably `csrf_token`) are ignored; missing fields
 * deserialize as empty strings and fail the non-blank checks.
 */

use serde::Deserialize;

use crate::shared::validator::{matches, min_chars, not_blank, EMAIL_RX};
use crate::shared::Validator;

/// Minimum password length for new passwords
pub const MIN_PASSWORD_CHARS: usize = 8;

const BLANK: &str = "This field cannot be blank";
const BAD_EMAIL: &str = "This field must be a valid email address";

fn too_short() -> String {
    format!("This field must be at least {MIN_PASSWORD_CHARS} characters long")
}

/// Sign up form
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct UserSignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl UserSignupForm {
    /// Run every signup rule, collecting all violations
    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.name), "name", BLANK);
        v.check_field(not_blank(&self.email), "email", BLANK);
        v.check_field(matches(&self.email, &EMAIL_RX), "email", BAD_EMAIL);
        v.check_field(not_blank(&self.password), "password", BLANK);
        v.check_field(min_chars(&self.password, MIN_PASSWORD_CHARS), "password", too_short());
        v.valid()
    }
}

/// Login form
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct UserLoginForm {
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl UserLoginForm {
    /// Run every login rule, collecting all violations
    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.email), "email", BLANK);
        v.check_field(matches(&self.email, &EMAIL_RX), "email", BAD_EMAIL);
        v.check_field(not_blank(&self.password), "password", BLANK);
        v.valid()
    }
}

/// Password update form
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct PasswordUpdateForm {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl PasswordUpdateForm {
    /// Run every password update rule, collecting all violations
    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.current_password), "current_password", BLANK);
        v.check_field(not_blank(&self.new_password), "new_password", BLANK);
        v.check_field(
            min_chars(&self.new_password, MIN_PASSWORD_CHARS),
            "new_password",
            too_short(),
        );
        v.check_field(
            not_blank(&self.new_password_confirmation),
            "new_password_confirmation",
            BLANK,
        );
        v.check_field(
            self.new_password == self.new_password_confirmation,
            "new_password_confirmation",
            "Passwords do not match",
        );
        v.valid()
    }
}
