//! Client-side form validation and request building.
//!
//! Validation failures never reach the network; each page renders the
//! [`FormError`] inline. Server failures are turned into text with
//! [`crate::ApiError::user_message`] and the fallbacks below.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::types::{LoginRequest, NewEvent, RegisterRequest};

pub const REGISTER_FAILED: &str = "Registration failed.";
pub const LOGIN_FAILED: &str = "Login failed.";
pub const CREATE_EVENT_FAILED: &str = "Failed to create event.";
pub const EVENT_CREATED: &str = "Event created successfully!";
pub const LOAD_EVENTS_FAILED: &str = "Could not load your events.";
pub const DELETE_EVENT_FAILED: &str = "Failed to delete event.";
pub const LOAD_EVENT_DETAILS_FAILED: &str = "Could not load event details.";

/// A validation failure shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Enter a valid email address.")]
    InvalidEmail,
}

fn required(value: &str, label: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(label))
    } else {
        Ok(trimmed.to_owned())
    }
}

fn email(value: &str) -> Result<String, FormError> {
    let email = required(value, "Email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(FormError::InvalidEmail),
    }
}

/// `first.last{n}`, lowercased, with `n` in `0..100`.
#[must_use]
pub fn generate_username(first_name: &str, last_name: &str, suffix: u8) -> String {
    format!(
        "{}.{}{}",
        first_name.trim().to_lowercase(),
        last_name.trim().to_lowercase(),
        suffix % 100
    )
}

/// Registration form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Validate and build the `/register` body. `suffix` feeds the
    /// generated username.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn to_request(&self, suffix: u8) -> Result<RegisterRequest, FormError> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(RegisterRequest {
            username: generate_username(&first_name, &last_name, suffix),
            email,
            password: self.password.clone(),
        })
    }
}

/// Login form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn to_request(&self) -> Result<LoginRequest, FormError> {
        let email = email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(LoginRequest { email, password: self.password.clone() })
    }
}

/// Every create-event field is required.
///
/// # Errors
///
/// Returns the first empty field.
pub fn validate_new_event(form: &NewEvent) -> Result<NewEvent, FormError> {
    Ok(NewEvent {
        title: required(&form.title, "Title")?,
        description: required(&form.description, "Description")?,
        start_date_time: required(&form.start_date_time, "Start time")?,
        end_date_time: required(&form.end_date_time, "End time")?,
        location: required(&form.location, "Location")?,
    })
}
