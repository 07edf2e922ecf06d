//! Translation of raw form fields into typed values.
//!
//! Each helper appends a field-scoped message to the given
//! [`ValidationErrors`] when the field is rejected, so callers can run
//! several checks and report every violation at once.

use std::str::FromStr;

use url::{ParseError, Url};

use crate::{
    entities::{Genre, PhoneNumber, UsState},
    util::validate::{self, ValidationErrors},
};

/// Parses an optional URL form field. `Ok(None)` for empty input.
pub fn parse_url_param(param: &str) -> Result<Option<Url>, ParseError> {
    let param = param.trim();
    if param.is_empty() {
        Ok(None)
    } else {
        Url::parse(param).map(Some)
    }
}

pub(crate) fn required_text(
    field: &'static str,
    value: String,
    errors: &mut ValidationErrors,
) -> String {
    let value = value.trim().to_owned();
    if value.is_empty() {
        errors.add(field, "This field is required.");
    }
    value
}

pub(crate) fn url_field(
    field: &'static str,
    value: Option<&str>,
    errors: &mut ValidationErrors,
) -> Option<Url> {
    match parse_url_param(value.unwrap_or_default()) {
        Ok(url) => url,
        Err(_) => {
            errors.add(field, "Invalid URL.");
            None
        }
    }
}

pub(crate) fn genre_list(
    field: &'static str,
    values: &[String],
    errors: &mut ValidationErrors,
) -> Vec<Genre> {
    values
        .iter()
        .filter_map(|value| match Genre::from_str(value) {
            Ok(genre) => Some(genre),
            Err(_) => {
                errors.add(field, format!("Invalid genre: {value}."));
                None
            }
        })
        .collect()
}

pub(crate) fn state_code(
    field: &'static str,
    value: &str,
    errors: &mut ValidationErrors,
) -> Option<UsState> {
    match UsState::from_str(value.trim()) {
        Ok(state) => Some(state),
        Err(_) => {
            errors.add(field, "Invalid state.");
            None
        }
    }
}

pub(crate) fn phone_field(
    field: &'static str,
    value: Option<String>,
    errors: &mut ValidationErrors,
) -> Option<PhoneNumber> {
    match none_if_empty(value) {
        None => None,
        Some(value) if validate::is_valid_phone(&value) => {
            Some(PhoneNumber::new_unchecked(value))
        }
        Some(_) => {
            errors.add(field, "Invalid phone number.");
            None
        }
    }
}

pub(crate) fn none_if_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
