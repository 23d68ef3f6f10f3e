//! Field sanitizer.
//!
//! The `sanitize_*` functions run on every edit and coerce the typed value
//! into a valid-looking shape; they never fail. The `validate_*` functions
//! run once on submit.

use super::error::{FieldError, ValidationErrors};
use super::models::Shop;

pub const NAME_MAX_CHARS: usize = 20;
pub const PHONE_PREFIX: &str = "+7";
/// `+7` followed by ten digits.
pub const PHONE_LEN: usize = 12;

/// Keeps letters only, at most [`NAME_MAX_CHARS`] of them, and capitalizes
/// the result.
///
/// An upper-case mapping that expands into several characters (`ß` → `SS`)
/// leaves the first letter as typed, so the length bound holds and a second
/// pass is a no-op. The remaining letters take the first character of their
/// lower-case mapping (`İ` → `i`).
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    let mut letters = raw
        .chars()
        .filter(|c| c.is_alphabetic())
        .take(NAME_MAX_CHARS);

    let Some(first) = letters.next() else {
        return String::new();
    };

    let mut cleaned = String::with_capacity(raw.len());
    cleaned.push(upper_or_keep(first));
    cleaned.extend(letters.map(lower_first));
    cleaned
}

fn upper_or_keep(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn lower_first(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Forces the `+7` prefix, caps the length at [`PHONE_LEN`] and drops
/// anything after the prefix that is not a digit.
///
/// Leading `+` and `7` characters of an unprefixed value are treated as a
/// partial prefix and replaced.
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    let mut value = if raw.starts_with(PHONE_PREFIX) {
        raw.to_owned()
    } else {
        format!("{PHONE_PREFIX}{}", raw.trim_start_matches(['+', '7']))
    };

    if let Some((cut, _)) = value.char_indices().nth(PHONE_LEN) {
        value.truncate(cut);
    }

    // `+7` is ASCII, so byte offsets 1 and 2 are char boundaries.
    if !value[1..].chars().all(|c| c.is_ascii_digit()) {
        let digits: String = value[PHONE_PREFIX.len()..]
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        value = format!("{PHONE_PREFIX}{digits}");
    }

    value
}

#[must_use]
pub fn validate_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

/// Every character from index 1 must be a digit, which includes the `7` of
/// the prefix.
#[must_use]
pub fn validate_phone(value: &str) -> bool {
    value.starts_with(PHONE_PREFIX)
        && value.chars().count() == PHONE_LEN
        && value.chars().skip(1).all(|c| c.is_ascii_digit())
}

/// Checks all four constraints independently and reports each failure once,
/// in form order.
#[must_use]
pub fn validate_form(
    surname: &str,
    first_name: &str,
    phone: &str,
    shop: Option<Shop>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if !validate_name(surname) {
        errors.push(FieldError::InvalidSurname);
    }
    if !validate_name(first_name) {
        errors.push(FieldError::InvalidFirstName);
    }
    if !validate_phone(phone) {
        errors.push(FieldError::InvalidPhone);
    }
    if shop.is_none() {
        errors.push(FieldError::ShopNotSelected);
    }
    errors
}
