#![deny(missing_docs)]
//! Validation and normalization for the user supplied identifiers a profile
//! carries: the public handle, the contact email and the WhatsApp number.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HANDLE_REGEX: Regex =
        Regex::new(r"^[a-z0-9][a-z0-9_-]{2,31}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    )
    .unwrap();
    static ref WHATSAPP_REGEX: Regex = Regex::new(r"^[1-9][0-9]{6,14}$").unwrap();
}

/// Checks whether the given handle is valid.
///
/// A handle is 3 to 32 characters of lowercase ascii letters, digits,
/// underscores and hyphens, and starts with a letter or digit.
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_REGEX.is_match(handle)
}

/// Lowercases a handle, borrowing when it is already lowercase.
pub fn normalize_handle(handle: &str) -> Cow<'_, str> {
    if handle.chars().any(|c| c.is_ascii_uppercase()) {
        Cow::Owned(handle.to_ascii_lowercase())
    } else {
        Cow::Borrowed(handle)
    }
}

/// Checks whether the given email address is valid.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Lowercases an email address, borrowing when it is already lowercase.
pub fn normalize_email(email: &str) -> Cow<'_, str> {
    if email.chars().any(|c| c.is_ascii_uppercase()) {
        Cow::Owned(email.to_ascii_lowercase())
    } else {
        Cow::Borrowed(email)
    }
}

/// Strips formatting characters from a WhatsApp number and validates the
/// remaining digits as an international number without the leading plus.
///
/// Returns `None` when the number is not usable for a `wa.me` deep link.
pub fn normalize_whatsapp_number(number: &str) -> Option<String> {
    let digits: String = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.' | '+'))
        .collect();

    if digits.chars().all(|c| c.is_ascii_digit()) && WHATSAPP_REGEX.is_match(&digits) {
        Some(digits)
    } else {
        None
    }
}
