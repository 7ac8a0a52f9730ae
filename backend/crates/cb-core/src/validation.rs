//! Input rules shared by the controllers and every store implementation.
//!
//! Stores re-apply these rules at their boundary, so a client that skips
//! the form controller still cannot persist a blank title.

use crate::{CoreError, Result as CoreErrorResult};

pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const DEFAULT_MAX_INGREDIENTS: usize = 100;
pub const DEFAULT_MAX_INGREDIENT_LENGTH: usize = 1_000;
pub const DEFAULT_MAX_STEPS_LENGTH: usize = 20_000;
pub const DEFAULT_MAX_IMAGE_LENGTH: usize = 2_000_000;

/// Worst-case JSON bytes per character of text (`\uXXXX`).
const JSON_BYTES_PER_CHAR: usize = 6;
/// Room for keys, quotes, separators and the small credential fields.
const REQUEST_ENVELOPE_BYTES: usize = 64 * 1024;

/// Field limits applied to credentials and recipe payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_password_length: usize,
    pub max_title_length: usize,
    pub max_ingredients: usize,
    /// Characters per ingredient entry
    pub max_ingredient_length: usize,
    pub max_steps_length: usize,
    /// Data URIs count towards this limit
    pub max_image_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_ingredients: DEFAULT_MAX_INGREDIENTS,
            max_ingredient_length: DEFAULT_MAX_INGREDIENT_LENGTH,
            max_steps_length: DEFAULT_MAX_STEPS_LENGTH,
            max_image_length: DEFAULT_MAX_IMAGE_LENGTH,
        }
    }
}

impl ValidationRules {
    /// Largest request body that can still carry a payload inside these limits.
    ///
    /// Text fields are counted at their worst-case escaped size. The image is
    /// counted byte for byte plus the same escape allowance on its length.
    pub fn max_request_bytes(&self) -> usize {
        let text_chars = self.max_title_length
            + self.max_ingredients.saturating_mul(self.max_ingredient_length)
            + self.max_steps_length;

        text_chars
            .saturating_mul(JSON_BYTES_PER_CHAR)
            .saturating_add(self.max_image_length.saturating_mul(2))
            .saturating_add(REQUEST_ENVELOPE_BYTES)
    }
}

/// Split raw multi-line input into ingredient entries.
///
/// Each line is trimmed and blank lines are dropped. Order is kept and
/// duplicates are allowed.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Trim and lower-case an email, rejecting anything that is not `local@domain.tld`.
#[track_caller]
pub fn normalize_email(raw: &str) -> CoreErrorResult<String> {
    let email = raw.trim().to_lowercase();

    if email.is_empty() {
        return Err(CoreError::invalid_input("email", "Email is required."));
    }

    let well_formed = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !well_formed {
        return Err(CoreError::invalid_input(
            "email",
            format!("'{email}' is not a valid email address."),
        ));
    }

    Ok(email)
}

/// Sign-in only requires a password to be present.
#[track_caller]
pub fn require_password(password: &str) -> CoreErrorResult<()> {
    if password.is_empty() {
        return Err(CoreError::invalid_input("password", "Password is required."));
    }
    Ok(())
}

/// Sign-up enforces the configured minimum length.
#[track_caller]
pub fn validate_new_password(password: &str, rules: &ValidationRules) -> CoreErrorResult<()> {
    if password.chars().count() < rules.min_password_length {
        return Err(CoreError::invalid_input(
            "password",
            format!(
                "Password must be at least {} characters.",
                rules.min_password_length
            ),
        ));
    }
    Ok(())
}

pub fn normalize_display_name(raw: &str) -> String {
    raw.trim().to_string()
}
