//! Contact extraction: the first email address and the first phone-shaped number in the text.
//!
//! Matches are taken verbatim and never validated. A date or ID that happens to look like
//! `123-4567` counts as a phone number.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NOT_FOUND: &str = "Not Found";
pub const POINTS_PER_FIELD: u32 = 15;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Optional area code (with or without parentheses), then 3 + 4 digits with optional
/// space / dot / hyphen separators.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}").unwrap());

/// Leftmost email-shaped substring.
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

/// Leftmost phone-shaped substring.
pub fn find_phone(text: &str) -> Option<&str> {
    PHONE_RE.find(text).map(|m| m.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCheck {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactCheck {
    pub fn run(text: &str) -> Self {
        Self {
            email: find_email(text).map(str::to_string),
            phone: find_phone(text).map(str::to_string),
        }
    }

    pub fn email_points(&self) -> u32 {
        if self.email.is_some() {
            POINTS_PER_FIELD
        } else {
            0
        }
    }

    pub fn phone_points(&self) -> u32 {
        if self.phone.is_some() {
            POINTS_PER_FIELD
        } else {
            0
        }
    }

    pub fn points(&self) -> u32 {
        self.email_points() + self.phone_points()
    }

    pub fn email_note(&self) -> &'static str {
        if self.email.is_some() {
            "✔️ Email found."
        } else {
            "❌ Email not found. ATS may miss it."
        }
    }

    pub fn phone_note(&self) -> &'static str {
        if self.phone.is_some() {
            "✔️ Phone number found."
        } else {
            "❌ Phone number not found."
        }
    }

    pub fn email_or_placeholder(&self) -> String {
        self.email.clone().unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn phone_or_placeholder(&self) -> String {
        self.phone.clone().unwrap_or_else(|| NOT_FOUND.to_string())
    }
}
