//! Contact form validation.

use crate::constants::{
    MESSAGE_MIN_CHARS, STATUS_CLEAR_DELAY, SUCCESS_BACKGROUND, SUCCESS_COLOR, SUCCESS_MESSAGE,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;

// Browser whitespace: ASCII spaces and line breaks, NBSP, BOM, LS/PS and the
// Zs block. Unicode White_Space differs (it has U+0085, lacks U+FEFF).
const BROWSER_SPACE_CLASS: &str = concat!(
    r"\t\x0B\x0C \xA0\x{FEFF}\n\r\x{2028}\x{2029}",
    r"\x{1680}\x{2000}-\x{200A}\x{202F}\x{205F}\x{3000}",
);

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{BROWSER_SPACE_CLASS}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

#[inline]
pub fn is_browser_space(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\u{B}'
            | '\u{C}'
            | ' '
            | '\u{A0}'
            | '\u{FEFF}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Trim the way form inputs are trimmed in the browser.
#[inline]
pub fn browser_trim(s: &str) -> &str {
    s.trim_matches(is_browser_space)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

/// A failed check on one field. The display text is shown inline to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Subject is required")]
    SubjectRequired,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::SubjectRequired => Field::Subject,
            FieldError::MessageRequired | FieldError::MessageTooShort { .. } => Field::Message,
        }
    }
}

/// Raw field values as read from the form.
#[derive(Clone, Debug, Default)]
pub struct ContactSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check every field; at most one error per field, in field order.
pub fn validate(submission: &ContactSubmission<'_>) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if browser_trim(submission.name).is_empty() {
        errors.push(FieldError::NameRequired);
    }

    // Format is checked on the raw value, so surrounding whitespace is rejected.
    if browser_trim(submission.email).is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(submission.email) {
        errors.push(FieldError::EmailInvalid);
    }

    if browser_trim(submission.subject).is_empty() {
        errors.push(FieldError::SubjectRequired);
    }

    let message = browser_trim(submission.message);
    if message.is_empty() {
        errors.push(FieldError::MessageRequired);
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        errors.push(FieldError::MessageTooShort {
            min: MESSAGE_MIN_CHARS,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// How the status line looks. `color: None` leaves the current color alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusStyle {
    pub text: &'static str,
    pub color: Option<&'static str>,
    pub background: &'static str,
}

/// What the page does after an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessPlan {
    pub shown: StatusStyle,
    pub reset_form: bool,
    pub clear_after: Duration,
    pub cleared: StatusStyle,
}

impl Default for SuccessPlan {
    fn default() -> Self {
        Self {
            shown: StatusStyle {
                text: SUCCESS_MESSAGE,
                color: Some(SUCCESS_COLOR),
                background: SUCCESS_BACKGROUND,
            },
            reset_form: true,
            clear_after: STATUS_CLEAR_DELAY,
            cleared: StatusStyle {
                text: "",
                color: None,
                background: "transparent",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Vec<FieldError>),
    Accepted(SuccessPlan),
}

pub fn plan_submit(submission: &ContactSubmission<'_>) -> SubmitOutcome {
    match validate(submission) {
        Ok(()) => SubmitOutcome::Accepted(SuccessPlan::default()),
        Err(errors) => SubmitOutcome::Rejected(errors),
    }
}
