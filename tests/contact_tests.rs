// Host-side tests for contact form validation.

use folio_core::constants::{STATUS_CLEAR_DELAY, SUCCESS_BACKGROUND, SUCCESS_COLOR, SUCCESS_MESSAGE};
use folio_core::{
    browser_trim, is_valid_email, plan_submit, validate, ContactSubmission, Field, FieldError,
    SubmitOutcome,
};

fn valid() -> ContactSubmission<'static> {
    ContactSubmission {
        name: "Ada Lovelace",
        email: "ada@example.com",
        subject: "Engines",
        message: "Let's build an analytical engine.",
    }
}

#[test]
fn accepts_a_complete_submission() {
    assert_eq!(validate(&valid()), Ok(()));
}

#[test]
fn empty_form_reports_every_field_once() {
    let errors = validate(&ContactSubmission::default()).unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError::NameRequired,
            FieldError::EmailRequired,
            FieldError::SubjectRequired,
            FieldError::MessageRequired,
        ]
    );
    let fields: Vec<Field> = errors.iter().map(FieldError::field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
}

#[test]
fn whitespace_only_counts_as_missing() {
    let sub = ContactSubmission {
        name: "   ",
        subject: "\t\n",
        ..valid()
    };
    let errors = validate(&sub).unwrap_err();
    assert_eq!(errors, vec![FieldError::NameRequired, FieldError::SubjectRequired]);
}

#[test]
fn short_message_is_rejected_with_length_error() {
    let sub = ContactSubmission {
        message: "  too short  ",
        ..valid()
    };
    let errors = validate(&sub).unwrap_err();
    assert_eq!(errors, vec![FieldError::MessageTooShort { min: 10 }]);
    assert_eq!(
        errors[0].to_string(),
        "Message must be at least 10 characters"
    );
}

#[test]
fn message_length_is_measured_after_trimming() {
    let exactly_ten = ContactSubmission {
        message: "   0123456789   ",
        ..valid()
    };
    assert!(validate(&exactly_ten).is_ok());

    let nine = ContactSubmission {
        message: "012345678          ",
        ..valid()
    };
    assert!(validate(&nine).is_err());
}

#[test]
fn message_length_counts_characters_not_bytes() {
    let sub = ContactSubmission {
        message: "ééééééééé", // nine characters, eighteen bytes
        ..valid()
    };
    assert_eq!(
        validate(&sub).unwrap_err(),
        vec![FieldError::MessageTooShort { min: 10 }]
    );
}

#[test]
fn malformed_email_gets_format_error() {
    for email in ["ada.example.com", "ada@example", "ada@", "@example.com", "a b@c.de"] {
        let sub = ContactSubmission { email, ..valid() };
        let errors = validate(&sub).unwrap_err();
        assert_eq!(errors, vec![FieldError::EmailInvalid], "email {email:?}");
        assert_eq!(errors[0].to_string(), "Please enter a valid email address");
    }
}

#[test]
fn email_format_is_checked_on_raw_value() {
    let sub = ContactSubmission {
        email: " ada@example.com",
        ..valid()
    };
    assert_eq!(validate(&sub).unwrap_err(), vec![FieldError::EmailInvalid]);
}

#[test]
fn email_pattern_edges() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@.c"));
}

#[test]
fn error_messages_match_inline_copy() {
    assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
    assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
    assert_eq!(FieldError::SubjectRequired.to_string(), "Subject is required");
    assert_eq!(FieldError::MessageRequired.to_string(), "Message is required");
}

#[test]
fn byte_order_mark_counts_as_whitespace() {
    let sub = ContactSubmission {
        name: "\u{FEFF}",
        subject: " \u{FEFF}\u{3000}",
        ..valid()
    };
    assert_eq!(
        validate(&sub).unwrap_err(),
        vec![FieldError::NameRequired, FieldError::SubjectRequired]
    );
    assert!(!is_valid_email("a\u{FEFF}@b.co"));
    assert!(!is_valid_email("a@b\u{00A0}c.co"));
}

#[test]
fn next_line_is_not_trimmed() {
    // U+0085 is Unicode whitespace but not browser whitespace.
    assert_eq!(browser_trim("\u{85}"), "\u{85}");
    assert_eq!(browser_trim("\u{FEFF} hi \u{2028}"), "hi");
}

#[test]
fn accepted_submission_shows_success_then_clears() {
    let SubmitOutcome::Accepted(plan) = plan_submit(&valid()) else {
        panic!("valid submission was rejected");
    };
    assert_eq!(plan.shown.text, SUCCESS_MESSAGE);
    assert_eq!(
        plan.shown.text,
        "Message sent successfully! I will get back to you soon."
    );
    assert_eq!(plan.shown.color, Some(SUCCESS_COLOR));
    assert_eq!(plan.shown.background, SUCCESS_BACKGROUND);
    assert!(plan.reset_form);
    assert_eq!(plan.clear_after, STATUS_CLEAR_DELAY);
    assert_eq!(plan.clear_after.as_millis(), 5000);
    assert_eq!(plan.cleared.text, "");
    assert_eq!(plan.cleared.background, "transparent");
    assert_eq!(plan.cleared.color, None);
}

#[test]
fn rejected_submission_carries_errors_and_no_plan() {
    let sub = ContactSubmission {
        message: "short",
        ..valid()
    };
    assert_eq!(
        plan_submit(&sub),
        SubmitOutcome::Rejected(vec![FieldError::MessageTooShort { min: 10 }])
    );
}
