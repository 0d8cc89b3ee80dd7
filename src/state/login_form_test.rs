use super::*;
use crate::util::validation::{EMAIL_ERROR, PASSWORD_POLICY_ERROR, PASSWORD_REQUIRED_ERROR};

fn policy() -> PasswordPolicy {
    PasswordPolicy::default()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_seeds_email_and_defaults_everything_else() {
    let state = LoginFormState::new("bob@example.com", &policy());
    assert_eq!(state.email(), "bob@example.com");
    assert_eq!(state.password(), "");
    assert!(!state.remember_me());
    assert!(!state.submitting());
    assert!(!state.submit_attempted());
    assert_eq!(state.focused_field(), None);
    assert_eq!(state.external_error(), "");
    assert_eq!(state.validation_errors(), &FieldMap::default());
}

#[test]
fn new_derives_validity_from_seed() {
    let state = LoginFormState::new("bob@example.com", &policy());
    assert!(state.field_validity().email);
    assert!(!state.field_validity().password);

    let empty = LoginFormState::new("", &policy());
    assert!(!empty.field_validity().email);
}

// =============================================================
// set_field / derived validity
// =============================================================

#[test]
fn set_field_recomputes_validity_without_showing_errors() {
    let mut state = LoginFormState::new("", &policy());
    state.set_field(Field::Email, "nope", &policy());
    assert!(!state.field_validity().email);
    assert_eq!(state.error(Field::Email), "");

    state.set_field(Field::Email, "bob@example.com", &policy());
    assert!(state.field_validity().email);
}

#[test]
fn validity_tracks_values_after_every_edit() {
    let mut state = LoginFormState::new("", &policy());
    for (value, expected) in [("a", false), ("a@b", false), ("a@b.c", true), ("a@b.c ", false)] {
        state.set_field(Field::Email, value, &policy());
        assert_eq!(state.field_validity().email, expected, "{value:?}");
        assert_eq!(state.field_validity(), &derive_validity(&state, &policy()));
    }
}

#[test]
fn set_remember_me_does_not_touch_validation() {
    let mut state = LoginFormState::new("", &policy());
    state.set_remember_me(true);
    assert!(state.remember_me());
    assert_eq!(state.validation_errors(), &FieldMap::default());
    assert!(!state.is_touched(Field::Email));
}

// =============================================================
// focus / blur
// =============================================================

#[test]
fn focus_tracks_current_field() {
    let mut state = LoginFormState::new("", &policy());
    state.focus(Field::Email);
    assert_eq!(state.focused_field(), Some(Field::Email));
    state.focus(Field::Password);
    assert_eq!(state.focused_field(), Some(Field::Password));
}

#[test]
fn blur_clears_focus_only_for_that_field() {
    let mut state = LoginFormState::new("", &policy());
    state.focus(Field::Password);
    state.blur(Field::Email, &policy());
    assert_eq!(state.focused_field(), Some(Field::Password));
    state.blur(Field::Password, &policy());
    assert_eq!(state.focused_field(), None);
}

#[test]
fn blur_with_invalid_value_shows_message_before_submit() {
    let mut state = LoginFormState::new("", &policy());
    state.set_field(Field::Email, "bob", &policy());
    state.focus(Field::Email);
    state.blur(Field::Email, &policy());
    assert!(state.is_touched(Field::Email));
    assert_eq!(state.error(Field::Email), EMAIL_ERROR);
    assert_eq!(state.error(Field::Password), "");
}

#[test]
fn editing_touched_field_to_valid_clears_message_without_blur() {
    let mut state = LoginFormState::new("", &policy());
    state.set_field(Field::Email, "bob", &policy());
    state.focus(Field::Email);
    state.blur(Field::Email, &policy());
    state.focus(Field::Email);
    state.set_field(Field::Email, "bob@example.com", &policy());
    assert_eq!(state.error(Field::Email), "");
}

#[test]
fn editing_touched_field_to_invalid_shows_message_without_blur() {
    let mut state = LoginFormState::new("bob@example.com", &policy());
    state.blur(Field::Email, &policy());
    assert_eq!(state.error(Field::Email), "");
    state.set_field(Field::Email, "bob@", &policy());
    assert_eq!(state.error(Field::Email), EMAIL_ERROR);
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_reports_each_failing_field() {
    let mut state = LoginFormState::new("", &policy());
    assert!(!state.validate(&policy()));
    assert_eq!(state.error(Field::Email), EMAIL_ERROR);
    assert_eq!(state.error(Field::Password), PASSWORD_REQUIRED_ERROR);
}

#[test]
fn validate_clears_messages_for_passing_fields() {
    let mut state = LoginFormState::new("", &policy());
    state.validate(&policy());
    state.set_field(Field::Email, "bob@example.com", &policy());
    state.set_field(Field::Password, "x", &policy());
    assert!(state.validate(&policy()));
    assert_eq!(state.validation_errors(), &FieldMap::default());
}

#[test]
fn editing_to_valid_after_validate_clears_message() {
    let mut state = LoginFormState::new("", &policy());
    state.validate(&policy());
    assert_eq!(state.error(Field::Email), EMAIL_ERROR);

    state.set_field(Field::Email, "bob@example.com", &policy());
    assert!(state.field_validity().email);
    assert_eq!(state.error(Field::Email), "");
    assert_eq!(state.error(Field::Password), PASSWORD_REQUIRED_ERROR);
}

#[test]
fn validate_uses_custom_password_policy() {
    let strict = PasswordPolicy::min_length(8);
    let mut state = LoginFormState::new("bob@example.com", &strict);
    state.set_field(Field::Password, "short", &strict);
    assert!(!state.validate(&strict));
    assert_eq!(state.error(Field::Password), PASSWORD_POLICY_ERROR);
    assert_eq!(state.error(Field::Email), "");
}

// =============================================================
// begin_submit / finish_submit
// =============================================================

#[test]
fn begin_submit_with_missing_password_fails_on_password_only() {
    let mut state = LoginFormState::new("bob@example.com", &policy());
    assert_eq!(state.begin_submit(&policy()), SubmitStart::Invalid);
    assert!(!state.submitting());
    assert_eq!(state.error(Field::Email), "");
    assert_eq!(state.error(Field::Password), PASSWORD_REQUIRED_ERROR);
}

#[test]
fn begin_submit_touches_both_fields() {
    let mut state = LoginFormState::new("", &policy());
    state.begin_submit(&policy());
    assert!(state.is_touched(Field::Email));
    assert!(state.is_touched(Field::Password));
    assert!(state.submit_attempted());
}

#[test]
fn begin_submit_returns_snapshot_and_marks_submitting() {
    let mut state = LoginFormState::new("bob@example.com", &policy());
    state.set_field(Field::Password, "x", &policy());
    let start = state.begin_submit(&policy());
    assert_eq!(
        start,
        SubmitStart::Started(LoginFormData {
            email: "bob@example.com".to_owned(),
            password: "x".to_owned(),
            remember_me: false,
        })
    );
    assert!(state.submitting());
}

#[test]
fn begin_submit_guards_reentry() {
    let mut state = LoginFormState::new("bob@example.com", &policy());
    state.set_field(Field::Password, "x", &policy());
    assert!(matches!(state.begin_submit(&policy()), SubmitStart::Started(_)));
    assert_eq!(state.begin_submit(&policy()), SubmitStart::InFlight);
    assert!(state.submitting());
}

#[test]
fn edits_while_submitting_are_accepted() {
    let mut state = LoginFormState::new("bob@example.com", &policy());
    state.set_field(Field::Password, "x", &policy());
    state.begin_submit(&policy());
    state.set_field(Field::Password, "", &policy());
    assert_eq!(state.error(Field::Password), PASSWORD_REQUIRED_ERROR);
    assert!(state.submitting());
}

#[test]
fn finish_submit_keeps_field_messages() {
    let mut state = LoginFormState::new("bob@example.com", &policy());
    state.set_field(Field::Password, "x", &policy());
    state.begin_submit(&policy());
    let errors = state.validation_errors().clone();
    state.finish_submit();
    assert!(!state.submitting());
    assert_eq!(state.validation_errors(), &errors);
}

#[test]
fn edits_after_submit_attempt_refresh_untouched_messages() {
    let mut state = LoginFormState::new("", &policy());
    state.begin_submit(&policy());
    state.set_field(Field::Email, "bob@example.com", &policy());
    assert_eq!(state.error(Field::Email), "");
    assert_eq!(state.error(Field::Password), PASSWORD_REQUIRED_ERROR);
}

// =============================================================
// External error channel
// =============================================================

#[test]
fn external_error_is_independent_of_field_errors() {
    let mut state = LoginFormState::new("", &policy());
    state.set_external_error("Invalid credentials");
    assert!(!state.validate(&policy()));
    assert_eq!(state.external_error(), "Invalid credentials");
    state.set_external_error("");
    assert_eq!(state.error(Field::Email), EMAIL_ERROR);
}

#[test]
fn login_form_data_serializes_camel_case() {
    let data = LoginFormData {
        email: "a@b.co".to_owned(),
        password: "x".to_owned(),
        remember_me: true,
    };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["rememberMe"], true);
    assert_eq!(json["email"], "a@b.co");
}
