use signup_form::render::FieldEvent;
use signup_form::validation::messages::*;
use signup_form::validation::Schema;
use signup_form::{FieldName, FormController, FormValues, SubmitError};

fn fill_valid(form: &mut FormController) {
    form.set_value(FieldName::FirstName, "Ada");
    form.set_value(FieldName::LastName, "Lovelace");
    form.set_value(FieldName::Email, "ada@x.com");
    form.set_value(FieldName::Password, "Abcdef1!");
    form.set_value(FieldName::TwitterHandle, "ada");
}

fn submit_collecting(form: &FormController) -> (Result<(), SubmitError>, Vec<FormValues>) {
    let mut submitted = Vec::new();
    let result = form.submit(&mut |values: FormValues| submitted.push(values));
    (result, submitted)
}

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn test_new_session_is_empty() {
    let form = FormController::new();

    assert_eq!(form.values(), &FormValues::default());
    assert!(form.touched().is_empty());
    assert!(!form.is_form_dirty());
    assert_eq!(form.errors().len(), 5);
}

#[test]
fn test_gate_closed_for_pristine_form() {
    let form = FormController::new();
    assert!(!form.can_submit());

    let (result, submitted) = submit_collecting(&form);
    assert!(matches!(result, Err(SubmitError::Invalid { .. })));
    assert!(submitted.is_empty());
}

#[test]
fn test_gate_closed_for_pristine_form_without_errors() {
    // Vacuously valid but never edited.
    let form = FormController::with_schema(Schema::empty());
    assert!(form.is_valid());
    assert!(!form.can_submit());

    let (result, submitted) = submit_collecting(&form);
    assert_eq!(result, Err(SubmitError::Pristine));
    assert!(submitted.is_empty());
}

// ============================================================================
// Transitions
// ============================================================================

#[test]
fn test_set_value_recomputes_errors() {
    let mut form = FormController::new();
    assert_eq!(form.error(FieldName::Email), Some(EMAIL_REQUIRED));

    form.set_value(FieldName::Email, "not-an-email");
    assert_eq!(form.error(FieldName::Email), Some(EMAIL_INVALID));

    form.set_value(FieldName::Email, "ada@x.com");
    assert_eq!(form.error(FieldName::Email), None);

    form.set_value(FieldName::Email, "");
    assert_eq!(form.error(FieldName::Email), Some(EMAIL_REQUIRED));
}

#[test]
fn test_errors_are_a_function_of_values() {
    let mut form = FormController::new();
    fill_valid(&mut form);
    form.set_value(FieldName::Password, "abc");

    let expected = form.schema().validate(form.values());
    assert_eq!(form.errors(), &expected);
}

#[test]
fn test_mark_touched_does_not_change_errors() {
    let mut form = FormController::new();
    form.set_value(FieldName::Email, "not-an-email");

    let before = form.errors().clone();
    form.mark_touched(FieldName::Email);
    form.mark_touched(FieldName::Password);
    assert_eq!(form.errors(), &before);
}

#[test]
fn test_touched_set_is_append_only() {
    let mut form = FormController::new();
    form.mark_touched(FieldName::FirstName);
    form.mark_touched(FieldName::FirstName);
    form.set_value(FieldName::FirstName, "Ada");
    form.set_value(FieldName::FirstName, "");

    assert!(form.is_touched(FieldName::FirstName));
    assert_eq!(form.touched().len(), 1);
}

#[test]
fn test_visible_error_requires_touch() {
    let mut form = FormController::new();
    form.set_value(FieldName::Email, "not-an-email");
    assert_eq!(form.visible_error(FieldName::Email), None);

    form.mark_touched(FieldName::Email);
    assert_eq!(form.visible_error(FieldName::Email), Some(EMAIL_INVALID));
}

#[test]
fn test_touch_all_reveals_every_error() {
    let mut form = FormController::new();
    form.touch_all();

    for field in FieldName::ALL {
        assert!(form.is_touched(field));
        assert!(form.visible_error(field).is_some(), "{field}");
    }
}

#[test]
fn test_apply_routes_field_events() {
    let mut form = FormController::new();
    form.apply(FieldName::LastName, FieldEvent::Change("Love".to_string()));
    assert_eq!(form.value(FieldName::LastName), "Love");
    assert!(!form.is_touched(FieldName::LastName));

    form.apply(FieldName::LastName, FieldEvent::Blur);
    assert!(form.is_touched(FieldName::LastName));
    assert_eq!(form.value(FieldName::LastName), "Love");
}

#[test]
fn test_dirty_tracking() {
    let mut form = FormController::new();
    form.set_value(FieldName::TwitterHandle, "ada");
    assert!(form.is_dirty(FieldName::TwitterHandle));
    assert!(!form.is_dirty(FieldName::Email));
    assert!(form.is_form_dirty());

    form.set_value(FieldName::TwitterHandle, "");
    assert!(!form.is_form_dirty());
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_end_to_end_valid_submission() {
    let mut form = FormController::new();
    fill_valid(&mut form);

    assert!(form.errors().is_empty());
    assert!(form.can_submit());

    let (result, submitted) = submit_collecting(&form);
    assert_eq!(result, Ok(()));
    assert_eq!(
        submitted,
        vec![FormValues {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            password: "Abcdef1!".to_string(),
            twitter_handle: "ada".to_string(),
        }]
    );
}

#[test]
fn test_submission_serializes_with_field_keys() {
    let mut form = FormController::new();
    fill_valid(&mut form);

    let (_, submitted) = submit_collecting(&form);
    let json = serde_json::to_value(&submitted[0]).expect("serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com",
            "password": "Abcdef1!",
            "twitterHandle": "ada",
        })
    );
}

#[test]
fn test_malformed_email_closes_gate() {
    let mut form = FormController::new();
    fill_valid(&mut form);
    form.set_value(FieldName::Email, "not-an-email");

    assert_eq!(form.error(FieldName::Email), Some(EMAIL_INVALID));
    assert!(!form.can_submit());

    let (result, submitted) = submit_collecting(&form);
    assert_eq!(
        result,
        Err(SubmitError::Invalid {
            fields: vec![FieldName::Email]
        })
    );
    assert!(submitted.is_empty());
}

#[test]
fn test_empty_required_field_closes_gate() {
    let mut form = FormController::new();
    fill_valid(&mut form);
    form.set_value(FieldName::LastName, "");
    assert!(!form.can_submit());
}

#[test]
fn test_submit_does_not_reset() {
    let mut form = FormController::new();
    fill_valid(&mut form);
    form.mark_touched(FieldName::Email);

    let before = form.values().clone();
    let (result, _) = submit_collecting(&form);
    assert!(result.is_ok());
    assert_eq!(form.values(), &before);
    assert!(form.is_touched(FieldName::Email));

    // A second submit hands over the same values again.
    let (result, submitted) = submit_collecting(&form);
    assert!(result.is_ok());
    assert_eq!(submitted, vec![before]);
}

#[test]
fn test_reset_starts_new_session() {
    let mut form = FormController::new();
    fill_valid(&mut form);
    form.touch_all();

    form.reset();
    assert_eq!(form.values(), &FormValues::default());
    assert!(form.touched().is_empty());
    assert_eq!(form.error(FieldName::FirstName), Some(FIRST_NAME_REQUIRED));
    assert!(!form.can_submit());
}

#[test]
fn test_submit_error_display() {
    let err = SubmitError::Invalid {
        fields: vec![FieldName::Email, FieldName::Password],
    };
    assert_eq!(err.to_string(), "2 field(s) failed validation");
    assert_eq!(SubmitError::Pristine.to_string(), "form has not been edited");
}

#[test]
fn test_field_props_reflect_state() {
    let mut form = FormController::new();
    form.set_value(FieldName::Email, "nope");

    let props = form.field_props(FieldName::Email);
    assert_eq!(props.value, "nope");
    assert_eq!(props.error, Some(EMAIL_INVALID));
    assert!(!props.error_visible());

    form.mark_touched(FieldName::Email);
    let props = form.field_props(FieldName::Email);
    assert!(props.error_visible());
    assert_eq!(props.label, "Email");
}
