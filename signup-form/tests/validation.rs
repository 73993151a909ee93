use signup_form::validation::messages::*;
use signup_form::validation::{Schema, SchemaError, signup_schema};
use signup_form::{FieldName, FormValues};

fn valid_values() -> FormValues {
    FormValues::new()
        .with(FieldName::FirstName, "Ada")
        .with(FieldName::LastName, "Lovelace")
        .with(FieldName::Email, "ada@x.com")
        .with(FieldName::Password, "Abcdef1!")
        .with(FieldName::TwitterHandle, "ada")
}

fn password_error(password: &str) -> Option<String> {
    let values = valid_values().with(FieldName::Password, password);
    signup_schema()
        .validate(&values)
        .get(FieldName::Password)
        .map(str::to_string)
}

// ============================================================================
// Required rules
// ============================================================================

#[test]
fn test_empty_form_reports_required_for_every_field() {
    let errors = signup_schema().validate(&FormValues::default());

    assert_eq!(errors.len(), 5);
    assert_eq!(errors.get(FieldName::FirstName), Some(FIRST_NAME_REQUIRED));
    assert_eq!(errors.get(FieldName::LastName), Some(LAST_NAME_REQUIRED));
    assert_eq!(errors.get(FieldName::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(FieldName::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(
        errors.get(FieldName::TwitterHandle),
        Some(TWITTER_HANDLE_REQUIRED)
    );
}

#[test]
fn test_whitespace_counts_as_content() {
    let values = valid_values()
        .with(FieldName::FirstName, "   ")
        .with(FieldName::LastName, "\t")
        .with(FieldName::TwitterHandle, " ");

    let errors = signup_schema().validate(&values);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_valid_values_produce_no_errors() {
    let errors = signup_schema().validate(&valid_values());
    assert!(errors.is_empty());
    assert_eq!(errors.first(), None);
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_email_required_takes_precedence() {
    let values = valid_values().with(FieldName::Email, "");
    let errors = signup_schema().validate(&values);
    assert_eq!(errors.get(FieldName::Email), Some(EMAIL_REQUIRED));
}

#[test]
fn test_email_malformed() {
    for email in [
        "not-an-email",
        "ada@",
        "@x.com",
        "ada@x",
        "a@@x.com",
        "Ada <ada@x.com>",
        "ada@[127.0.0.1]",
        "\"a b\"@x.com",
    ] {
        let values = valid_values().with(FieldName::Email, email);
        let errors = signup_schema().validate(&values);
        assert_eq!(
            errors.get(FieldName::Email),
            Some(EMAIL_INVALID),
            "expected {email:?} to be rejected"
        );
    }
}

#[test]
fn test_email_accepted() {
    for email in ["ada@x.com", "ada.lovelace+list@example.co.uk"] {
        let values = valid_values().with(FieldName::Email, email);
        let errors = signup_schema().validate(&values);
        assert_eq!(errors.get(FieldName::Email), None, "{email:?}");
    }
}

// ============================================================================
// Password
// ============================================================================

#[test]
fn test_password_precedence_order() {
    assert_eq!(password_error("").as_deref(), Some(PASSWORD_REQUIRED));
    assert_eq!(password_error("abc").as_deref(), Some(PASSWORD_UPPERCASE));
    assert_eq!(password_error("ABC").as_deref(), Some(PASSWORD_LOWERCASE));
    assert_eq!(password_error("Abc").as_deref(), Some(PASSWORD_DIGIT));
    assert_eq!(password_error("Abc1").as_deref(), Some(PASSWORD_SYMBOL));
    assert_eq!(password_error("Abc1!").as_deref(), Some(PASSWORD_LENGTH));
}

#[test]
fn test_password_accepted() {
    assert_eq!(password_error("Abcdefg1!"), None);
    assert_eq!(password_error("Abcdef1!"), None);
}

#[test]
fn test_password_symbol_set_is_fixed() {
    // `?` is not in the accepted set.
    assert_eq!(password_error("Abcdefg1?").as_deref(), Some(PASSWORD_SYMBOL));
    for symbol in "!@#$%^&*".chars() {
        let password = format!("Abcdefg1{symbol}");
        assert_eq!(password_error(&password), None, "{password:?}");
    }
}

#[test]
fn test_password_length_counts_characters() {
    // Seven characters, one of them multi-byte.
    assert_eq!(password_error("Abcdé1!").as_deref(), Some(PASSWORD_LENGTH));
}

#[test]
fn test_field_errors_lists_every_failure_in_order() {
    let schema = signup_schema();
    assert_eq!(
        schema.field_errors(FieldName::Password, "abc"),
        vec![PASSWORD_UPPERCASE, PASSWORD_DIGIT, PASSWORD_SYMBOL, PASSWORD_LENGTH]
    );
    assert_eq!(
        schema.field_errors(FieldName::Password, ""),
        vec![PASSWORD_REQUIRED]
    );
    assert!(schema.field_errors(FieldName::Password, "Abcdef1!").is_empty());
}

#[test]
fn test_validate_field_matches_validate() {
    let schema = signup_schema();
    let values = valid_values().with(FieldName::Email, "nope");
    let errors = schema.validate(&values);
    for (field, value) in values.iter() {
        assert_eq!(schema.validate_field(field, value), errors.get(field));
    }
}

// ============================================================================
// Determinism and custom schemas
// ============================================================================

#[test]
fn test_validate_is_deterministic() {
    let schema = signup_schema();
    let values = valid_values()
        .with(FieldName::Email, "not-an-email")
        .with(FieldName::Password, "abc");

    let first = schema.validate(&values);
    let second = schema.validate(&values);
    let third = signup_schema().validate(&values);
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_field_without_rules_is_always_valid() {
    let schema = Schema::builder()
        .field(FieldName::Email)
        .required("needed")
        .build();

    assert!(!schema.has_rules(FieldName::FirstName));
    assert_eq!(schema.validate_field(FieldName::FirstName, ""), None);

    let errors = schema.validate(&FormValues::default());
    assert_eq!(errors.fields(), vec![FieldName::Email]);
}

#[test]
fn test_empty_schema_accepts_everything() {
    let errors = Schema::empty().validate(&FormValues::default());
    assert!(errors.is_empty());
}

#[test]
fn test_declaring_field_twice_appends_rules() {
    let schema = Schema::builder()
        .field(FieldName::TwitterHandle)
        .required("required")
        .field(FieldName::FirstName)
        .required("first")
        .field(FieldName::TwitterHandle)
        .max_length(3, "too long")
        .build();

    assert_eq!(schema.validate_field(FieldName::TwitterHandle, ""), Some("required"));
    assert_eq!(
        schema.validate_field(FieldName::TwitterHandle, "abcd"),
        Some("too long")
    );
    assert_eq!(schema.validate_field(FieldName::TwitterHandle, "abc"), None);
}

#[test]
fn test_try_matches_pattern() {
    let schema = Schema::builder()
        .field(FieldName::TwitterHandle)
        .required("required")
        .try_matches(r"^[A-Za-z0-9_]{1,15}$", "invalid handle")
        .expect("pattern compiles")
        .build();

    assert_eq!(schema.validate_field(FieldName::TwitterHandle, "ada_l"), None);
    assert_eq!(
        schema.validate_field(FieldName::TwitterHandle, "@ada"),
        Some("invalid handle")
    );
    // Pattern rules do not fire on empty input.
    assert_eq!(
        schema.validate_field(FieldName::TwitterHandle, ""),
        Some("required")
    );
}

#[test]
fn test_try_matches_reports_bad_pattern() {
    let result = Schema::builder()
        .field(FieldName::TwitterHandle)
        .try_matches("(unclosed", "never");

    match result {
        Err(SchemaError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        Ok(_) => panic!("expected an invalid pattern error"),
    }
}

#[test]
fn test_custom_rule() {
    let schema = Schema::builder()
        .field(FieldName::LastName)
        .rule(|v| v != "admin", "reserved name")
        .build();

    assert_eq!(
        schema.validate_field(FieldName::LastName, "admin"),
        Some("reserved name")
    );
    assert_eq!(schema.validate_field(FieldName::LastName, "Lovelace"), None);
}
