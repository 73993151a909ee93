use super::messages::*;
use super::schema::Schema;
use crate::field::FieldName;

/// Characters accepted by the password symbol rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Rules for the signup form.
///
/// Password precedence: required, uppercase, lowercase, digit, symbol, length.
pub fn signup_schema() -> Schema {
    Schema::builder()
        .field(FieldName::FirstName)
        .required(FIRST_NAME_REQUIRED)
        .field(FieldName::LastName)
        .required(LAST_NAME_REQUIRED)
        .field(FieldName::Email)
        .required(EMAIL_REQUIRED)
        .email(EMAIL_INVALID)
        .field(FieldName::Password)
        .required(PASSWORD_REQUIRED)
        .uppercase(PASSWORD_UPPERCASE)
        .lowercase(PASSWORD_LOWERCASE)
        .digit(PASSWORD_DIGIT)
        .symbol(PASSWORD_SYMBOLS, PASSWORD_SYMBOL)
        .min_length(PASSWORD_MIN_LENGTH, PASSWORD_LENGTH)
        .field(FieldName::TwitterHandle)
        .required(TWITTER_HANDLE_REQUIRED)
        .build()
}
