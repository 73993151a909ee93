//! Messages produced by [`signup_schema`](super::signup_schema).

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const TWITTER_HANDLE_REQUIRED: &str = "Twitter handle is required";

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email address";

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_UPPERCASE: &str = "Password must contain an uppercase letter";
pub const PASSWORD_LOWERCASE: &str = "Password must contain a lowercase letter";
pub const PASSWORD_DIGIT: &str = "Password must contain a number";
pub const PASSWORD_SYMBOL: &str = "Password must contain a special character (!@#$%^&*)";
pub const PASSWORD_LENGTH: &str = "Password must be at least 8 characters";
