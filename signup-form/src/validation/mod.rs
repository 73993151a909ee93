//! Declarative validation for the signup form.
//!
//! A [`Schema`] is an ordered list of rules per field. Validating a set of
//! values yields an [`ErrorMap`] carrying at most one message per field: the
//! message of the first rule that fails.
//!
//! # Example
//!
//! ```
//! use signup_form::FieldName;
//! use signup_form::validation::Schema;
//!
//! let schema = Schema::builder()
//!     .field(FieldName::Email)
//!         .required("Email is required")
//!         .email("Invalid email address")
//!     .field(FieldName::Password)
//!         .required("Password is required")
//!         .min_length(8, "Too short")
//!     .build();
//!
//! let errors = schema.validate(&Default::default());
//! assert_eq!(errors.get(FieldName::Email), Some("Email is required"));
//! ```

mod error;
mod errors;
pub mod messages;
mod schema;
mod signup;

pub use error::SchemaError;
pub use errors::ErrorMap;
pub use schema::{FieldBuilder, Schema, SchemaBuilder};
pub use signup::{PASSWORD_MIN_LENGTH, PASSWORD_SYMBOLS, signup_schema};
