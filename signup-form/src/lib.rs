//! Signup form state, validation and field rendering.
//!
//! The [`FormController`] owns one editing session: current values, the set
//! of touched fields and the errors derived from the values. Rendering reads
//! [`FieldProps`](render::FieldProps) from the controller and reports input
//! back as [`FieldEvent`](render::FieldEvent)s.

pub mod controller;
pub mod field;
pub mod language;
pub mod render;
pub mod submit;
pub mod validation;

pub use controller::{FormController, SubmitError};
pub use field::{FieldName, FormValues, TouchedSet};
pub use language::{LANGUAGES, Language};
pub use submit::{LogSubmitHandler, SubmitHandler};
pub use validation::{ErrorMap, Schema, signup_schema};

pub mod prelude {
    pub use crate::controller::{FormController, SubmitError};
    pub use crate::field::{FieldName, FormValues, TouchedSet};
    pub use crate::render::{
        Buffer, FieldEvent, FieldKind, FieldProps, Key, Modifiers, Palette, Rect, render_field,
    };
    pub use crate::submit::{LogSubmitHandler, SubmitHandler};
    pub use crate::validation::{ErrorMap, Schema, signup_schema};
}
