//! Form controller: values, touched fields, derived errors and the submit gate.

use thiserror::Error;

use crate::field::{FieldName, FormValues, TouchedSet};
use crate::render::{FieldEvent, FieldProps};
use crate::submit::SubmitHandler;
use crate::validation::{ErrorMap, Schema};

/// Reasons a submit was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Nothing was edited yet.
    #[error("form has not been edited")]
    Pristine,
    /// At least one field fails validation.
    #[error("{} field(s) failed validation", fields.len())]
    Invalid {
        /// Failing fields in display order.
        fields: Vec<FieldName>,
    },
}

/// State of one editing session.
///
/// Errors are recomputed from the values on every change and never set
/// directly. Touching a field only affects whether its error is displayed.
///
/// # Example
///
/// ```
/// use signup_form::{FieldName, FormController, FormValues};
///
/// let mut form = FormController::new();
/// form.set_value(FieldName::FirstName, "Ada");
/// form.set_value(FieldName::LastName, "Lovelace");
/// form.set_value(FieldName::Email, "ada@x.com");
/// form.set_value(FieldName::Password, "Abcdef1!");
/// form.set_value(FieldName::TwitterHandle, "ada");
///
/// let mut submitted = Vec::new();
/// form.submit(&mut |values: FormValues| submitted.push(values)).unwrap();
/// assert_eq!(submitted.len(), 1);
/// ```
#[derive(Debug)]
pub struct FormController {
    schema: Schema,
    values: FormValues,
    touched: TouchedSet,
    errors: ErrorMap,
}

impl FormController {
    /// A controller using the signup rules.
    pub fn new() -> Self {
        Self::with_schema(crate::validation::signup_schema())
    }

    pub fn with_schema(schema: Schema) -> Self {
        let values = FormValues::default();
        let errors = schema.validate(&values);
        Self {
            schema,
            values,
            touched: TouchedSet::default(),
            errors,
        }
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Store a new value for `field` and recompute the errors.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors = self.schema.validate(&self.values);
        log::trace!(
            "set {}: {} error(s) after change",
            field,
            self.errors.len()
        );
    }

    /// Record that `field` lost focus. Errors are left untouched.
    pub fn mark_touched(&mut self, field: FieldName) {
        if self.touched.insert(field) {
            log::trace!("touched {}", field);
        }
    }

    /// Mark every field touched, revealing all current errors.
    pub fn touch_all(&mut self) {
        for field in FieldName::ALL {
            self.touched.insert(field);
        }
    }

    /// Route a renderer notification to the matching transition.
    pub fn apply(&mut self, field: FieldName, event: FieldEvent) {
        match event {
            FieldEvent::Change(value) => self.set_value(field, value),
            FieldEvent::Blur => self.mark_touched(field),
        }
    }

    /// Hand a snapshot of the values to `handler` if the gate is open.
    ///
    /// The controller keeps its values afterwards; call [`reset`](Self::reset)
    /// to start over.
    pub fn submit<H>(&self, handler: &mut H) -> Result<(), SubmitError>
    where
        H: SubmitHandler + ?Sized,
    {
        self.check_gate()?;
        log::debug!("submit accepted");
        handler.on_submit(self.values.clone());
        Ok(())
    }

    /// Discard the session: empty values and no touched fields.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched = TouchedSet::default();
        self.errors = self.schema.validate(&self.values);
        log::debug!("form reset");
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// The error to display: present only once the field was touched.
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(field)
    }

    /// Whether `field` differs from its initial empty value.
    pub fn is_dirty(&self, field: FieldName) -> bool {
        !self.values.get(field).is_empty()
    }

    pub fn is_form_dirty(&self) -> bool {
        FieldName::ALL.into_iter().any(|f| self.is_dirty(f))
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The submit gate: no errors and at least one edit.
    pub fn can_submit(&self) -> bool {
        self.check_gate().is_ok()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Renderer props for `field`, using its default presentation.
    pub fn field_props(&self, field: FieldName) -> FieldProps<'_> {
        FieldProps::new(field, self.values.get(field))
            .error(self.errors.get(field))
            .touched(self.is_touched(field))
    }

    fn check_gate(&self) -> Result<(), SubmitError> {
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid {
                fields: self.errors.fields(),
            });
        }
        if !self.is_form_dirty() {
            return Err(SubmitError::Pristine);
        }
        Ok(())
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
