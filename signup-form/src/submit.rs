//! The collaborator that receives form values on a successful submit.

use crate::field::FormValues;

/// Receives a snapshot of the form values when submit passes the gate.
///
/// Closures taking `FormValues` implement this trait, so tests can capture
/// submissions with `|values| captured.push(values)`.
pub trait SubmitHandler {
    fn on_submit(&mut self, values: FormValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(FormValues),
{
    fn on_submit(&mut self, values: FormValues) {
        self(values)
    }
}

/// Writes submitted values to the log as JSON. The password is masked.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmitHandler;

impl SubmitHandler for LogSubmitHandler {
    fn on_submit(&mut self, values: FormValues) {
        match masked_json(&values) {
            Ok(json) => log::info!("Form submitted: {}", json),
            Err(e) => log::warn!("Form submitted but values could not be serialized: {}", e),
        }
    }
}

/// Serialize `values` with every password character replaced by `*`.
fn masked_json(values: &FormValues) -> serde_json::Result<String> {
    let mut masked = values.clone();
    masked.password = "*".repeat(values.password.chars().count());
    serde_json::to_string(&masked)
}
