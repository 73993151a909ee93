use std::collections::BTreeMap;

use crate::field::FieldName;

/// Per-field validation messages. A field that passes has no entry.
///
/// Always derived from form values by [`Schema::validate`](super::Schema::validate);
/// it is never edited independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: FieldName, message: String) {
        self.0.insert(field, message);
    }

    /// The message for `field`, if it failed validation.
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in display order.
    pub fn fields(&self) -> Vec<FieldName> {
        self.0.keys().copied().collect()
    }

    /// The first failing field in display order (for focusing).
    pub fn first(&self) -> Option<(FieldName, &str)> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}
