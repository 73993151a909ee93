//! Field identity and per-session value/touched storage.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// One of the signup form's fields.
///
/// The declaration order is the display order and the order errors are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    TwitterHandle,
}

impl FieldName {
    /// Every field, in display order.
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
        FieldName::TwitterHandle,
    ];

    /// Wire key, matching the serialized `FormValues` keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::TwitterHandle => "twitterHandle",
        }
    }

    /// Human-readable label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::TwitterHandle => "Twitter handle",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every field. The empty string is the unset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub twitter_handle: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::TwitterHandle => &self.twitter_handle,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Builder-style setter, handy for constructing fixtures.
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Iterate `(field, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    fn slot(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::TwitterHandle => &mut self.twitter_handle,
        }
    }
}

/// Fields the user has visited and left at least once.
///
/// Append-only: there is no way to remove a single field. A new session
/// starts from `TouchedSet::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet(BTreeSet<FieldName>);

impl TouchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the field was not touched before.
    pub fn insert(&mut self, field: FieldName) -> bool {
        self.0.insert(field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.iter().copied()
    }
}
