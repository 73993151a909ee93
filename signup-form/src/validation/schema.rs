//! Schema builder for the fluent validation API.

use std::fmt;

use email_address::{EmailAddress, Options};
use regex::Regex;

use super::error::SchemaError;
use super::errors::ErrorMap;
use crate::field::{FieldName, FormValues};

/// Type alias for rule predicates.
type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct Rule {
    check: Predicate,
    message: String,
}

impl Rule {
    fn evaluate(&self, value: &str) -> Option<&str> {
        if (self.check)(value) {
            None
        } else {
            Some(&self.message)
        }
    }
}

struct FieldRules {
    field: FieldName,
    rules: Vec<Rule>,
}

/// Ordered validation rules for a set of fields.
///
/// Rules of one field are evaluated in the order they were declared and the
/// first failure wins. Every rule except `required` accepts the empty string,
/// so `required` always takes precedence on empty input no matter where it
/// was declared.
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    /// Start building a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// A schema without rules; every value is valid.
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Validate all values. Pure: no state is read besides `values`.
    pub fn validate(&self, values: &FormValues) -> ErrorMap {
        let mut errors = ErrorMap::new();
        for entry in &self.fields {
            if let Some(msg) = Self::first_failure(entry, values.get(entry.field)) {
                errors.insert(entry.field, msg.to_string());
            }
        }
        errors
    }

    /// The single message shown for `field` given `value`.
    pub fn validate_field(&self, field: FieldName, value: &str) -> Option<&str> {
        self.entry(field)
            .and_then(|entry| Self::first_failure(entry, value))
    }

    /// Every failing message for `field`, in precedence order.
    pub fn field_errors(&self, field: FieldName, value: &str) -> Vec<&str> {
        self.entry(field)
            .map(|entry| {
                entry
                    .rules
                    .iter()
                    .filter_map(|rule| rule.evaluate(value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any rule is declared for `field`.
    pub fn has_rules(&self, field: FieldName) -> bool {
        self.entry(field).is_some_and(|entry| !entry.rules.is_empty())
    }

    fn entry(&self, field: FieldName) -> Option<&FieldRules> {
        self.fields.iter().find(|entry| entry.field == field)
    }

    fn first_failure<'a>(entry: &'a FieldRules, value: &str) -> Option<&'a str> {
        entry.rules.iter().find_map(|rule| rule.evaluate(value))
    }
}

impl Default for Schema {
    fn default() -> Self {
        super::signup_schema()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in &self.fields {
            let messages: Vec<&str> = entry.rules.iter().map(|r| r.message.as_str()).collect();
            map.entry(&entry.field, &messages);
        }
        map.finish()
    }
}

/// Builder collecting fields for a [`Schema`].
pub struct SchemaBuilder {
    fields: Vec<FieldRules>,
}

impl SchemaBuilder {
    /// Start declaring rules for `field`.
    pub fn field(self, field: FieldName) -> FieldBuilder {
        FieldBuilder {
            schema: self,
            current: FieldRules {
                field,
                rules: Vec::new(),
            },
        }
    }

    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }

    fn push(mut self, entry: FieldRules) -> Self {
        // Declaring the same field twice appends to its rule list.
        match self.fields.iter_mut().find(|e| e.field == entry.field) {
            Some(existing) => existing.rules.extend(entry.rules),
            None => self.fields.push(entry),
        }
        self
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    schema: SchemaBuilder,
    current: FieldRules,
}

impl FieldBuilder {
    /// Add a custom rule. `check` returns `true` when the value is valid.
    pub fn rule<F>(mut self, check: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.current.rules.push(Rule {
            check: Box::new(check),
            message: msg.into(),
        });
        self
    }

    /// Add a rule that is skipped for empty values.
    fn when_present<F>(self, check: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rule(move |v| v.is_empty() || check(v), msg)
    }

    /// Require the field to be non-empty. Whitespace counts as content.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.is_empty(), msg)
    }

    /// Require a bare `local@domain` address with a dotted domain.
    ///
    /// Display text (`Ada <ada@x.com>`), domain literals and quoted local
    /// parts are rejected.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.when_present(is_plain_email, msg)
    }

    /// Require at least one ASCII uppercase letter.
    pub fn uppercase(self, msg: impl Into<String>) -> Self {
        self.when_present(|v| v.chars().any(|c| c.is_ascii_uppercase()), msg)
    }

    /// Require at least one ASCII lowercase letter.
    pub fn lowercase(self, msg: impl Into<String>) -> Self {
        self.when_present(|v| v.chars().any(|c| c.is_ascii_lowercase()), msg)
    }

    /// Require at least one ASCII digit.
    pub fn digit(self, msg: impl Into<String>) -> Self {
        self.when_present(|v| v.chars().any(|c| c.is_ascii_digit()), msg)
    }

    /// Require at least one character from `symbols`.
    pub fn symbol(self, symbols: &'static str, msg: impl Into<String>) -> Self {
        self.when_present(move |v| v.chars().any(|c| symbols.contains(c)), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.when_present(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.when_present(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match `re`.
    pub fn matches(self, re: Regex, msg: impl Into<String>) -> Self {
        self.when_present(move |v| re.is_match(v), msg)
    }

    /// Like [`matches`](Self::matches), compiling `pattern` first.
    pub fn try_matches(self, pattern: &str, msg: impl Into<String>) -> Result<Self, SchemaError> {
        let re = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.matches(re, msg))
    }

    /// Continue to the next field.
    pub fn field(self, field: FieldName) -> FieldBuilder {
        self.finalize().field(field)
    }

    /// Finish the schema.
    pub fn build(self) -> Schema {
        self.finalize().build()
    }

    fn finalize(self) -> SchemaBuilder {
        self.schema.push(self.current)
    }
}

fn is_plain_email(value: &str) -> bool {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    let Ok(addr) = EmailAddress::parse_with_options(value, options) else {
        return false;
    };
    let domain = addr.domain();
    !addr.local_part().starts_with('"') && domain.contains('.') && !domain.ends_with('.')
}
