//! Form values, validation errors, and the declarative field schemas.
//!
//! DESIGN
//! ======
//! Values stay as the raw strings the user typed. Schemas decide what is
//! valid; typed payloads are only built after a schema has accepted the
//! values, so conversion helpers here never need to report field errors.


pub mod schema;

use std::collections::BTreeMap;

pub use schema::{FieldSpec, InputKind, LOGIN, REGISTER, Rule, Schema, WALLET};

/// Raw field values for one form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `field`, or the empty string when it was never set.
    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.0.insert(field.to_owned(), value.into());
    }

    /// Builder-style [`FormValues::set`].
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Blank out every field while keeping the keys.
    pub fn reset(&mut self) {
        for value in self.0.values_mut() {
            value.clear();
        }
    }

    /// Parse `field` as a number. Callers validate with a schema first.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        parse_number(self.get(field))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Finite `f64` from user input, ignoring surrounding whitespace.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().map_or(None, |n| n.is_finite().then_some(n))
}

/// First failing message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}
