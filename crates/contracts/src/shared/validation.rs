//! Form validation shared by the dialog and the API

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Text field is empty or whitespace only
    Required,
    /// A multi-select needs at least one entry
    NoneSelected,
    /// A selected entry does not exist on the server
    UnknownReference,
}

impl ValidationIssue {
    /// Translation key used by the UI
    pub fn key(&self) -> &'static str {
        match self {
            ValidationIssue::Required => "required",
            ValidationIssue::NoneSelected => "atleast_one_ico",
            ValidationIssue::UnknownReference => "unknown_reference",
        }
    }

    /// English message used by the API
    pub fn default_message(&self, field: &str) -> String {
        match self {
            ValidationIssue::Required => format!("The {} field is required.", field),
            ValidationIssue::NoneSelected => format!("Select at least one of the {}.", field),
            ValidationIssue::UnknownReference => {
                format!("The selected {} contain an unknown entry.", field)
            }
        }
    }
}

/// Rules of one text field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self { required: false }
    }

    pub const fn required() -> Self {
        Self { required: true }
    }

    pub fn check(&self, value: &str) -> Option<ValidationIssue> {
        if self.required && value.trim().is_empty() {
            return Some(ValidationIssue::Required);
        }
        None
    }
}

/// Field name -> error message.
///
/// Ordered so the rendering and the JSON body are stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the map from failed rules, resolving each message through `message`
    pub fn from_issues<F>(issues: &[(&'static str, ValidationIssue)], mut message: F) -> Self
    where
        F: FnMut(&str, ValidationIssue) -> String,
    {
        let mut errors = Self::new();
        for (field, issue) in issues {
            // first failure of a field wins
            if !errors.contains(field) {
                errors.insert(*field, message(field, *issue));
            }
        }
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Overwrites local entries with the ones in `other`
    pub fn merge(&mut self, other: FormErrors) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
