use std::fmt;

use itertools::Itertools;

/// One problem found while validating a raw configuration value.
///
/// `path` is the dotted location of the field in the raw input, with sequence
/// entries indexed (`navbar.items[2].kind`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("missing required field `{path}`")]
    MissingField { path: String },
    #[error("unrecognized value `{value}` for `{path}`")]
    InvalidVariant { path: String, value: String },
    #[error("`{path}` expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl FieldError {
    pub fn path(&self) -> &str {
        match self {
            FieldError::MissingField { path } => path,
            FieldError::InvalidVariant { path, .. } => path,
            FieldError::InvalidType { path, .. } => path,
        }
    }
}

/// Every problem found in one [`Config::load`][crate::Config::load] call.
///
/// Validation is all-or-nothing: the caller either gets a fully valid config
/// or this complete list, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigErrors {
    errors: Vec<FieldError>,
}

impl ConfigErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub(crate) fn into_result<T>(self, ok: T) -> Result<T, Self> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

impl IntoIterator for ConfigErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'e> IntoIterator for &'e ConfigErrors {
    type Item = &'e FieldError;
    type IntoIter = std::slice::Iter<'e, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.iter().join("\n"))
    }
}

impl std::error::Error for ConfigErrors {}
