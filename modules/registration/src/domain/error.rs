use std::fmt;

use thiserror::Error;

/// A single failed form constraint.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid surname")]
    InvalidSurname,

    #[error("Invalid first name")]
    InvalidFirstName,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Shop is not selected")]
    ShopNotSelected,
}

/// Every failed constraint of one submit, in form order
/// (surname, first name, phone, shop).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, error: FieldError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One message per line, order preserved.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Record store failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("record store is unavailable: {0}")]
    Unavailable(String),

    #[error("record could not be written: {0}")]
    WriteFailed(String),
}

/// Why a submit did not produce a stored registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("the registration form is not shown")]
    FormHidden,
}
