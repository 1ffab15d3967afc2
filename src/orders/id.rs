//! Order identifiers.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Errors raised while validating user-supplied identifier input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing remained after trimming surrounding whitespace.
    #[error("Please enter an Order ID")]
    EmptyOrderId,
}

/// A non-empty, trimmed order identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderId(String);

impl OrderId {
    /// Validate raw user input into an identifier.
    ///
    /// Surrounding whitespace is trimmed before the emptiness check, so a
    /// whitespace-only submission is rejected the same way as an empty one.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the trimmed input is empty.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyOrderId);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
