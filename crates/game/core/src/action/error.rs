//! Move validation errors.

/// A submitted move candidate that is not one of the five legal names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{input}` is not a legal move")]
pub struct InvalidMove {
    input: String,
}

impl InvalidMove {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// The rejected raw input.
    pub fn input(&self) -> &str {
        &self.input
    }
}
