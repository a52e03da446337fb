use std::error::Error as StdError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No entity matched the given key.
    #[error("{entity} with {key} '{value}' does not exist")]
    NotFound {
        entity: &'static str,
        key: &'static str,
        value: String,
    },

    /// A mandatory field was absent when assembling an entity.
    #[error("'{0}' is non-nullable")]
    MissingField(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backing store failed (connectivity, timeout, driver error).
    #[error("Store error: {0}")]
    Store(#[source] Box<dyn StdError + Send + Sync>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a `NotFound` error on a `Note`.
    pub fn note_not_found(key: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity: "Note",
            key,
            value: value.to_string(),
        }
    }

    /// Wrap any store-level error. Usable directly in `map_err`.
    pub fn store<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Store(Box::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
