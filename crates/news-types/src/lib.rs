//! Validated primitive types shared across the news service crates.
//!
//! - [`NonEmptyText`]: caller-supplied text that must contain at least one non-whitespace
//!   character (for example the search keyword).
//! - [`ApiKey`]: the upstream credential. Its `Debug` output is redacted so it can sit inside
//!   configuration structs that are logged.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string that contains at least one non-whitespace character.
///
/// Unlike a trimmed string, the input is kept verbatim: a search for `" rust "` is forwarded to
/// the upstream API and echoed back to the caller exactly as it was typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] if the input is empty or contains only whitespace.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let text = input.into();
        if text.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(text))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Secret credential sent to the upstream news API in the `X-Api-Key` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(NonEmptyText);

impl ApiKey {
    /// Wraps a key, rejecting blank values.
    pub fn new(key: impl Into<String>) -> Result<Self, TextError> {
        let key: String = key.into();
        NonEmptyText::new(key.trim()).map(Self)
    }

    /// Builds an optional key from an environment-style value; `None` and blank strings both
    /// mean "not configured".
    pub fn from_optional(value: Option<String>) -> Option<Self> {
        value.and_then(|v| Self::new(v).ok())
    }

    /// The raw key, for use in outbound request headers only.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
