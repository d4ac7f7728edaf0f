use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Named exclusion marker attached to test cases.
///
/// A tag is an immutable identity, fixed when the case is declared.
/// The selection layer compares the tag name against the active mode:
/// a case carrying tag `t` is skipped when the harness runs in mode `t`.
///
/// Tag names are lowercase kebab-case: ASCII letters, digits and `-`,
/// with no leading or trailing dash. Validation happens once at
/// construction; a `Tag` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Tag(String);

impl Tag {
    /// Create a new tag from a string-like value.
    ///
    /// This is a convenience wrapper around [`TryFrom<String>`].
    ///
    /// # Examples
    /// ```
    /// use sieve_model::Tag;
    ///
    /// let tag = Tag::new("document-mode").unwrap();
    /// assert_eq!(tag.as_str(), "document-mode");
    /// ```
    pub fn new(s: impl Into<String>) -> ModelResult<Self> {
        Self::try_from(s.into())
    }

    /// Returns the tag name as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> ModelResult<()> {
        if s.is_empty() {
            return Err(ModelError::InvalidTag("empty name".to_string()));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(ModelError::InvalidTag(format!(
                "{s}: leading/trailing dash"
            )));
        }
        match s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            None => Ok(()),
            Some(c) => Err(ModelError::InvalidTag(format!(
                "{s}: unexpected character {c:?}"
            ))),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for Tag {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        Self::validate(&s)?;
        Ok(Tag(s))
    }
}

impl From<Tag> for String {
    fn from(t: Tag) -> Self {
        t.0
    }
}
