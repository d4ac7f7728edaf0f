use std::{convert::TryFrom, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    domain::Tag,
    error::{ModelError, ModelResult},
};

/// Operating mode the selection process runs under.
///
/// A mode name lives in the same namespace as [`Tag`]: a case tagged `t`
/// is excluded exactly when the harness mode is named `t`. The mode is an
/// input to the run; detecting it (e.g. which UI mode a browser is in) is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct Mode(Tag);

impl Mode {
    /// Create a new mode from a string-like value.
    ///
    /// Mode names follow the same lexical rules as tag names.
    pub fn new(s: impl Into<String>) -> ModelResult<Self> {
        Self::try_from(s.into())
    }

    /// Returns the mode name as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// View the mode as the tag that excludes cases under it.
    #[inline]
    pub fn as_tag(&self) -> &Tag {
        &self.0
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode(Tag::new("default").expect("default mode name must be valid"))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for Mode {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        match Tag::try_from(s) {
            Ok(tag) => Ok(Mode(tag)),
            Err(ModelError::InvalidTag(msg)) => Err(ModelError::InvalidMode(msg)),
            Err(e) => Err(e),
        }
    }
}

impl From<Mode> for String {
    fn from(m: Mode) -> Self {
        m.0.into()
    }
}
