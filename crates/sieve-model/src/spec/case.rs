use serde::{Deserialize, Serialize};

use crate::{
    domain::{Mode, Suite, Tag, TagSet, TimeoutMs},
    error::{ModelError, ModelResult},
};

/// Declarative specification of one test case.
///
/// `CaseSpec` describes *what* entity exists and *under which modes* it
/// must not run. The association between a case and its tags is fixed
/// here, at declaration time; the registry and the harness only ever read
/// it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSpec {
    /// Case name, unique within its suite.
    pub name: String,
    /// Suite the case belongs to.
    pub suite: Suite,
    /// Exclusion tags attached to this case.
    ///
    /// The selection layer skips the case when the active mode's name is
    /// present here.
    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,
    /// Hard timeout for the case body in milliseconds.
    ///
    /// `0` defers to the harness-wide default.
    #[serde(default)]
    pub timeout_ms: TimeoutMs,
}

impl CaseSpec {
    /// Create a spec with no tags and the harness-default timeout.
    pub fn new(suite: impl Into<Suite>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            suite: suite.into(),
            tags: TagSet::new(),
            timeout_ms: 0,
        }
    }

    /// Attach an exclusion tag.
    ///
    /// This is a builder-style helper used at declaration time:
    ///
    /// ```rust
    /// use sieve_model::{CaseSpec, DOCUMENT_MODE, Tag};
    ///
    /// let spec = CaseSpec::new("tabs", "reparent-tab")
    ///     .with_tag(Tag::new(DOCUMENT_MODE).unwrap());
    /// assert!(spec.is_tagged(&Tag::new(DOCUMENT_MODE).unwrap()));
    /// ```
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Set an explicit per-case timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: TimeoutMs) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns `true` iff the case was declared with the given tag.
    ///
    /// Pure function of static metadata; querying it any number of times,
    /// from any number of threads, yields the same result.
    pub fn is_tagged(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Return the tag that excludes this case under the given mode (if any).
    ///
    /// This is a thin wrapper over `tags.get(mode.as_tag())` and is
    /// intended for consumers that perform selection.
    pub fn exclusion_tag(&self, mode: &Mode) -> Option<&Tag> {
        self.tags.get(mode.as_tag())
    }

    /// Fully qualified `suite::name` identifier used in logs and reports.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }

    /// Validate the spec before registration.
    ///
    /// Rules:
    /// - `name` is not empty or whitespace-only;
    /// - `suite` is not empty or whitespace-only.
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Invalid("case name is empty".into()));
        }
        if self.suite.trim().is_empty() {
            return Err(ModelError::Invalid("suite name is empty".into()));
        }
        Ok(())
    }
}
