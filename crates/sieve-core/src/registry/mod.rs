//! Case registry holding the declarative spec and body of every known case.
//!
//! Registration happens once, during harness setup; after that the
//! registry is read-only. Tags live inside each [`CaseSpec`] and are
//! never touched by the registry itself.
use tracing::trace;

use sieve_model::CaseSpec;

use crate::{
    error::{CoreError, CoreResult},
    runner::CaseRef,
};

/// Single registered case: its declarative spec plus its executable body.
#[derive(Clone)]
pub struct CaseEntry {
    /// Declarative metadata, including exclusion tags.
    pub spec: CaseSpec,
    /// Executable body.
    pub case: CaseRef,
}

/// Ordered collection of registered cases.
///
/// Cases are kept in registration order, which is also the execution
/// order used by the harness. Case names are unique within a suite;
/// registering a duplicate is an error.
#[derive(Default)]
pub struct CaseRegistry {
    entries: Vec<CaseEntry>,
}

impl CaseRegistry {
    /// Create an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a case with its spec.
    ///
    /// The spec is validated and checked for name collisions. On success
    /// the association between the case and its tags is fixed for the
    /// lifetime of the registry.
    pub fn register(&mut self, spec: CaseSpec, case: CaseRef) -> CoreResult<()> {
        spec.validate()?;

        let qualified = spec.qualified_name();
        if self.entries.iter().any(|e| e.spec.qualified_name() == qualified) {
            return Err(CoreError::DuplicateCase(qualified));
        }

        trace!(case = %qualified, tags = spec.tags.len(), "case registered");
        self.entries.push(CaseEntry { spec, case });
        Ok(())
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no cases are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a case by suite and name.
    pub fn get(&self, suite: &str, name: &str) -> Option<&CaseEntry> {
        self.entries
            .iter()
            .find(|e| e.spec.suite == suite && e.spec.name == name)
    }

    /// Look up a case by suite and name, failing if it was never registered.
    pub fn require(&self, suite: &str, name: &str) -> CoreResult<&CaseEntry> {
        self.get(suite, name)
            .ok_or_else(|| CoreError::UnknownCase(format!("{suite}::{name}")))
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CaseEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CaseError, CaseFn, RunContext};
    use sieve_model::{CaseSpec, DOCUMENT_MODE, Tag};

    fn noop_case() -> CaseRef {
        CaseFn::arc(|_ctx: RunContext| async move { Ok::<(), CaseError>(()) })
    }

    #[test]
    fn register_keeps_insertion_order() {
        let mut reg = CaseRegistry::new();
        reg.register(CaseSpec::new("tabs", "open-tab"), noop_case())
            .unwrap();
        reg.register(CaseSpec::new("tabs", "close-tab"), noop_case())
            .unwrap();

        let names: Vec<_> = reg.iter().map(|e| e.spec.name.clone()).collect();
        assert_eq!(names, ["open-tab", "close-tab"]);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn register_rejects_duplicate_qualified_name() {
        let mut reg = CaseRegistry::new();
        reg.register(CaseSpec::new("tabs", "open-tab"), noop_case())
            .unwrap();

        let res = reg.register(CaseSpec::new("tabs", "open-tab"), noop_case());
        match res {
            Err(CoreError::DuplicateCase(name)) => assert_eq!(name, "tabs::open-tab"),
            other => panic!("expected CoreError::DuplicateCase, got {other:?}"),
        }
    }

    #[test]
    fn same_name_in_different_suites_is_allowed() {
        let mut reg = CaseRegistry::new();
        reg.register(CaseSpec::new("tabs", "smoke"), noop_case())
            .unwrap();
        reg.register(CaseSpec::new("omnibox", "smoke"), noop_case())
            .unwrap();

        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn register_rejects_invalid_spec() {
        let mut reg = CaseRegistry::new();
        let res = reg.register(CaseSpec::new("tabs", "   "), noop_case());

        assert!(matches!(res, Err(CoreError::InvalidSpec(_))));
        assert!(reg.is_empty());
    }

    #[test]
    fn require_reports_unknown_case() {
        let mut reg = CaseRegistry::new();
        reg.register(CaseSpec::new("tabs", "open-tab"), noop_case())
            .unwrap();

        assert!(reg.require("tabs", "open-tab").is_ok());
        match reg.require("tabs", "missing") {
            Err(CoreError::UnknownCase(name)) => assert_eq!(name, "tabs::missing"),
            Ok(_) => panic!("expected CoreError::UnknownCase, got Ok(..)"),
            Err(e) => panic!("expected CoreError::UnknownCase, got {e:?}"),
        }
    }

    #[test]
    fn get_finds_registered_entry_with_tags_intact() {
        let doc = Tag::new(DOCUMENT_MODE).unwrap();
        let mut reg = CaseRegistry::new();
        reg.register(
            CaseSpec::new("tabs", "reparent-tab").with_tag(doc.clone()),
            noop_case(),
        )
        .unwrap();

        let entry = reg.get("tabs", "reparent-tab").expect("entry must exist");
        assert!(entry.spec.is_tagged(&doc));
        assert!(reg.get("tabs", "missing").is_none());
    }
}
