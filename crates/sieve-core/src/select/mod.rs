//! Selection layer that partitions the registry for one run.
//!
//! Building a plan is the runner-side half of the exclusion-tag contract:
//! a case is skipped iff its spec carries a tag equal to the active mode's
//! name. The partition is computed from immutable metadata, so building a
//! plan has no side effects and may be repeated for any number of modes.
use tracing::{debug, instrument, trace};

use sieve_model::{CaseSpec, Mode, Tag};

use crate::registry::{CaseEntry, CaseRegistry};

/// Case excluded from a run, together with the tag that excluded it.
#[derive(Clone, Debug)]
pub struct SkippedCase {
    /// Declarative metadata of the excluded case.
    pub spec: CaseSpec,
    /// The tag that matched the active mode.
    pub tag: Tag,
}

/// Execution plan for one run: which cases execute and which are skipped.
pub struct RunPlan {
    /// Mode the plan was built for.
    pub mode: Mode,
    /// Cases to execute, in registration order.
    pub selected: Vec<CaseEntry>,
    /// Cases excluded by tag.
    pub skipped: Vec<SkippedCase>,
}

impl RunPlan {
    /// Partition the registry for the given mode.
    ///
    /// Rules:
    /// - a case tagged with the mode's name goes to `skipped`;
    /// - every other case goes to `selected`, unaffected by the mode.
    #[instrument(level = "debug", skip(registry, mode), fields(mode = %mode))]
    pub fn build(registry: &CaseRegistry, mode: Mode) -> Self {
        let mut selected = Vec::new();
        let mut skipped = Vec::new();

        for entry in registry.iter() {
            if let Some(tag) = entry.spec.exclusion_tag(&mode) {
                trace!(case = %entry.spec.qualified_name(), tag = %tag, "case excluded by tag");
                skipped.push(SkippedCase {
                    spec: entry.spec.clone(),
                    tag: tag.clone(),
                });
            } else {
                selected.push(entry.clone());
            }
        }

        debug!(
            selected = selected.len(),
            skipped = skipped.len(),
            "run plan built"
        );
        Self {
            mode,
            selected,
            skipped,
        }
    }

    /// Total number of cases covered by the plan.
    pub fn total(&self) -> usize {
        self.selected.len() + self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{CaseError, CaseFn, CaseRef, RunContext};
    use sieve_model::{CaseSpec, DOCUMENT_MODE, Mode, Tag};

    fn noop_case() -> CaseRef {
        CaseFn::arc(|_ctx: RunContext| async move { Ok::<(), CaseError>(()) })
    }

    fn doc_tag() -> Tag {
        Tag::new(DOCUMENT_MODE).unwrap()
    }

    fn mk_registry() -> CaseRegistry {
        let mut reg = CaseRegistry::new();
        reg.register(CaseSpec::new("tabs", "open-tab"), noop_case())
            .unwrap();
        reg.register(
            CaseSpec::new("tabs", "reparent-tab").with_tag(doc_tag()),
            noop_case(),
        )
        .unwrap();
        reg.register(CaseSpec::new("omnibox", "smoke"), noop_case())
            .unwrap();
        reg
    }

    #[test]
    fn tagged_case_is_skipped_under_excluded_mode() {
        let reg = mk_registry();
        let plan = RunPlan::build(&reg, Mode::new(DOCUMENT_MODE).unwrap());

        let skipped: Vec<_> = plan
            .skipped
            .iter()
            .map(|s| s.spec.qualified_name())
            .collect();
        assert_eq!(skipped, ["tabs::reparent-tab"]);
        assert_eq!(plan.skipped[0].tag, doc_tag());
        assert_eq!(plan.selected.len(), 2);
        assert_eq!(plan.total(), 3);
    }

    #[test]
    fn tagged_case_runs_under_other_modes() {
        let reg = mk_registry();
        let plan = RunPlan::build(&reg, Mode::default());

        assert!(plan.skipped.is_empty());
        assert_eq!(plan.selected.len(), 3);
    }

    #[test]
    fn untagged_cases_are_unaffected_by_mode() {
        let reg = mk_registry();
        let plan = RunPlan::build(&reg, Mode::new(DOCUMENT_MODE).unwrap());

        let selected: Vec<_> = plan
            .selected
            .iter()
            .map(|e| e.spec.qualified_name())
            .collect();
        assert_eq!(selected, ["tabs::open-tab", "omnibox::smoke"]);
    }

    #[test]
    fn building_a_plan_twice_gives_the_same_partition() {
        let reg = mk_registry();
        let mode = Mode::new(DOCUMENT_MODE).unwrap();

        let a = RunPlan::build(&reg, mode.clone());
        let b = RunPlan::build(&reg, mode);

        assert_eq!(a.selected.len(), b.selected.len());
        assert_eq!(a.skipped.len(), b.skipped.len());
    }

    #[test]
    fn selection_preserves_registration_order() {
        let mut reg = CaseRegistry::new();
        for name in ["c-one", "c-two", "c-three"] {
            reg.register(CaseSpec::new("order", name), noop_case())
                .unwrap();
        }

        let plan = RunPlan::build(&reg, Mode::default());
        let names: Vec<_> = plan.selected.iter().map(|e| e.spec.name.clone()).collect();
        assert_eq!(names, ["c-one", "c-two", "c-three"]);
    }
}
