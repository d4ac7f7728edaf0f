pub mod error;
pub mod events;
pub mod harness;
pub mod registry;
pub mod report;
pub mod runner;
pub mod select;

pub use error::CoreError;
pub use events::{ListenerHandle, LogListener, NoOpListener, RunListener};
pub use harness::{Harness, HarnessConfig};
pub use registry::{CaseEntry, CaseRegistry};
pub use report::{CaseRecord, RunReport};
pub use runner::{Case, CaseError, CaseFn, CaseRef, RunContext};
pub use select::{RunPlan, SkippedCase};

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::harness::{Harness, HarnessConfig};
    pub use crate::registry::CaseRegistry;
    pub use crate::runner::{Case, CaseError, CaseFn, RunContext};
    pub use crate::select::RunPlan;
}
