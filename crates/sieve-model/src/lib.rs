mod domain;
pub use domain::DOCUMENT_MODE;
pub use domain::{Mode, Suite, Tag, TagSet, TimeoutMs};

mod error;
pub use error::ModelError;

mod outcome;
pub use outcome::CaseOutcome;

mod spec;
pub use spec::CaseSpec;
