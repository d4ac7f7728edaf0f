mod case;
pub use case::CaseSpec;
