mod tag;
pub use tag::Tag;

mod tagset;
pub use tagset::TagSet;

mod mode;
pub use mode::Mode;

mod constants;
pub use constants::DOCUMENT_MODE;

/// Logical name of the suite a case belongs to.
///
/// Suites group related cases; case names are unique within a suite.
pub type Suite = String;

/// Timeout value in milliseconds.
///
/// Used in case specifications where an explicit time limit is required.
/// A value of `0` means "use the harness default".
pub type TimeoutMs = u64;
