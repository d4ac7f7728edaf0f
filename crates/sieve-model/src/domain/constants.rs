//! Common model-level constants.
//!
//! This module contains well-known tag names used across the workspace.
//! Keeping them here avoids scattering magic strings throughout the codebase.

/// Tag name excluding a case from runs in document mode.
///
/// A [`crate::CaseSpec`] carrying this tag is reported as skipped, and its
/// body is never executed, when the harness operates in the
/// `"document-mode"` [`crate::Mode`].
///
/// This constant provides a single source of truth for the tag name used
/// in document-mode exclusion.
pub const DOCUMENT_MODE: &str = "document-mode";
