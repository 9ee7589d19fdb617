//! Error types.
//!
//! This module provides the per-field [`Errors`] collection filled during
//! validation, the [`ErrorEntry`]/[`ErrorCode`] values handed to it, and
//! [`AttributeError`] for failed attribute assignment.

mod attribute_error;
mod entry;
mod errors;

pub use attribute_error::AttributeError;
pub use entry::{ErrorCode, ErrorEntry};
pub use errors::Errors;
