//! Utility modules
//!
//! This module contains error and warning types shared by the file-level
//! collaborators.

pub mod error;

// Re-export commonly used items
pub use error::{FixError, FixResult, FixWarning};
