//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_config(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path).wrap_code(40401)
//! }
//!
//! let err = read_config("/definitely/missing.toml").unwrap_err();
//! assert!(err.is_code(40401));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`], [`codef!`], [`bail!`]
//! - **Types**: [`Error`], [`DefaultCoder`], [`Aggregate`], [`Result`]
//! - **Traits**: [`ResultExt`], [`Coder`]
//! - **Functions**: [`join`]

// Macros
pub use crate::{bail, codef, errorf};

// Core types
pub use crate::types::{join, Aggregate, DefaultCoder, Error, Result};

// Traits
pub use crate::traits::{Coder, ResultExt};
