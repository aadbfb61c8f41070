//! Error types and utilities.
//!
//! This module provides the annotated [`Error`] chain, the captured [`Stack`],
//! the [`DefaultCoder`] descriptor and the two combinators for reporting
//! several failures at once, [`Aggregate`] and [`Joined`].
//!
//! # Examples
//!
//! ```
//! use error_trail::types::{Aggregate, Error};
//!
//! let err = Error::new("database connection failed")
//!     .wrap_code(503)
//!     .with_message("loading orders");
//!
//! assert_eq!(err.to_string(), "loading orders: code: 503, database connection failed");
//!
//! let report = Aggregate::new([err, Error::new("cache miss")]);
//! assert_eq!(report.len(), 2);
//! ```
use smallvec::SmallVec;

pub mod aggregate;
pub mod default_coder;
pub mod error;
pub mod join;
pub mod stack;

pub use aggregate::Aggregate;
pub use default_coder::{DefaultCoder, DEFAULT_HTTP_STATUS, UNKNOWN_CODE};
pub use error::{Chain, Error, ErrorKind};
pub use join::{join, Joined};
pub use stack::{capture_mode, set_capture_mode, CaptureMode, Frame, Stack};

/// SmallVec-backed collection used for grouping errors.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case of a pair of failures.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias whose failure is an annotated [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
