//! Core traits for error annotation and code description.
//!
//! - [`Coder`]: descriptor of a numeric code (message, HTTP status, reference)
//! - [`ResultExt`]: annotate the failure side of any `Result`
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::Error;
//!
//! let result: Result<(), Error> = Err(Error::new("timeout"));
//! let err = result.with_code(504).unwrap_err();
//! assert!(err.is_code(504));
//! ```

pub mod coder;
pub mod result_ext;

pub use coder::Coder;
pub use result_ext::ResultExt;
