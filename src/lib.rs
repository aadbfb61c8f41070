//! Annotated error chains with stack traces, numeric codes and a code registry.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping with Context
//!
//! ```
//! use error_trail::{Error, ResultExt};
//!
//! fn open(path: &str) -> Result<std::fs::File, Error> {
//!     std::fs::File::open(path).wrap(format!("opening {path}"))
//! }
//!
//! let err = open("/definitely/missing").unwrap_err();
//! assert!(err.to_string().starts_with("opening /definitely/missing: "));
//!
//! // `{:#}` prints every annotation, oldest first, with captured stacks.
//! let extended = format!("{err:#}");
//! assert!(extended.contains("opening /definitely/missing"));
//! ```
//!
//! ## Codes and the Registry
//!
//! ```
//! use error_trail::{registry, Coder, DefaultCoder, Error};
//!
//! registry::must_register(
//!     DefaultCoder::new(30001, "quota exceeded")
//!         .with_status(429)
//!         .with_reference("https://docs.example.com/quota"),
//! );
//!
//! let err = Error::new("42 requests in 1s").wrap_code(30001).wrap("calling billing");
//! assert!(err.is_code(30001));
//! assert_eq!(err.coder().http_status(), 429);
//! assert_eq!(err.coder().reference(), "https://docs.example.com/quota");
//! ```
//!
//! ## Reporting Several Failures
//!
//! ```
//! use error_trail::{join, Aggregate, Error};
//!
//! let joined = join([Some(Error::new("a")), None, Some(Error::new("b"))]).unwrap();
//! assert_eq!(joined.to_string(), "a\nb");
//!
//! let agg = Aggregate::new([Error::new("x"), Error::new("y")]);
//! assert_eq!(agg.to_string(), "[x, y]");
//! ```

/// Free functions over possibly absent errors
pub mod context;
/// Formatting macros for building errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Code registry and registration errors
pub mod registry;
/// Core traits for annotation and code description
pub mod traits;
/// Error chain, stack capture and combinator types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::{cause, is_code, parse_coder};
pub use registry::{RegistrationError, Registry};
pub use traits::*;
pub use types::{
    capture_mode, join, set_capture_mode, Aggregate, CaptureMode, Chain, DefaultCoder, Error,
    ErrorKind, ErrorVec, Frame, Joined, Stack, DEFAULT_HTTP_STATUS, UNKNOWN_CODE,
};
