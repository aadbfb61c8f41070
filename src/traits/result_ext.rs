//! Extension trait for ergonomic annotation of `Result` types.
//!
//! This module provides [`ResultExt`], which wraps the failure of any
//! `Result` into an annotated [`Error`] without verbose `.map_err()` chains.
//! `Ok` values pass through untouched, so no spurious annotation is ever
//! created for a success.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Error, ResultExt};
//!
//! fn load_config() -> Result<String, Error> {
//!     std::fs::read_to_string("/definitely/missing/config.toml")
//!         .wrap("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file: "));
//! assert!(err.root_cause().is::<std::io::Error>());
//! ```

use crate::types::Error;

/// Extension trait for annotating the error side of a `Result`.
///
/// Every method converts the error into an [`Error`] first, so foreign errors
/// become external roots and existing chains are extended.
pub trait ResultExt<T> {
    /// Adds a message and a stack captured at the call site.
    fn wrap<M: Into<String>>(self, message: M) -> Result<T, Error>;

    /// Lazily adds a message and a stack captured at the call site.
    ///
    /// The closure only runs on failure.
    ///
    /// ```
    /// use error_trail::{Error, ResultExt};
    ///
    /// let user_id = 42;
    /// let result: Result<(), Error> = Err(Error::new("not found"));
    /// let err = result.wrap_with(|| format!("loading user {user_id}")).unwrap_err();
    /// assert_eq!(err.to_string(), "loading user 42: not found");
    /// ```
    fn wrap_with<F, M>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>;

    /// Adds a message without capturing a stack.
    fn with_message<M: Into<String>>(self, message: M) -> Result<T, Error>;

    /// Adds a stack captured at the call site, without any text.
    fn with_stack(self) -> Result<T, Error>;

    /// Adds a code without capturing a stack.
    fn with_code(self, code: u32) -> Result<T, Error>;

    /// Adds a code and a stack captured at the call site.
    fn wrap_code(self, code: u32) -> Result<T, Error>;
}

// Explicit matches keep `map_err` closures out of captured stacks.
impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    fn wrap<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().wrap(message)),
        }
    }

    #[inline]
    fn wrap_with<F, M>(self, f: F) -> Result<T, Error>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().wrap(f())),
        }
    }

    #[inline]
    fn with_message<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().with_message(message)),
        }
    }

    #[inline]
    fn with_stack(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().with_stack()),
        }
    }

    #[inline]
    fn with_code(self, code: u32) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().with_code(code)),
        }
    }

    #[inline]
    fn wrap_code(self, code: u32) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().wrap_code(code)),
        }
    }
}
