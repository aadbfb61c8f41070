//! Free functions over possibly absent errors.
//!
//! These mirror the methods of [`Error`] but accept `Option`s: every wrapping
//! function returns `None` when given `None`, so "no error" is never wrapped
//! into a degenerate node. Traversal functions return `None` / `false` for an
//! absent input.
//!
//! - [`wrap`], [`with_message`], [`with_stack`], [`with_code`], [`wrap_code`]
//!   annotate an error
//! - [`cause`], [`is_code`], [`parse_coder`] inspect a chain
//!
//! # Examples
//!
//! ```
//! use error_trail::{context, Error};
//!
//! fn check(value: i32) -> Option<Error> {
//!     (value < 0).then(|| Error::new("negative value"))
//! }
//!
//! assert!(context::wrap(check(5), "validating input").is_none());
//!
//! let err = context::with_code(check(-1), 22).unwrap();
//! assert!(context::is_code(Some(&err), 22));
//! ```

use crate::traits::Coder;
use crate::types::Error;
use std::sync::Arc;

/// Annotates `error` with a message and a stack captured here.
#[inline]
pub fn wrap<E, M>(error: Option<E>, message: M) -> Option<Error>
where
    E: Into<Error>,
    M: Into<String>,
{
    match error {
        Some(error) => Some(error.into().wrap(message)),
        None => None,
    }
}

/// Annotates `error` with a message only.
#[inline]
pub fn with_message<E, M>(error: Option<E>, message: M) -> Option<Error>
where
    E: Into<Error>,
    M: Into<String>,
{
    match error {
        Some(error) => Some(error.into().with_message(message)),
        None => None,
    }
}

/// Annotates `error` with a stack captured here.
#[inline]
pub fn with_stack<E>(error: Option<E>) -> Option<Error>
where
    E: Into<Error>,
{
    match error {
        Some(error) => Some(error.into().with_stack()),
        None => None,
    }
}

/// Annotates `error` with a code only.
#[inline]
pub fn with_code<E>(error: Option<E>, code: u32) -> Option<Error>
where
    E: Into<Error>,
{
    match error {
        Some(error) => Some(error.into().with_code(code)),
        None => None,
    }
}

/// Annotates `error` with a message and then a code.
#[inline]
pub fn with_code_message<E, M>(error: Option<E>, code: u32, message: M) -> Option<Error>
where
    E: Into<Error>,
    M: Into<String>,
{
    match error {
        Some(error) => Some(error.into().with_code_message(code, message)),
        None => None,
    }
}

/// Annotates `error` with a code and a stack captured here.
#[inline]
pub fn wrap_code<E>(error: Option<E>, code: u32) -> Option<Error>
where
    E: Into<Error>,
{
    match error {
        Some(error) => Some(error.into().wrap_code(code)),
        None => None,
    }
}

/// Annotates `error` with a message, a code and a stack captured here.
#[inline]
pub fn wrap_code_message<E, M>(error: Option<E>, code: u32, message: M) -> Option<Error>
where
    E: Into<Error>,
    M: Into<String>,
{
    match error {
        Some(error) => Some(error.into().wrap_code_message(code, message)),
        None => None,
    }
}

/// Returns the root cause of `error`. See [`Error::root_cause`].
#[inline]
pub fn cause(error: Option<&Error>) -> Option<&Error> {
    error.map(Error::root_cause)
}

/// Reports whether any node of `error` carries `code`. See [`Error::is_code`].
#[inline]
pub fn is_code(error: Option<&Error>, code: u32) -> bool {
    error.is_some_and(|error| error.is_code(code))
}

/// Resolves the outermost code of `error` in the process-wide registry.
///
/// Returns `None` only for an absent error; a chain without a code, or with
/// an unregistered one, resolves to the unknown coder.
///
/// ```
/// use error_trail::{context, Coder, Error};
///
/// assert!(context::parse_coder(None).is_none());
///
/// let err = Error::new("boom").with_code(987_654);
/// assert_eq!(context::parse_coder(Some(&err)).unwrap().code(), 1);
/// ```
#[inline]
pub fn parse_coder(error: Option<&Error>) -> Option<Arc<dyn Coder>> {
    error.map(Error::coder)
}
