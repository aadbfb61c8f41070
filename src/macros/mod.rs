//! Formatting shortcuts for building errors.
//!
//! - [`macro@crate::errorf`] - Creates a root [`Error`](crate::Error) from a format string.
//! - [`macro@crate::codef`] - Creates a coded root error from a code and a format string.
//! - [`macro@crate::bail`] - Returns early with a formatted root error.
//!
//! The stack is captured where the macro is expanded.
//!
//! # Examples
//!
//! ```
//! use error_trail::{codef, errorf, Error};
//!
//! let port = 8080;
//! let err = errorf!("port {} already in use", port);
//! assert_eq!(err.to_string(), "port 8080 already in use");
//!
//! let coded = codef!(3, "retry limit {} exceeded", 5);
//! assert_eq!(coded.to_string(), "retry limit 5 exceeded");
//! assert!(coded.is_code(3));
//! ```

/// Creates a root [`Error`](crate::Error) from a format string.
///
/// Accepts the same arguments as the standard `format!` macro.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::Error::new(format!($($arg)*))
    };
}

/// Creates a coded root [`Error`](crate::Error) from a format string.
///
/// The plain rendering is the formatted message; the extended rendering
/// (`{:#}`) is prefixed with `code: <code>, `.
#[macro_export]
macro_rules! codef {
    ($code:expr, $($arg:tt)*) => {
        $crate::Error::coded($code, format!($($arg)*))
    };
}

/// Returns early with an error built by [`errorf!`](crate::errorf).
///
/// ```
/// use error_trail::{bail, Error};
///
/// fn validate(value: i32) -> Result<i32, Error> {
///     if value < 0 {
///         bail!("invalid input: {}", value);
///     }
///     Ok(value)
/// }
///
/// assert_eq!(validate(-3).unwrap_err().to_string(), "invalid input: -3");
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err($crate::errorf!($($arg)*).into())
    };
}
