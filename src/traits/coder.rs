//! Descriptor associated with a numeric error code.
//!
//! A [`Coder`] maps a code to what a caller needs to report it: a human
//! message, an HTTP status and a documentation reference. Coders are
//! submitted once to a [`Registry`](crate::registry::Registry) and looked up
//! with [`Error::coder`](crate::Error::coder).
use core::fmt;

/// Rich description of a numeric error code.
///
/// # Examples
///
/// ```
/// use error_trail::Coder;
///
/// #[derive(Debug)]
/// struct NotFound;
///
/// impl Coder for NotFound {
///     fn code(&self) -> u32 { 40400 }
///     fn http_status(&self) -> u16 { 404 }
///     fn message(&self) -> &str { "resource not found" }
///     fn reference(&self) -> &str { "" }
/// }
///
/// let coder: &dyn Coder = &NotFound;
/// assert_eq!(coder.to_string(), "resource not found");
/// ```
pub trait Coder: fmt::Debug + Send + Sync {
    /// The numeric code, unique within a registry.
    fn code(&self) -> u32;

    /// HTTP status that should be used for the code.
    fn http_status(&self) -> u16;

    /// Human readable message.
    fn message(&self) -> &str;

    /// Link to documentation for the code. May be empty.
    fn reference(&self) -> &str;
}

impl fmt::Display for dyn Coder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
