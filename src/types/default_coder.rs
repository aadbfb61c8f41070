use crate::traits::Coder;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reserved code returned whenever a chain's code cannot be resolved.
pub const UNKNOWN_CODE: u32 = 1;

/// HTTP status used when a coder leaves its status unset (`0`).
pub const DEFAULT_HTTP_STATUS: u16 = 500;

/// Plain data implementation of [`Coder`].
///
/// With the `serde` feature, code tables can be loaded from configuration
/// files; `status` and `reference` may be omitted.
///
/// # Examples
///
/// ```
/// use error_trail::{Coder, DefaultCoder};
///
/// let coder = DefaultCoder::new(20013, "bad request")
///     .with_status(400)
///     .with_reference("https://docs.example.com/errors/20013");
///
/// assert_eq!(coder.http_status(), 400);
/// assert_eq!(DefaultCoder::new(20014, "oops").http_status(), 500);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultCoder {
    code: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    status: u16,
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    reference: String,
}

impl DefaultCoder {
    /// Creates a coder with the default status and no reference.
    pub fn new<M: Into<String>>(code: u32, message: M) -> Self {
        Self { code, status: 0, message: message.into(), reference: String::new() }
    }

    /// The coder installed for [`UNKNOWN_CODE`] in every registry.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_CODE, "Internal server error").with_status(DEFAULT_HTTP_STATUS)
    }

    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[inline]
    pub fn with_reference<R: Into<String>>(mut self, reference: R) -> Self {
        self.reference = reference.into();
        self
    }
}

impl Coder for DefaultCoder {
    #[inline]
    fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    fn http_status(&self) -> u16 {
        if self.status == 0 {
            DEFAULT_HTTP_STATUS
        } else {
            self.status
        }
    }

    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn reference(&self) -> &str {
        &self.reference
    }
}
