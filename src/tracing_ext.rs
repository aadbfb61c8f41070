//! Tracing integration for error-trail.
//!
//! This module annotates errors with the name of a `tracing` span, so the
//! chain records which instrumented operation was running when it failed.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::Error;

/// Extension trait for `Result` types to add span context to errors.
pub trait ResultSpanExt<T> {
    /// Adds the current span's name as a message node.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_trail::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, Error> {
    ///     do_work().with_current_span()
    /// }
    /// ```
    fn with_current_span(self) -> Result<T, Error>;

    /// Adds a specific span's name as a message node.
    fn with_span(self, span: &Span) -> Result<T, Error>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    fn with_current_span(self) -> Result<T, Error> {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(error.into().with_message(span_message(span))),
        }
    }
}

/// Annotates `error` with the current span's name.
pub fn instrument_error<E>(error: E) -> Error
where
    E: Into<Error>,
{
    error.into().with_message(span_message(&Span::current()))
}

/// Formats a span as `in span '<name>'`; disabled spans read `unknown`.
fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}
