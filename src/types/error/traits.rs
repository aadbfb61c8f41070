use super::{BoxedStdError, Error, Node};
use core::fmt::{self, Debug, Display};
use std::error::Error as StdError;

impl Node {
    fn fmt_plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Fundamental { msg, .. } => f.write_str(msg),
            Node::External(error) => write!(f, "{}", error),
            Node::WithStack { cause, .. } => write!(f, "{}", cause),
            Node::WithMessage { cause, msg } => write!(f, "{}: {}", msg, cause),
            Node::WithCode { cause, code } => write!(f, "code: {}, {}", code, cause),
        }
    }

    /// Innermost cause first, newest annotation last.
    fn fmt_extended(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Fundamental { msg, code, stack } => {
                if let Some(code) = code {
                    write!(f, "code: {}, ", code)?;
                }
                write!(f, "{}{:#}", msg, stack)
            },
            Node::External(error) => write!(f, "{}", error),
            Node::WithStack { cause, stack } => write!(f, "{:#}{:#}", cause, stack),
            Node::WithMessage { cause, msg } => write!(f, "{:#}\n{}", cause, msg),
            Node::WithCode { cause, code } => write!(f, "code: {}, {:#}", code, cause),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_extended(f)
        } else {
            self.fmt_plain(f)
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_extended(f)
    }
}

impl StdError for Node {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Node::External(error) => error.source(),
            Node::WithStack { cause, .. }
            | Node::WithMessage { cause, .. }
            | Node::WithCode { cause, .. } => Some(&*cause.inner),
            Node::Fundamental { .. } => None,
        }
    }
}

/// `{}` renders the plain chain text; `{:#}` renders the extended form with
/// every message, code and stack, oldest first.
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner, f)
    }
}

/// Debug output is the extended form, so `fn main() -> Result<(), Error>`
/// prints stacks on failure.
impl Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_extended(f)
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Error::from_boxed(Box::new(error))
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Error {
    #[inline]
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl AsRef<dyn StdError + 'static> for Error {
    #[inline]
    fn as_ref(&self) -> &(dyn StdError + 'static) {
        &*self.inner
    }
}

impl From<Error> for BoxedStdError {
    #[inline]
    fn from(error: Error) -> Self {
        error.inner
    }
}

impl From<Error> for Box<dyn StdError + 'static> {
    #[inline]
    fn from(error: Error) -> Self {
        error.inner
    }
}
