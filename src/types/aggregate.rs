use crate::types::{Error, ErrorVec};
use core::fmt::{self, Display};

/// A fixed, ordered collection of independent errors reported as one.
///
/// Members have no causal relation to each other. The plain rendering is a
/// bracketed, comma-separated list of the members' own texts; an empty
/// aggregate renders as `[]`.
///
/// # Examples
///
/// ```
/// use error_trail::{Aggregate, Error};
///
/// let agg = Aggregate::new([Error::new("a"), Error::new("b").with_code(2)]);
/// assert_eq!(agg.to_string(), "[a, code: 2, b]");
/// assert_eq!(Aggregate::default().to_string(), "[]");
/// ```
#[derive(Debug, Default)]
pub struct Aggregate {
    errors: ErrorVec<Error>,
}

impl Aggregate {
    /// Builds an aggregate, preserving order and duplicates.
    pub fn new<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        Self { errors: errors.into_iter().collect() }
    }

    /// Returns the members in their original order.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Returns an iterator over the members.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the aggregate and returns its members.
    #[inline]
    pub fn into_errors(self) -> ErrorVec<Error> {
        self.errors
    }
}

impl Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if f.alternate() {
                write!(f, "{:#}", error)?;
            } else {
                write!(f, "{}", error)?;
            }
        }
        f.write_str("]")
    }
}

impl std::error::Error for Aggregate {}

impl FromIterator<Error> for Aggregate {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Aggregate {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Aggregate {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
