//! Flattened joining of several optional errors.
use crate::types::Error;
use core::fmt::{self, Display};

/// Several errors joined into one, rendered one per line.
///
/// Created by [`join`]. The backing list is exposed through
/// [`errors`](Joined::errors) and [`into_errors`](Joined::into_errors).
#[derive(Debug)]
pub struct Joined {
    errors: Box<[Error]>,
}

impl Joined {
    /// Returns the joined errors in their original order.
    #[inline]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Consumes the value and returns the backing list; its capacity equals
    /// its length.
    #[inline]
    pub fn into_errors(self) -> Vec<Error> {
        self.errors.into_vec()
    }
}

/// Joins the present errors of `errors`, dropping `None` entries.
///
/// Returns `None` when no error is present.
///
/// # Examples
///
/// ```
/// use error_trail::{join, Error};
///
/// assert!(join([None, None]).is_none());
///
/// let joined = join([Some(Error::new("a")), None, Some(Error::new("b"))]).unwrap();
/// assert_eq!(joined.to_string(), "a\nb");
/// assert_eq!(joined.errors().len(), 2);
/// ```
pub fn join<I>(errors: I) -> Option<Joined>
where
    I: IntoIterator<Item = Option<Error>>,
{
    let errors: Vec<Error> = errors.into_iter().flatten().collect();
    if errors.is_empty() {
        return None;
    }
    Some(Joined { errors: errors.into_boxed_slice() })
}

impl Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            if f.alternate() {
                write!(f, "{:#}", error)?;
            } else {
                write!(f, "{}", error)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Joined {}
