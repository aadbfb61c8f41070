use super::Error;
use core::iter::FusedIterator;

/// Iterator over the nodes of an error chain, outermost first.
///
/// Created by [`Error::chain`].
///
/// ```
/// use error_trail::{Error, ErrorKind};
///
/// let err = Error::new("root").with_code(4).with_message("outer");
/// let kinds: Vec<ErrorKind> = err.chain().map(Error::kind).collect();
/// assert_eq!(kinds, [ErrorKind::WithMessage, ErrorKind::WithCode, ErrorKind::Fundamental]);
/// ```
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(head: &'a Error) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}
