//! Annotated error chain.
//!
//! An [`Error`] is the outermost node of a singly-linked chain. Each wrapping
//! operation allocates a new node that owns the previous head, so the original
//! failure is never lost:
//!
//! - **Fundamental**: a root message with a captured stack (optionally coded)
//! - **External**: a root holding any foreign `std::error::Error`
//! - **WithStack**: records a stack, adds no text
//! - **WithMessage**: renders as `"<message>: <cause>"`
//! - **WithCode**: renders as `"code: <code>, <cause>"`
//!
//! # Examples
//!
//! ```
//! use error_trail::Error;
//!
//! let err = Error::new("connection refused")
//!     .with_code(20013)
//!     .wrap("loading user profile");
//!
//! assert_eq!(err.to_string(), "loading user profile: code: 20013, connection refused");
//! assert!(err.is_code(20013));
//! assert_eq!(err.root_cause().to_string(), "connection refused");
//! ```

use crate::registry::{self, Registry};
use crate::traits::Coder;
use crate::types::Stack;
use std::error::Error as StdError;
use std::sync::Arc;

mod chain;
mod traits;

pub use chain::Chain;

pub(crate) type BoxedStdError = Box<dyn StdError + Send + Sync + 'static>;

/// An error annotated with messages, stacks and numeric codes.
///
/// `Error` deliberately does not implement [`std::error::Error`], which lets any
/// foreign error convert into it through `From` (and therefore `?`). Use
/// [`AsRef`] or `Box<dyn std::error::Error + Send + Sync>::from` when a trait
/// object is required.
#[must_use]
pub struct Error {
    pub(crate) inner: Box<Node>,
}

pub(crate) enum Node {
    Fundamental { msg: String, code: Option<u32>, stack: Stack },
    External(BoxedStdError),
    WithStack { cause: Error, stack: Stack },
    WithMessage { cause: Error, msg: String },
    WithCode { cause: Error, code: u32 },
}

/// The variant of a single chain node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Root node created from a message.
    Fundamental,
    /// Root node wrapping a foreign error.
    External,
    /// Stack-only annotation.
    WithStack,
    /// Message annotation.
    WithMessage,
    /// Code annotation.
    WithCode,
}

impl Error {
    #[inline]
    fn from_node(node: Node) -> Self {
        Self { inner: Box::new(node) }
    }

    /// Creates a root error from a message, capturing the stack here.
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::from_node(Node::Fundamental { msg: message.into(), code: None, stack: Stack::capture() })
    }

    /// Creates a coded root error from a message, capturing the stack here.
    ///
    /// The plain rendering is the message alone; the extended rendering is
    /// prefixed with `code: <code>, `.
    ///
    /// ```
    /// use error_trail::Error;
    ///
    /// let err = Error::coded(3, "boom");
    /// assert_eq!(err.to_string(), "boom");
    /// assert!(format!("{err:#}").starts_with("code: 3, boom"));
    /// assert!(err.is_code(3));
    /// ```
    pub fn coded<M: Into<String>>(code: u32, message: M) -> Self {
        Self::from_node(Node::Fundamental {
            msg: message.into(),
            code: Some(code),
            stack: Stack::capture(),
        })
    }

    /// Creates a root error from an already boxed foreign error.
    pub fn from_boxed(error: BoxedStdError) -> Self {
        Self::from_node(Node::External(error))
    }

    /// Annotates the error with a message and a stack captured here.
    pub fn wrap<M: Into<String>>(self, message: M) -> Self {
        self.with_message(message).with_stack()
    }

    /// Annotates the error with a message only.
    pub fn with_message<M: Into<String>>(self, message: M) -> Self {
        Self::from_node(Node::WithMessage { cause: self, msg: message.into() })
    }

    /// Annotates the error with a stack captured here.
    pub fn with_stack(self) -> Self {
        let stack = Stack::capture();
        Self::from_node(Node::WithStack { cause: self, stack })
    }

    /// Annotates the error with a code only.
    pub fn with_code(self, code: u32) -> Self {
        Self::from_node(Node::WithCode { cause: self, code })
    }

    /// Annotates the error with a message, then with a code.
    pub fn with_code_message<M: Into<String>>(self, code: u32, message: M) -> Self {
        self.with_message(message).with_code(code)
    }

    /// Annotates the error with a code and a stack captured here.
    pub fn wrap_code(self, code: u32) -> Self {
        self.with_code(code).with_stack()
    }

    /// Annotates the error with a message, a code and a stack captured here.
    pub fn wrap_code_message<M: Into<String>>(self, code: u32, message: M) -> Self {
        self.with_message(message).with_code(code).with_stack()
    }

    /// Returns the variant of this node.
    pub fn kind(&self) -> ErrorKind {
        match &*self.inner {
            Node::Fundamental { .. } => ErrorKind::Fundamental,
            Node::External(_) => ErrorKind::External,
            Node::WithStack { .. } => ErrorKind::WithStack,
            Node::WithMessage { .. } => ErrorKind::WithMessage,
            Node::WithCode { .. } => ErrorKind::WithCode,
        }
    }

    /// Returns the node this one annotates, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Error> {
        match &*self.inner {
            Node::WithStack { cause, .. }
            | Node::WithMessage { cause, .. }
            | Node::WithCode { cause, .. } => Some(cause),
            Node::Fundamental { .. } | Node::External(_) => None,
        }
    }

    /// Returns the code carried by this node, if any.
    #[inline]
    pub fn code(&self) -> Option<u32> {
        match &*self.inner {
            Node::WithCode { code, .. } => Some(*code),
            Node::Fundamental { code, .. } => *code,
            _ => None,
        }
    }

    /// Returns the message carried by this node, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match &*self.inner {
            Node::Fundamental { msg, .. } | Node::WithMessage { msg, .. } => Some(msg),
            _ => None,
        }
    }

    /// Returns the stack captured by this node, if any.
    #[inline]
    pub fn stack(&self) -> Option<&Stack> {
        match &*self.inner {
            Node::Fundamental { stack, .. } | Node::WithStack { stack, .. } => Some(stack),
            _ => None,
        }
    }

    /// Iterates over the chain from this node down to the root.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Returns the terminal node of the chain.
    ///
    /// Wrapping never changes the root cause:
    ///
    /// ```
    /// use error_trail::Error;
    ///
    /// let err = Error::new("eof").wrap("reading header").with_code(7);
    /// assert_eq!(err.root_cause().to_string(), "eof");
    /// ```
    pub fn root_cause(&self) -> &Error {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Returns `true` if any node in the chain carries `code`.
    ///
    /// Several distinct codes may match the same chain.
    pub fn is_code(&self, code: u32) -> bool {
        self.chain().any(|node| node.code() == Some(code))
    }

    /// Returns the outermost code in the chain.
    pub fn first_code(&self) -> Option<u32> {
        self.chain().find_map(Error::code)
    }

    /// Returns the outermost captured stack in the chain.
    pub fn stack_trace(&self) -> Option<&Stack> {
        self.chain().find_map(Error::stack)
    }

    /// Resolves the outermost code against the process-wide registry.
    ///
    /// Falls back to the unknown coder when the chain carries no code or the
    /// code is not registered.
    pub fn coder(&self) -> Arc<dyn Coder> {
        self.coder_in(registry::global())
    }

    /// Resolves the outermost code against `registry`.
    pub fn coder_in(&self, registry: &Registry) -> Arc<dyn Coder> {
        match self.first_code() {
            Some(code) => registry.resolve(code),
            None => registry.unknown(),
        }
    }

    /// Returns the foreign error held by an external root node.
    ///
    /// Combine with [`root_cause`](Error::root_cause) to inspect the original
    /// failure of a wrapped chain.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match &*self.inner {
            Node::External(error) => error.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Returns `true` if this node is an external root holding an `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }
}
