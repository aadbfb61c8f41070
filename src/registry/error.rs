use core::fmt;

/// Misuse of the code registry.
///
/// Both variants are programming errors: codes are meant to be registered
/// exactly once, at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationError {
    /// The code is reserved for the unknown coder.
    Reserved(u32),
    /// The code is already registered.
    Duplicate(u32),
}

impl RegistrationError {
    /// The offending code.
    #[inline]
    pub fn code(&self) -> u32 {
        match self {
            RegistrationError::Reserved(code) | RegistrationError::Duplicate(code) => *code,
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Reserved(code) => {
                write!(f, "code `{}` is reserved as the unknown code", code)
            },
            RegistrationError::Duplicate(code) => write!(f, "code `{}` already registered", code),
        }
    }
}

impl std::error::Error for RegistrationError {}
