//! Mapping from numeric codes to [`Coder`] descriptors.
//!
//! Every [`Registry`] is seeded with the unknown coder under
//! [`UNKNOWN_CODE`]; that code can never be registered or removed. Lookups and
//! mutations share one `RwLock`, so registration may race freely with
//! resolution.
//!
//! The process-wide registry is created on first use and reached through
//! [`global`] or the free functions of this module. Registration conflicts
//! are programmer errors: [`register`] reports them as a
//! [`RegistrationError`], and [`must_register`] panics with the same text.
//!
//! # Examples
//!
//! ```
//! use error_trail::registry;
//! use error_trail::{Coder, DefaultCoder, Error};
//!
//! registry::must_register(DefaultCoder::new(20013, "bad request").with_status(400));
//!
//! let err = Error::new("missing field `name`").with_code(20013);
//! assert_eq!(err.coder().http_status(), 400);
//!
//! registry::unregister(20013);
//! assert_eq!(err.coder().code(), 1);
//! ```

mod error;

pub use error::RegistrationError;

use crate::traits::Coder;
use crate::types::{DefaultCoder, UNKNOWN_CODE};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe table of registered coders.
pub struct Registry {
    codes: RwLock<HashMap<u32, Arc<dyn Coder>>>,
    unknown: Arc<dyn Coder>,
}

impl Registry {
    /// Creates a registry holding only the unknown coder.
    pub fn new() -> Self {
        let unknown: Arc<dyn Coder> = Arc::new(DefaultCoder::unknown());
        let mut codes = HashMap::new();
        codes.insert(UNKNOWN_CODE, Arc::clone(&unknown));
        Self { codes: RwLock::new(codes), unknown }
    }

    // A panic while holding the lock cannot leave the map half-updated:
    // every mutation is a single insert or remove.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<u32, Arc<dyn Coder>>> {
        self.codes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<u32, Arc<dyn Coder>>> {
        self.codes.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `coder` under its code.
    ///
    /// Fails if the code is [`UNKNOWN_CODE`] or already present.
    pub fn register<C>(&self, coder: C) -> Result<(), RegistrationError>
    where
        C: Coder + 'static,
    {
        self.register_shared(Arc::new(coder))
    }

    /// Registers an already shared coder.
    pub fn register_shared(&self, coder: Arc<dyn Coder>) -> Result<(), RegistrationError> {
        let code = coder.code();
        if code == UNKNOWN_CODE {
            #[cfg(feature = "tracing")]
            tracing::warn!(code, "attempted to register the reserved unknown code");
            return Err(RegistrationError::Reserved(code));
        }

        let mut codes = self.write();
        if codes.contains_key(&code) {
            #[cfg(feature = "tracing")]
            tracing::warn!(code, "error code already registered");
            return Err(RegistrationError::Duplicate(code));
        }
        codes.insert(code, coder);

        #[cfg(feature = "tracing")]
        tracing::debug!(code, "registered error code");
        Ok(())
    }

    /// Registers every coder in order, stopping at the first conflict.
    ///
    /// Coders registered before the conflict stay registered.
    pub fn register_all<I, C>(&self, coders: I) -> Result<(), RegistrationError>
    where
        I: IntoIterator<Item = C>,
        C: Coder + 'static,
    {
        for coder in coders {
            self.register(coder)?;
        }
        Ok(())
    }

    /// Removes the coder registered under `code`, returning it.
    ///
    /// Absent codes and [`UNKNOWN_CODE`] are left alone.
    pub fn unregister(&self, code: u32) -> Option<Arc<dyn Coder>> {
        if code == UNKNOWN_CODE {
            return None;
        }
        let removed = self.write().remove(&code);

        #[cfg(feature = "tracing")]
        if removed.is_some() {
            tracing::debug!(code, "unregistered error code");
        }
        removed
    }

    /// Returns the coder registered under `code`.
    pub fn lookup(&self, code: u32) -> Option<Arc<dyn Coder>> {
        self.read().get(&code).cloned()
    }

    /// Returns the coder registered under `code`, or the unknown coder.
    pub fn resolve(&self, code: u32) -> Arc<dyn Coder> {
        self.lookup(code).unwrap_or_else(|| self.unknown())
    }

    /// Returns the unknown coder.
    #[inline]
    pub fn unknown(&self) -> Arc<dyn Coder> {
        Arc::clone(&self.unknown)
    }

    /// Returns `true` if `code` is registered.
    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        self.read().contains_key(&code)
    }

    /// Number of registered codes, including the unknown code.
    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Always `false`: the unknown code is permanently registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self.read().keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("codes", &self.codes()).finish()
    }
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Returns the process-wide registry.
#[inline]
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Registers `coder` in the process-wide registry.
#[must_use = "a registration conflict is a programming error and must not be ignored"]
pub fn register<C>(coder: C) -> Result<(), RegistrationError>
where
    C: Coder + 'static,
{
    global().register(coder)
}

/// Registers `coder` in the process-wide registry, panicking on conflict.
///
/// Intended for start-up code, where a reserved or duplicate code is a bug.
///
/// # Panics
///
/// Panics with ``code `1` is reserved as the unknown code`` or
/// ``code `N` already registered``.
#[track_caller]
pub fn must_register<C>(coder: C)
where
    C: Coder + 'static,
{
    if let Err(err) = register(coder) {
        panic!("{}", err);
    }
}

/// Removes `code` from the process-wide registry.
pub fn unregister(code: u32) -> Option<Arc<dyn Coder>> {
    global().unregister(code)
}

/// Looks `code` up in the process-wide registry.
pub fn lookup(code: u32) -> Option<Arc<dyn Coder>> {
    global().lookup(code)
}
