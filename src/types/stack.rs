//! Call-stack capture for error construction sites.
//!
//! A [`Stack`] records the active frames when an error node is built. Frames
//! are kept unresolved until the stack is rendered, so constructing an error
//! stays cheap; symbol names and source locations are only looked up when the
//! extended form (`{:#}`) is requested.
//!
//! # Examples
//!
//! ```
//! use error_trail::Error;
//!
//! let err = Error::new("disk full");
//!
//! // Plain rendering never includes frames.
//! assert_eq!(err.to_string(), "disk full");
//!
//! // The extended form appends the captured frames.
//! let extended = format!("{err:#}");
//! assert!(extended.starts_with("disk full"));
//! ```
use backtrace::{Backtrace, BacktraceSymbol};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

/// Process-wide policy deciding whether constructors record a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureMode {
    /// Always record frames, regardless of environment variables.
    #[default]
    Always,
    /// Record frames only when `RUST_LIB_BACKTRACE` / `RUST_BACKTRACE` enable it.
    Environment,
    /// Never record frames. Stacks render empty.
    Never,
}

impl CaptureMode {
    const fn to_u8(self) -> u8 {
        match self {
            CaptureMode::Always => 0,
            CaptureMode::Environment => 1,
            CaptureMode::Never => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => CaptureMode::Environment,
            2 => CaptureMode::Never,
            _ => CaptureMode::Always,
        }
    }
}

static CAPTURE_MODE: AtomicU8 = AtomicU8::new(CaptureMode::Always.to_u8());

/// Sets the process-wide [`CaptureMode`].
///
/// Only errors constructed after the call are affected.
pub fn set_capture_mode(mode: CaptureMode) {
    CAPTURE_MODE.store(mode.to_u8(), Ordering::Relaxed);
}

/// Returns the current process-wide [`CaptureMode`].
#[inline]
pub fn capture_mode() -> CaptureMode {
    CaptureMode::from_u8(CAPTURE_MODE.load(Ordering::Relaxed))
}

/// `RUST_LIB_BACKTRACE` wins over `RUST_BACKTRACE`; `0` disables. Read once.
fn enabled_by_environment() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| match std::env::var("RUST_LIB_BACKTRACE") {
        Ok(value) => value != "0",
        Err(_) => match std::env::var("RUST_BACKTRACE") {
            Ok(value) => value != "0",
            Err(_) => false,
        },
    })
}

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
const CRATE_IMPL_PREFIX: &str = concat!("<", env!("CARGO_CRATE_NAME"), "::");
const CRATE_TRAIT_MARKER: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");

/// Frames recorded at the point an error node was constructed.
pub struct Stack {
    backtrace: Option<Backtrace>,
    resolved: OnceLock<Vec<Frame>>,
}

impl Stack {
    /// Captures the current call stack according to [`capture_mode`].
    ///
    /// Never fails. When frames are unavailable the stack is simply empty.
    pub fn capture() -> Self {
        let record = match capture_mode() {
            CaptureMode::Always => true,
            CaptureMode::Environment => enabled_by_environment(),
            CaptureMode::Never => false,
        };
        let backtrace = if record { Some(Backtrace::new_unresolved()) } else { None };
        Self { backtrace, resolved: OnceLock::new() }
    }

    /// Returns `true` if frames were actually recorded.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.backtrace.is_some()
    }

    /// Resolves the recorded frames, most recent call first.
    ///
    /// Symbols are looked up on the first call and cached. Frames belonging
    /// to this crate's constructors are skipped, so the first frame is the
    /// code that created the error.
    pub fn frames(&self) -> &[Frame] {
        self.resolved.get_or_init(|| match &self.backtrace {
            Some(backtrace) => resolve_frames(backtrace.clone()),
            None => Vec::new(),
        })
    }

    /// Renders the stack as text.
    ///
    /// The plain form (`extended == false`) is always empty; the extended form
    /// has one line per frame.
    pub fn render(&self, extended: bool) -> String {
        if extended {
            format!("{:#}", self)
        } else {
            String::new()
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Ok(());
        }
        for frame in self.frames() {
            write!(f, "\n    at {frame}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("captured", &self.is_captured())
            .field("resolved", &self.resolved.get().is_some())
            .finish()
    }
}

/// A single resolved call frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    fn unknown() -> Self {
        Self { function: "<unknown>".to_owned(), file: None, line: None }
    }

    fn from_symbol(symbol: &BacktraceSymbol) -> Self {
        Self {
            // `{:#}` drops the trailing symbol hash.
            function: match symbol.name() {
                Some(name) => format!("{:#}", name),
                None => "<unknown>".to_owned(),
            },
            file: symbol.filename().map(|path| path.display().to_string()),
            line: symbol.lineno(),
        }
    }

    /// Demangled function name, or `<unknown>` when no symbol was found.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file, when debug info is available.
    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Source line, when debug info is available.
    #[inline]
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.function)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, " ({file}:{line})"),
            (Some(file), None) => write!(f, " ({file})"),
            _ => Ok(()),
        }
    }
}

/// Inlined calls share a frame; each becomes its own entry.
fn resolve_frames(mut backtrace: Backtrace) -> Vec<Frame> {
    backtrace.resolve();
    let mut frames = Vec::new();
    for frame in backtrace.frames() {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            frames.push(Frame::unknown());
        } else {
            frames.extend(symbols.iter().map(Frame::from_symbol));
        }
    }
    frames.into_iter().skip_while(|frame| is_internal(&frame.function)).collect()
}

fn is_internal(function: &str) -> bool {
    if function.starts_with("backtrace::") || function.starts_with("<backtrace::") {
        return true;
    }
    let ours = function.starts_with(CRATE_PREFIX)
        || function.starts_with(CRATE_IMPL_PREFIX)
        || function.contains(CRATE_TRAIT_MARKER);
    ours && !function.contains("::tests::")
}
