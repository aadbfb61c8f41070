use criterion::Criterion;
use error_trail::Error;
use std::time::Duration;

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone)]
pub enum DomainError {
    Database(String),
    Network(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Network(msg) => write!(f, "Network error: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

// ============================================================================
// Chain Builders
// ============================================================================

/// Builds a chain of `depth` annotations over a foreign root, alternating
/// message, code and stack nodes.
pub fn deep_chain(depth: usize) -> Error {
    let mut err = Error::from(DomainError::Database("query failed".to_string()));
    for i in 0..depth {
        err = match i % 3 {
            0 => err.with_message(format!("layer_{i}")),
            1 => err.with_code(40_000 + i as u32),
            _ => err.with_stack(),
        };
    }
    err
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
