//! Error types for storage access and configuration parsing.
//!
//! Storage errors never leave the crate: the theme module turns them into
//! "no stored preference" or drops them. Only [`ConfigError`] reaches JS.

/// Failure reading or writing the persisted preference slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The host exposes no storage (disabled, sandboxed iframe, SSR).
    #[error("local storage unavailable")]
    Unavailable,
    /// The host refused the access (private mode, quota, security policy).
    #[error("local storage access failed: {0}")]
    Access(String),
}

/// Invalid [`crate::config::PageConfig`] overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scroll-spy threshold {0} outside 0.0..=1.0")]
    Threshold(f64),
    #[error("theme storage key must not be empty")]
    EmptyStorageKey,
}
