//! Error types for the EdgePersona domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all EdgePersona operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Store errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Completion endpoint errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Input validation (400-equivalent) ---
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // --- Not-found, distinct from general failure so callers can branch
    //     to onboarding instead of an error screen ---
    #[error("Persona not initialized for user '{user_id}'")]
    ProfileNotFound { user_id: String },

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage read failed for key '{key}': {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Storage write failed for key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Storage delete failed for key '{key}': {reason}")]
    DeleteFailed { key: String, reason: String },

    #[error("Stored value under '{key}' is not valid JSON: {reason}")]
    Corrupted { key: String, reason: String },
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Completion response contained no generated text")]
    EmptyCompletion,

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}
