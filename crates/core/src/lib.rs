//! # EdgePersona Core
//!
//! Domain types, traits, and error definitions for the EdgePersona digital
//! persona service. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The two external collaborators — the key-value store and the completion
//! endpoint — are defined as traits here. Implementations live in their
//! respective crates. This enables:
//! - Swapping implementations via configuration
//! - Deterministic unit testing with in-memory fakes
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod event;
pub mod message;
pub mod profile;
pub mod provider;
pub mod store;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result, StoreError};
pub use event::{LifeEvent, NewLifeEvent};
pub use message::{ChatMessage, Role, now_millis};
pub use profile::{
    CommunicationStyle, EmotionalPattern, KnowledgeProfile, PersonaProfile, PersonalityTraits,
    ValueSystem,
};
pub use provider::{CompletionProvider, CompletionRequest, CompletionResponse, Usage};
pub use store::KvStore;
