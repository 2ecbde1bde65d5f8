//! CLI command implementations.

pub mod chat;
pub mod doctor;
pub mod event;
pub mod gateway;
pub mod onboard;
pub mod reset;

use edgepersona_config::AppConfig;
use edgepersona_engine::PersonaService;
use edgepersona_providers::UnconfiguredProvider;
use std::sync::Arc;

/// Resolve the active user id: CLI override, else config.
pub fn resolve_user(config: &AppConfig, user: Option<String>) -> String {
    user.unwrap_or_else(|| config.user_id.clone())
}

/// Build a service for chat flows. Fails when no API key is configured.
pub fn chat_service(config: &AppConfig) -> Result<PersonaService, Box<dyn std::error::Error>> {
    let store = edgepersona_store::build_from_config(config);
    let provider = edgepersona_providers::build_from_config(config)?;
    Ok(PersonaService::new(
        store,
        provider,
        config.provider.model.clone(),
    ))
}

/// Build a service for storage-only flows (onboard, event, reset).
///
/// No API key is needed for these; the provider slot holds a placeholder
/// that refuses completions.
pub fn storage_service(config: &AppConfig) -> PersonaService {
    let store = edgepersona_store::build_from_config(config);
    PersonaService::new(
        store,
        Arc::new(UnconfiguredProvider),
        config.provider.model.clone(),
    )
}
