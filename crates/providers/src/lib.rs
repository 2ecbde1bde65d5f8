//! Completion provider implementations for EdgePersona.
//!
//! All providers implement the `edgepersona_core::CompletionProvider` trait.
//! Construction is config-driven and fails closed when no API key is set.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

use async_trait::async_trait;
use edgepersona_config::{AppConfig, ConfigError};
use edgepersona_core::error::ProviderError;
use edgepersona_core::{CompletionProvider, CompletionRequest, CompletionResponse};
use std::sync::Arc;

/// Placeholder provider for storage-only flows where no API key is set.
///
/// Any completion attempt fails with [`ProviderError::NotConfigured`]; there
/// is deliberately no fallback credential.
pub struct UnconfiguredProvider;

#[async_trait]
impl CompletionProvider for UnconfiguredProvider {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn complete(
        &self,
        _request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        Err(ProviderError::NotConfigured(
            "no API key configured; set EDGEPERSONA_API_KEY".into(),
        ))
    }

    async fn health_check(&self) -> Result<bool, ProviderError> {
        Ok(false)
    }
}

/// Build the configured completion provider.
///
/// The API key must be resolved from config or environment; there is no
/// fallback credential, so a missing key is a hard error here.
pub fn build_from_config(config: &AppConfig) -> Result<Arc<dyn CompletionProvider>, ConfigError> {
    let api_key = config.require_api_key()?;

    let provider = match config.provider.kind.as_str() {
        "deepseek" => OpenAiCompatProvider::deepseek(api_key),
        "openai" => OpenAiCompatProvider::openai(api_key),
        "custom" => {
            // Validation guarantees base_url is present for "custom"
            let base_url = config.provider.base_url.as_deref().ok_or_else(|| {
                ConfigError::ValidationError(
                    "provider.base_url is required when provider.kind = 'custom'".into(),
                )
            })?;
            OpenAiCompatProvider::new("custom", base_url, api_key)
        }
        _ => match config.provider.base_url.as_deref() {
            Some(base_url) => OpenAiCompatProvider::new(config.provider.kind.clone(), base_url, api_key),
            None => OpenAiCompatProvider::dashscope(api_key),
        },
    };

    Ok(Arc::new(provider))
}
