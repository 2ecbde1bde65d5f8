//! `edgepersona doctor` — Diagnose configuration and connectivity.

use edgepersona_config::AppConfig;
use edgepersona_core::{CompletionProvider as _, Error, KvStore as _};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("EdgePersona Doctor — Diagnostics");
    println!("================================\n");

    let mut issues = 0;

    // Config
    let config_path = AppConfig::config_dir().join("config.toml");
    let config = if config_path.exists() {
        match AppConfig::load() {
            Ok(config) => {
                println!("  [ok]   Config file valid");
                Some(config)
            }
            Err(e) => {
                println!("  [FAIL] Config file invalid: {e}");
                issues += 1;
                None
            }
        }
    } else {
        println!("  [warn] No config file — run `edgepersona onboard` (defaults in effect)");
        Some(AppConfig::load().unwrap_or_default())
    };

    let Some(config) = config else {
        println!("\n  {issues} issue(s) found.");
        return Ok(());
    };

    // API key
    if config.api_key.is_some() {
        println!("  [ok]   API key configured");
    } else {
        println!("  [warn] No API key — chat will fail; set EDGEPERSONA_API_KEY");
        issues += 1;
    }

    // Store: round-trip a probe document
    let store = edgepersona_store::build_from_config(&config);
    let probe_key = "doctor_probe";
    let probe = serde_json::json!({"probe": true});
    match store.put(probe_key, probe.clone()).await {
        Ok(()) => match store.get(probe_key).await {
            Ok(Some(value)) if value == probe => {
                let _ = store.delete(probe_key).await;
                println!("  [ok]   Store '{}' read/write", store.name());
            }
            _ => {
                println!("  [FAIL] Store '{}' wrote but could not read back", store.name());
                issues += 1;
            }
        },
        Err(e) => {
            println!("  [FAIL] Store '{}' write failed: {e}", store.name());
            issues += 1;
        }
    }

    // Provider reachability (only meaningful with a key)
    if config.api_key.is_some() {
        match edgepersona_providers::build_from_config(&config) {
            Ok(provider) => match provider.health_check().await {
                Ok(true) => println!("  [ok]   Provider '{}' reachable", provider.name()),
                Ok(false) => {
                    println!("  [warn] Provider '{}' rejected the health check", provider.name());
                    issues += 1;
                }
                Err(e) => {
                    println!("  [warn] Provider unreachable: {e}");
                    issues += 1;
                }
            },
            Err(e) => {
                println!("  [FAIL] Provider configuration invalid: {e}");
                issues += 1;
            }
        }
    }

    // Persona presence
    let service = super::storage_service(&config);
    match service.get_profile(&config.user_id).await {
        Ok(profile) => println!("  [ok]   Persona '{}' present for user '{}'", profile.name, config.user_id),
        Err(Error::ProfileNotFound { .. }) => {
            println!("  [warn] No persona for user '{}' — run `edgepersona onboard`", config.user_id);
        }
        Err(e) => {
            println!("  [FAIL] Persona read failed: {e}");
            issues += 1;
        }
    }

    println!();
    if issues == 0 {
        println!("  All checks passed.");
    } else {
        println!("  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
