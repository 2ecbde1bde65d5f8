//! `edgepersona gateway` — Start the HTTP API server.

use edgepersona_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("EdgePersona Gateway");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Provider:  {} ({})", config.provider.kind, config.provider.model);
    println!("   Store:     {}", config.store.backend);

    edgepersona_gateway::start(config).await?;

    Ok(())
}
