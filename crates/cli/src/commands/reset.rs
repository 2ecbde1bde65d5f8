//! `edgepersona reset` — Delete the persona profile, history, and events.

use edgepersona_config::AppConfig;
use std::io::Write;

pub async fn run(user: Option<String>, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let user_id = super::resolve_user(&config, user);

    if !yes {
        print!("Delete the persona, chat history, and life events for '{user_id}'? [y/N] ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        if !matches!(line.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let service = super::storage_service(&config);
    service.reset(&user_id).await?;

    println!("Persona data for '{user_id}' deleted.");
    Ok(())
}
