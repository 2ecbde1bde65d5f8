//! `edgepersona event` — Log a life event or list the logged ones.

use edgepersona_config::AppConfig;
use edgepersona_core::NewLifeEvent;

pub async fn run(
    user: Option<String>,
    content: Option<String>,
    mood: String,
    weight: u8,
    date: Option<String>,
    list: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let user_id = super::resolve_user(&config, user);
    let service = super::storage_service(&config);

    if list {
        let events = service.events(&user_id).await?;
        if events.is_empty() {
            println!("No life events logged for '{user_id}' yet.");
            return Ok(());
        }
        println!("Life events for '{user_id}' (newest first):\n");
        for event in events {
            println!(
                "  [{}] {} (Mood: {}, weight {})",
                event.date, event.content, event.mood, event.weight
            );
        }
        return Ok(());
    }

    let content = content.ok_or("Missing --content. What happened?")?;
    let date = date.unwrap_or_else(|| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let event = service
        .log_event(
            &user_id,
            NewLifeEvent {
                date,
                content,
                mood,
                weight,
            },
        )
        .await?;

    println!(
        "Logged event {} — [{}] {} (Mood: {}, weight {})",
        event.id, event.date, event.content, event.mood, event.weight
    );

    Ok(())
}
