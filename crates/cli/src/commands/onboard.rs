//! `edgepersona onboard` — Run the questionnaire, build the persona, save it.

use edgepersona_config::AppConfig;
use edgepersona_engine::questionnaire::{Card, CardKind, DECK};
use edgepersona_engine::{build_profile, DEFAULT_PROFILE_NAME};
use serde_json::{Map, Value};
use std::io::Write;

pub async fn run(user: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("EdgePersona — Persona Onboarding");
    println!("================================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {}", config_dir.display());
    }
    if !config_path.exists() {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("Created config.toml at: {}", config_path.display());
        println!("(Add your API key there, or set EDGEPERSONA_API_KEY, before chatting.)\n");
    }

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let user_id = super::resolve_user(&config, user);

    println!("Answer each card; press Enter to skip a question.");
    println!("Skipped answers fall back to neutral defaults.\n");

    let name = prompt(&format!(
        "What should your digital self be called? [{DEFAULT_PROFILE_NAME}] "
    ))?;
    let name = if name.is_empty() { None } else { Some(name) };

    let mut answers = Map::new();
    let mut module = "";
    for card in DECK {
        if card.module != module {
            module = card.module;
            println!("\n--- {module} ---");
        }
        if let Some(value) = ask(card)? {
            answers.insert(card.key.to_string(), value);
        }
    }

    let profile = build_profile(user_id.clone(), name, &answers);
    let service = super::storage_service(&config);
    service.save_profile(profile.clone()).await?;

    println!("\nPersona '{}' saved for user '{}'.", profile.name, user_id);
    println!("Run `edgepersona chat` to talk to your digital self.\n");

    Ok(())
}

/// Ask one card. Returns None when the answer was skipped.
fn ask(card: &Card) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    println!("\n{}", card.question);

    match card.kind {
        CardKind::Text | CardKind::LongText => {
            let line = prompt("> ")?;
            Ok((!line.is_empty()).then(|| Value::String(line)))
        }
        CardKind::Slider => {
            let left = card.left_label.unwrap_or("0");
            let right = card.right_label.unwrap_or("1");
            let line = prompt(&format!("0.0 = {left}, 1.0 = {right} [0.5] > "))?;
            match line.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(Value::from(v.clamp(0.0, 1.0)))),
                _ => Ok(None),
            }
        }
        CardKind::Choice => {
            print_options(card.options);
            let line = prompt("number > ")?;
            Ok(pick_option(card.options, &line).map(Value::String))
        }
        CardKind::MultiChoice => {
            print_options(card.options);
            let line = prompt("numbers, comma-separated > ")?;
            let picked: Vec<Value> = line
                .split(',')
                .filter_map(|piece| pick_option(card.options, piece.trim()))
                .map(Value::String)
                .collect();
            Ok((!picked.is_empty()).then(|| Value::Array(picked)))
        }
        CardKind::Sort => {
            print_options(card.options);
            let line = prompt("order, comma-separated (Enter keeps shown order) > ")?;
            let picked: Vec<Value> = line
                .split(',')
                .filter_map(|piece| pick_option(card.options, piece.trim()))
                .map(Value::String)
                .collect();
            if picked.len() == card.options.len() {
                Ok(Some(Value::Array(picked)))
            } else {
                // Keep the shown order
                Ok(Some(Value::Array(
                    card.options
                        .iter()
                        .map(|o| Value::String((*o).to_string()))
                        .collect(),
                )))
            }
        }
    }
}

fn print_options(options: &[&str]) {
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
}

/// Resolve a 1-based index into the option list; non-numeric input is taken
/// verbatim when non-empty.
fn pick_option(options: &[&str], input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => Some(options[n - 1].to_string()),
        Ok(_) => None,
        Err(_) => Some(input.to_string()),
    }
}

fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_option_by_index() {
        let options = ["Schedule", "Quality", "Cost"];
        assert_eq!(pick_option(&options, "2"), Some("Quality".to_string()));
        assert_eq!(pick_option(&options, "4"), None);
        assert_eq!(pick_option(&options, "0"), None);
    }

    #[test]
    fn pick_option_accepts_free_text() {
        let options = ["Schedule", "Quality"];
        assert_eq!(
            pick_option(&options, "Team morale"),
            Some("Team morale".to_string())
        );
        assert_eq!(pick_option(&options, ""), None);
    }
}
