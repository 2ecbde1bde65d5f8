//! `edgepersona chat` — Interactive or single-message chat with the persona.

use edgepersona_config::AppConfig;
use edgepersona_core::Error;
use std::io::Write;

pub async fn run(
    user: Option<String>,
    message: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for the API key early so the error is actionable
    if config.api_key.is_none() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    EDGEPERSONA_API_KEY   (generic)");
        eprintln!("    DASHSCOPE_API_KEY     (Aliyun Bailian / DashScope)");
        eprintln!("    DEEPSEEK_API_KEY      (DeepSeek platform)");
        eprintln!();
        eprintln!("  Or add api_key to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let user_id = super::resolve_user(&config, user);
    let service = super::chat_service(&config)?;

    // Fail fast with a pointer to onboarding instead of a raw error
    let profile = match service.get_profile(&user_id).await {
        Ok(profile) => profile,
        Err(Error::ProfileNotFound { .. }) => {
            return Err(format!(
                "No persona found for user '{user_id}'. Run `edgepersona onboard` first."
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(msg) = message {
        // Single message mode
        eprint!("  Thinking...");
        let reply = service.chat(&user_id, &msg).await?;
        eprint!("\r            \r");
        println!("{}", reply.content);
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  EdgePersona — talking to '{}'", profile.name);
    println!("  Provider: {}   Model: {}", config.provider.kind, config.provider.model);
    println!();
    println!("  Type your message and press Enter.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let stdin = std::io::stdin();
    loop {
        print!("  You > ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        eprint!("  ...");
        match service.chat(&user_id, line).await {
            Ok(reply) => {
                eprint!("\r     \r");
                println!();
                for text in reply.content.lines() {
                    println!("  {} > {text}", profile.name);
                }
                println!();
            }
            Err(e) => {
                eprint!("\r     \r");
                eprintln!("  [Error] {e}");
                println!();
            }
        }
    }

    println!();
    println!("  Goodbye!");
    println!();

    Ok(())
}
