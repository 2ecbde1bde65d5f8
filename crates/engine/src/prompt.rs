//! Conversation Assembler — system-prompt rendering and outbound sequence
//! construction.
//!
//! Pure functions over supplied state; the service layer owns the I/O. The
//! system message is reconstructed fresh every turn and never persisted as
//! part of history.

use edgepersona_core::{ChatMessage, LifeEvent, PersonaProfile, PersonalityTraits};

/// How many trailing history entries ride along on each turn.
pub const HISTORY_WINDOW: usize = 6;

/// How many recent life events flow into the system prompt.
pub const EVENT_FEED_CAP: usize = 5;

/// Display name used in the prompt when the profile has none.
const FALLBACK_PERSONA_NAME: &str = "Avatar";

/// Render the persona instruction block.
///
/// Profile fields are embedded verbatim as data; events arrive newest-first
/// and only the first [`EVENT_FEED_CAP`] are included.
pub fn render_system_prompt(profile: &PersonaProfile, events: &[LifeEvent]) -> String {
    let name = if profile.name.is_empty() {
        FALLBACK_PERSONA_NAME
    } else {
        &profile.name
    };

    let event_block = events
        .iter()
        .take(EVENT_FEED_CAP)
        .map(|e| format!("- {}: {} (Mood: {})", e.date, e.content, e.mood))
        .collect::<Vec<_>>()
        .join("\n");

    // Values/communication blocks are serialized JSON so the model sees the
    // exact captured answers. These structs serialize infallibly.
    let identities = serde_json::to_string(&profile.core_identities).unwrap_or_default();
    let expertise = serde_json::to_string(&profile.domain_expertise).unwrap_or_default();
    let values = serde_json::to_string(&profile.values).unwrap_or_default();
    let communication = serde_json::to_string(&profile.communication).unwrap_or_default();
    let verbal_ticks = serde_json::to_string(&profile.communication.verbal_ticks).unwrap_or_default();

    format!(
        "You are a digital persona named {name}.\n\
         You are NOT an AI assistant. You ARE the user's digital mirror.\n\
         \n\
         CORE IDENTITY:\n\
         {identities}\n\
         Expertise: {expertise}\n\
         Values: {values}\n\
         Communication Style: {communication}\n\
         Emotional Tone: {tone}\n\
         \n\
         MAJOR LIFE EVENTS (Long-term Memory):\n\
         {event_block}\n\
         \n\
         INSTRUCTIONS:\n\
         - Adopt the user's verbal ticks: {verbal_ticks}.\n\
         - Respond exactly how this person would respond.\n\
         - Do not be polite if the persona is aggressive. Be authentic to the data.\n\
         - Keep responses concise unless asked to elaborate.",
        tone = profile.emotional.preferred_tone,
    )
}

/// Build the outbound message sequence for one chat turn.
///
/// Order: system instruction, then the trailing [`HISTORY_WINDOW`] prior
/// entries in original order, then the new user message.
pub fn assemble_turn(
    profile: &PersonaProfile,
    prior_history: &[ChatMessage],
    events: &[LifeEvent],
    user_message: &ChatMessage,
) -> Vec<ChatMessage> {
    let window_start = prior_history.len().saturating_sub(HISTORY_WINDOW);

    let mut outbound = Vec::with_capacity(HISTORY_WINDOW + 2);
    outbound.push(ChatMessage::system(render_system_prompt(profile, events)));
    outbound.extend_from_slice(&prior_history[window_start..]);
    outbound.push(user_message.clone());
    outbound
}

/// Sampling temperature for one turn.
///
/// `0.7 + planningVsSpontaneity * 0.3`: deterministic, monotonically
/// increasing in the spontaneity axis, range [0.7, 1.0]. The only place a
/// trait scalar influences model behavior.
pub fn temperature_for(traits: &PersonalityTraits) -> f32 {
    (0.7 + traits.planning_vs_spontaneity * 0.3) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use edgepersona_core::{
        CommunicationStyle, EmotionalPattern, KnowledgeProfile, Role, ValueSystem,
    };

    fn profile() -> PersonaProfile {
        PersonaProfile {
            id: "u1".into(),
            name: "Nova".into(),
            core_identities: vec!["founder".into()],
            domain_expertise: vec!["storage engines".into()],
            life_focus: "Building and expanding".into(),
            traits: PersonalityTraits::default(),
            values: ValueSystem::default(),
            emotional: EmotionalPattern {
                stress_response: String::new(),
                achievement_driver: Vec::new(),
                preferred_tone: "Rational analyst".into(),
            },
            communication: CommunicationStyle {
                verbal_ticks: vec!["to be fair".into()],
                sample_analysis: String::new(),
                metaphors: Vec::new(),
            },
            knowledge: KnowledgeProfile::default(),
            created_at: 1,
        }
    }

    fn event(n: u32) -> LifeEvent {
        LifeEvent {
            id: n.to_string(),
            date: format!("2026-08-{n:02}"),
            content: format!("event {n}"),
            mood: "calm".into(),
            weight: 3,
        }
    }

    #[test]
    fn system_prompt_embeds_persona_data() {
        let prompt = render_system_prompt(&profile(), &[]);
        assert!(prompt.contains("digital persona named Nova"));
        assert!(prompt.contains("founder"));
        assert!(prompt.contains("Rational analyst"));
        assert!(prompt.contains("to be fair"));
    }

    #[test]
    fn empty_name_falls_back_to_avatar() {
        let mut p = profile();
        p.name = String::new();
        let prompt = render_system_prompt(&p, &[]);
        assert!(prompt.contains("digital persona named Avatar"));
    }

    #[test]
    fn event_feed_caps_at_five_newest_first() {
        // Stored newest-first: event 8 is the most recent
        let events: Vec<LifeEvent> = (1..=8).rev().map(event).collect();
        let prompt = render_system_prompt(&profile(), &events);

        for n in 4..=8 {
            assert!(prompt.contains(&format!("event {n}")), "missing event {n}");
        }
        for n in 1..=3 {
            assert!(!prompt.contains(&format!("event {n}")), "stale event {n}");
        }
        // Most recent first in the rendered block
        let pos8 = prompt.find("event 8").unwrap();
        let pos4 = prompt.find("event 4").unwrap();
        assert!(pos8 < pos4);
    }

    #[test]
    fn outbound_sequence_is_system_window_user() {
        let history: Vec<ChatMessage> = (0..10)
            .map(|i| {
                if i % 2 == 0 {
                    ChatMessage::user(format!("q{i}"))
                } else {
                    ChatMessage::assistant(format!("a{i}"))
                }
            })
            .collect();
        let user_msg = ChatMessage::user("latest");

        let outbound = assemble_turn(&profile(), &history, &[], &user_msg);

        assert_eq!(outbound.len(), 8); // system + 6 window + new user
        assert_eq!(outbound[0].role, Role::System);
        assert_eq!(outbound[1].content, "q4"); // most recent 6 start here
        assert_eq!(outbound[6].content, "a9");
        assert_eq!(outbound[7].content, "latest");
    }

    #[test]
    fn short_history_rides_along_whole() {
        let history = vec![ChatMessage::user("q"), ChatMessage::assistant("a")];
        let outbound = assemble_turn(&profile(), &history, &[], &ChatMessage::user("next"));
        assert_eq!(outbound.len(), 4);
    }

    #[test]
    fn temperature_tracks_spontaneity_axis() {
        let mut traits = PersonalityTraits::default();

        traits.planning_vs_spontaneity = 0.0;
        assert!((temperature_for(&traits) - 0.7).abs() < 1e-6);

        traits.planning_vs_spontaneity = 0.5;
        assert!((temperature_for(&traits) - 0.85).abs() < 1e-6);

        traits.planning_vs_spontaneity = 1.0;
        assert!((temperature_for(&traits) - 1.0).abs() < 1e-6);
    }
}
