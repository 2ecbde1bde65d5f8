//! Profile Builder — the questionnaire-answer-to-profile transform.
//!
//! Pure, no I/O. Answers arrive as a flat JSON object keyed by the deck's
//! dotted paths ("traits.riskTaking", "values.priority", ...). Missing or
//! malformed answers degrade to safe defaults instead of failing: onboarding
//! must never hard-fail on a skipped question.

use edgepersona_core::{
    now_millis, CommunicationStyle, EmotionalPattern, KnowledgeProfile, PersonaProfile,
    PersonalityTraits, ValueSystem,
};
use serde_json::{Map, Value};

/// Display name used when onboarding never asked for one.
pub const DEFAULT_PROFILE_NAME: &str = "My Digital Self";

/// Build a persona profile from a flat answer bag.
///
/// `id` and `createdAt` are injected here, never read from the answers. Each
/// trait axis defaults to 0.5 when absent or non-numeric; an explicit 0.0
/// answer is kept as 0.0. Out-of-range numeric answers are clamped.
pub fn build_profile(
    user_id: impl Into<String>,
    name: Option<String>,
    answers: &Map<String, Value>,
) -> PersonaProfile {
    PersonaProfile {
        id: user_id.into(),
        name: name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
        core_identities: list(answers, "coreIdentities"),
        domain_expertise: list(answers, "domainExpertise"),
        life_focus: text(answers, "lifeFocus"),
        traits: PersonalityTraits {
            planning_vs_spontaneity: axis(answers, "traits.planningVsSpontaneity"),
            rationality_vs_emotion: axis(answers, "traits.rationalityVsEmotion"),
            big_picture_vs_detail: axis(answers, "traits.bigPictureVsDetail"),
            independence_vs_collaboration: axis(answers, "traits.independenceVsCollaboration"),
            risk_taking: axis(answers, "traits.riskTaking"),
        },
        values: ValueSystem {
            priority: list(answers, "values.priority"),
            integrity: text(answers, "values.integrity"),
            trusted_sources: list(answers, "values.trustedSources"),
            admired_traits: list(answers, "values.admiredTraits"),
        },
        emotional: EmotionalPattern {
            stress_response: text(answers, "emotional.stressResponse"),
            achievement_driver: list(answers, "emotional.achievementDriver"),
            preferred_tone: text(answers, "emotional.preferredTone"),
        },
        communication: CommunicationStyle {
            verbal_ticks: list(answers, "communication.verbalTicks"),
            sample_analysis: text(answers, "communication.sampleAnalysis"),
            metaphors: list(answers, "communication.metaphors"),
        },
        knowledge: KnowledgeProfile {
            influences: text(answers, "knowledge.influences"),
            future_concerns: list(answers, "knowledge.futureConcerns"),
        },
        created_at: now_millis(),
    }
}

/// Coerce a raw answer into a string list.
///
/// A sequence passes through (non-string elements stringified); a string is
/// split on ASCII `,` or full-width `，`, pieces trimmed, empties dropped;
/// anything else yields an empty list.
pub fn parse_list(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) => s
            .split([',', '，'])
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

fn list(answers: &Map<String, Value>, key: &str) -> Vec<String> {
    parse_list(answers.get(key))
}

fn text(answers: &Map<String, Value>, key: &str) -> String {
    match answers.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn axis(answers: &Map<String, Value>, key: &str) -> f64 {
    match answers.get(key).and_then(Value::as_f64) {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => PersonalityTraits::DEFAULT_AXIS,
    }
}
