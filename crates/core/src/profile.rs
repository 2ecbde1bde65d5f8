//! The persona profile — the root aggregate and sole source of persona truth.
//!
//! Built once by the onboarding questionnaire, optionally replaced wholesale
//! by an editor flow, never partially patched by the chat path. The wire
//! format is camelCase to match the HTTP interface consumed by the front-end.

use serde::{Deserialize, Serialize};

/// Five independent bipolar personality axes, each constrained to `[0.0, 1.0]`.
///
/// 0.0 is the left pole of each spectrum, 1.0 the right. There is no
/// cross-axis invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    /// meticulous planning ↔ spontaneity
    pub planning_vs_spontaneity: f64,
    /// logic-led ↔ feeling-led decisions
    pub rationality_vs_emotion: f64,
    /// big-picture ↔ detail orientation
    pub big_picture_vs_detail: f64,
    /// working alone ↔ collaborating
    pub independence_vs_collaboration: f64,
    /// risk-averse ↔ risk-seeking
    pub risk_taking: f64,
}

impl PersonalityTraits {
    /// The neutral midpoint used when an axis was never answered.
    pub const DEFAULT_AXIS: f64 = 0.5;

    /// Return a copy with every axis clamped to `[0.0, 1.0]`.
    ///
    /// Profiles built by the questionnaire are in range by construction;
    /// this guards profiles supplied directly over the HTTP surface.
    pub fn clamped(&self) -> Self {
        let c = |v: f64| {
            if v.is_finite() {
                v.clamp(0.0, 1.0)
            } else {
                Self::DEFAULT_AXIS
            }
        };
        Self {
            planning_vs_spontaneity: c(self.planning_vs_spontaneity),
            rationality_vs_emotion: c(self.rationality_vs_emotion),
            big_picture_vs_detail: c(self.big_picture_vs_detail),
            independence_vs_collaboration: c(self.independence_vs_collaboration),
            risk_taking: c(self.risk_taking),
        }
    }
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            planning_vs_spontaneity: Self::DEFAULT_AXIS,
            rationality_vs_emotion: Self::DEFAULT_AXIS,
            big_picture_vs_detail: Self::DEFAULT_AXIS,
            independence_vs_collaboration: Self::DEFAULT_AXIS,
            risk_taking: Self::DEFAULT_AXIS,
        }
    }
}

/// Qualitative value-system answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSystem {
    /// What the user sacrifices last, highest priority first
    pub priority: Vec<String>,
    /// Stance on integrity under pressure
    pub integrity: String,
    /// Information sources the user trusts when forming opinions
    pub trusted_sources: Vec<String>,
    /// Traits admired in role models
    pub admired_traits: Vec<String>,
}

/// Emotional pattern answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalPattern {
    /// First reaction under heavy pressure
    pub stress_response: String,
    /// What produces a strong sense of achievement
    pub achievement_driver: Vec<String>,
    /// The emotional register the persona should take
    pub preferred_tone: String,
}

/// Expression-style answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationStyle {
    /// Habitual phrases the persona must imitate
    pub verbal_ticks: Vec<String>,
    /// A free-text writing sample for style analysis
    pub sample_analysis: String,
    /// Metaphor families the user naturally reaches for
    pub metaphors: Vec<String>,
}

/// Knowledge-background answers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeProfile {
    /// The book / film / person that shaped the user most
    pub influences: String,
    /// Fields the user is watching over the next year
    pub future_concerns: Vec<String>,
}

/// The full persona record. One per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaProfile {
    /// Opaque user identifier. Assigned at creation, never changes.
    pub id: String,

    /// Display name, mutable.
    pub name: String,

    /// Identity labels the user most identifies with
    pub core_identities: Vec<String>,

    /// Professional fields or long-cultivated hobbies
    pub domain_expertise: Vec<String>,

    /// Selected label for the current life stage
    pub life_focus: String,

    pub traits: PersonalityTraits,
    pub values: ValueSystem,
    pub emotional: EmotionalPattern,
    pub communication: CommunicationStyle,
    pub knowledge: KnowledgeProfile,

    /// Unix milliseconds, set once at build time, immutable thereafter.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_profile() -> PersonaProfile {
        PersonaProfile {
            id: "u1".into(),
            name: "My Digital Self".into(),
            core_identities: vec!["founder".into()],
            domain_expertise: vec!["distributed systems".into()],
            life_focus: "Build and expand".into(),
            traits: PersonalityTraits::default(),
            values: ValueSystem::default(),
            emotional: EmotionalPattern::default(),
            communication: CommunicationStyle::default(),
            knowledge: KnowledgeProfile::default(),
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_string(&minimal_profile()).unwrap();
        assert!(json.contains("\"coreIdentities\""));
        assert!(json.contains("\"planningVsSpontaneity\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("core_identities"));
    }

    #[test]
    fn profile_roundtrip() {
        let profile = minimal_profile();
        let json = serde_json::to_string(&profile).unwrap();
        let back: PersonaProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn clamping_forces_axes_into_range() {
        let traits = PersonalityTraits {
            planning_vs_spontaneity: 1.7,
            rationality_vs_emotion: -0.2,
            big_picture_vs_detail: f64::NAN,
            independence_vs_collaboration: 0.0,
            risk_taking: 1.0,
        };
        let clamped = traits.clamped();
        assert_eq!(clamped.planning_vs_spontaneity, 1.0);
        assert_eq!(clamped.rationality_vs_emotion, 0.0);
        assert_eq!(clamped.big_picture_vs_detail, 0.5);
        assert_eq!(clamped.independence_vs_collaboration, 0.0);
        assert_eq!(clamped.risk_taking, 1.0);
    }
}
