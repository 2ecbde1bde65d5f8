//! The fixed onboarding deck.
//!
//! Twenty cards across six modules. Each card's `key` is a dotted path into
//! the persona profile; the builder resolves those paths when the answers
//! come back.

use serde::Serialize;

/// How a card collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    /// Short free text, comma-separated items allowed
    Text,
    /// Longer free text
    LongText,
    /// Pick one option
    Choice,
    /// Pick any number of options
    MultiChoice,
    /// A 0.0..=1.0 position between two poles
    Slider,
    /// Rank the options
    Sort,
}

/// One onboarding question card.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub id: u8,
    pub module: &'static str,
    pub question: &'static str,
    pub kind: CardKind,
    /// Options for choice / multi-choice / sort cards
    pub options: &'static [&'static str],
    /// Pole labels for slider cards
    pub left_label: Option<&'static str>,
    pub right_label: Option<&'static str>,
    /// Dotted path into the profile, e.g. "traits.riskTaking"
    pub key: &'static str,
}

const NO_OPTIONS: &[&str] = &[];

/// The onboarding deck, in presentation order.
pub const DECK: &[Card] = &[
    // Module 1: Identity foundation
    Card {
        id: 1,
        module: "Identity",
        question: "Define yourself with 1-3 identity labels you most identify with (e.g. founder, father, sci-fi fan).",
        kind: CardKind::Text,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "coreIdentities",
    },
    Card {
        id: 2,
        module: "Identity",
        question: "What is your professional field, or a hobby you have cultivated for years? Three keywords.",
        kind: CardKind::Text,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "domainExpertise",
    },
    Card {
        id: 3,
        module: "Identity",
        question: "What is the focus of your current life stage?",
        kind: CardKind::Choice,
        options: &[
            "Exploration and growth",
            "Building and expanding",
            "Balance and legacy",
            "Transition and new chapters",
        ],
        left_label: None,
        right_label: None,
        key: "lifeFocus",
    },
    // Module 2: Cognitive spectrum
    Card {
        id: 4,
        module: "Cognitive spectrum",
        question: "Do you prefer meticulous planning, or going with the flow?",
        kind: CardKind::Slider,
        options: NO_OPTIONS,
        left_label: Some("Meticulous planning"),
        right_label: Some("Spontaneous"),
        key: "traits.planningVsSpontaneity",
    },
    Card {
        id: 5,
        module: "Cognitive spectrum",
        question: "When making important decisions, which wins: logical analysis or gut feeling?",
        kind: CardKind::Slider,
        options: NO_OPTIONS,
        left_label: Some("Rationality leads"),
        right_label: Some("Emotion leads"),
        key: "traits.rationalityVsEmotion",
    },
    Card {
        id: 6,
        module: "Cognitive spectrum",
        question: "Do you usually see the forest first, or the trees?",
        kind: CardKind::Slider,
        options: NO_OPTIONS,
        left_label: Some("Big picture"),
        right_label: Some("Fine detail"),
        key: "traits.bigPictureVsDetail",
    },
    Card {
        id: 7,
        module: "Cognitive spectrum",
        question: "Do you prefer tackling hard problems alone, or as part of a team?",
        kind: CardKind::Slider,
        options: NO_OPTIONS,
        left_label: Some("Independent"),
        right_label: Some("Collaborative"),
        key: "traits.independenceVsCollaboration",
    },
    Card {
        id: 8,
        module: "Cognitive spectrum",
        question: "What is your overall attitude toward risk?",
        kind: CardKind::Slider,
        options: NO_OPTIONS,
        left_label: Some("Strongly averse"),
        right_label: Some("Risk seeking"),
        key: "traits.riskTaking",
    },
    // Module 3: Values and decisions
    Card {
        id: 9,
        module: "Values",
        question: "If a project forced you to sacrifice one of these, which would you give up last? (Rank them)",
        kind: CardKind::Sort,
        options: &["Schedule", "Quality", "Cost", "Team morale"],
        left_label: None,
        right_label: None,
        key: "values.priority",
    },
    Card {
        id: 10,
        module: "Values",
        question: "A project could help millions of people, but only if its claims are exaggerated. Where is your line?",
        kind: CardKind::Choice,
        options: &[
            "Never, integrity is non-negotiable",
            "Mild hedging in the wording is acceptable",
            "If the outcome is just, the means can flex",
            "Depends on what competitors are doing",
        ],
        left_label: None,
        right_label: None,
        key: "values.integrity",
    },
    Card {
        id: 11,
        module: "Values",
        question: "Which information sources do you trust most when forming an opinion? (pick any)",
        kind: CardKind::MultiChoice,
        options: &[
            "Data and reports",
            "Experts and authorities",
            "Friends and colleagues",
            "My own intuition",
            "Majority consensus",
        ],
        left_label: None,
        right_label: None,
        key: "values.trustedSources",
    },
    Card {
        id: 12,
        module: "Values",
        question: "What are the three core qualities of the role model you admire most?",
        kind: CardKind::Text,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "values.admiredTraits",
    },
    // Module 4: Emotional pattern
    Card {
        id: 13,
        module: "Emotional pattern",
        question: "Under heavy pressure, your first reaction is closest to?",
        kind: CardKind::Choice,
        options: &[
            "Analyze calmly and look for solutions",
            "Seek support and talk it through",
            "Step away and decompress with a hobby",
            "Process internally and self-motivate",
        ],
        left_label: None,
        right_label: None,
        key: "emotional.stressResponse",
    },
    Card {
        id: 14,
        module: "Emotional pattern",
        question: "What gives you the strongest sense of achievement? (pick any)",
        kind: CardKind::MultiChoice,
        options: &[
            "External recognition and praise",
            "The process of overcoming hard challenges",
            "Creating something unique and valuable",
            "Helping others grow",
            "Reaching inner calm and self-consistency",
        ],
        left_label: None,
        right_label: None,
        key: "emotional.achievementDriver",
    },
    Card {
        id: 15,
        module: "Emotional pattern",
        question: "Emotionally, you want your digital self to feel more like a?",
        kind: CardKind::Choice,
        options: &[
            "Steadfast supporter",
            "Sharp but honest friend",
            "Rational analyst",
            "Partner in lockstep",
        ],
        left_label: None,
        right_label: None,
        key: "emotional.preferredTone",
    },
    // Module 5: Expression style
    Card {
        id: 16,
        module: "Expression",
        question: "Write down 2-3 phrases or fillers you habitually use.",
        kind: CardKind::Text,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "communication.verbalTicks",
    },
    Card {
        id: 17,
        module: "Expression",
        question: "In your own words, briefly evaluate 'artificial intelligence'.",
        kind: CardKind::LongText,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "communication.sampleAnalysis",
    },
    Card {
        id: 18,
        module: "Expression",
        question: "When explaining a complex idea, which family of metaphors comes to you naturally? (pick any)",
        kind: CardKind::MultiChoice,
        options: &[
            "War and competition",
            "Growth and ecosystems",
            "Machines and architecture",
            "Business and trade",
            "Stories and characters",
        ],
        left_label: None,
        right_label: None,
        key: "communication.metaphors",
    },
    // Module 6: Knowledge archive
    Card {
        id: 19,
        module: "Knowledge",
        question: "The book, film, or person that influenced you most deeply? Briefly say why.",
        kind: CardKind::LongText,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "knowledge.influences",
    },
    Card {
        id: 20,
        module: "Knowledge",
        question: "Which three fields will you watch most closely over the coming year?",
        kind: CardKind::Text,
        options: NO_OPTIONS,
        left_label: None,
        right_label: None,
        key: "knowledge.futureConcerns",
    },
];
