//! The EdgePersona engine: profile construction and conversational memory.
//!
//! Two cooperating pieces, both stateless between invocations:
//!
//! - **Profile Builder** ([`builder`]) — turns the flat questionnaire answer
//!   bag into a normalized nested [`edgepersona_core::PersonaProfile`]. Pure,
//!   no I/O.
//! - **Conversation Assembler** ([`prompt`], [`history`]) — renders the
//!   per-turn system instruction, selects the trailing history window, and
//!   applies the bounded pairwise history trim.
//!
//! [`service::PersonaService`] wires both to the injected store and
//! completion provider.

pub mod builder;
pub mod history;
pub mod prompt;
pub mod questionnaire;
pub mod service;

pub use builder::{build_profile, parse_list, DEFAULT_PROFILE_NAME};
pub use history::{append_turn, HISTORY_MAX};
pub use prompt::{assemble_turn, render_system_prompt, temperature_for, EVENT_FEED_CAP, HISTORY_WINDOW};
pub use questionnaire::{Card, CardKind, DECK};
pub use service::PersonaService;
