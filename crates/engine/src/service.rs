//! PersonaService — the stateless orchestrator over injected capabilities.
//!
//! Every operation is an independent read-modify-write against the store;
//! nothing is cached between calls, so any turn is retryable in isolation.
//! Concurrent turns for one user can race on the history write. Accepted for
//! the single-user design target.

use crate::history::append_turn;
use crate::prompt::{assemble_turn, temperature_for};
use edgepersona_core::{
    ChatMessage, CompletionProvider, CompletionRequest, Error, KvStore, LifeEvent, NewLifeEvent,
    PersonaProfile, Result,
};
use std::sync::Arc;
use tracing::{debug, info};

fn profile_key(user_id: &str) -> String {
    format!("user_{user_id}_profile")
}

fn history_key(user_id: &str) -> String {
    format!("user_{user_id}_history")
}

fn events_key(user_id: &str) -> String {
    format!("user_{user_id}_events")
}

/// The persona service. One instance serves all operations.
pub struct PersonaService {
    store: Arc<dyn KvStore>,
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl PersonaService {
    pub fn new(
        store: Arc<dyn KvStore>,
        provider: Arc<dyn CompletionProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            store,
            provider,
            model: model.into(),
        }
    }

    /// Persist a persona profile.
    ///
    /// Trait axes are clamped into [0, 1] on the way in. History and events
    /// are initialized empty only when absent, so re-saving an unchanged
    /// profile never clears already-populated memory.
    pub async fn save_profile(&self, mut profile: PersonaProfile) -> Result<()> {
        if profile.id.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "profile id must not be empty".into(),
            });
        }

        profile.traits = profile.traits.clamped();

        let user_id = profile.id.clone();
        self.store
            .put(&profile_key(&user_id), serde_json::to_value(&profile)?)
            .await?;

        if self.store.get(&history_key(&user_id)).await?.is_none() {
            self.store
                .put(&history_key(&user_id), serde_json::Value::Array(vec![]))
                .await?;
        }
        if self.store.get(&events_key(&user_id)).await?.is_none() {
            self.store
                .put(&events_key(&user_id), serde_json::Value::Array(vec![]))
                .await?;
        }

        info!(user_id = %user_id, "Persona profile saved");
        Ok(())
    }

    /// Fetch a persona profile, distinguishing absence from failure.
    pub async fn get_profile(&self, user_id: &str) -> Result<PersonaProfile> {
        if user_id.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "userId must not be empty".into(),
            });
        }

        match self.store.get(&profile_key(user_id)).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(Error::ProfileNotFound {
                user_id: user_id.to_string(),
            }),
        }
    }

    /// Run one chat turn: read memory, call the completion endpoint, persist
    /// the new pair, return the assistant message.
    ///
    /// The three reads are independent and issued concurrently; the
    /// completion call and the history write are strictly sequential. Nothing
    /// is persisted when the completion fails or comes back empty.
    pub async fn chat(&self, user_id: &str, message: &str) -> Result<ChatMessage> {
        if user_id.trim().is_empty() || message.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "userId and message must not be empty".into(),
            });
        }

        let profile_k = profile_key(user_id);
        let history_k = history_key(user_id);
        let events_k = events_key(user_id);
        let (profile_value, history_value, events_value) = tokio::join!(
            self.store.get(&profile_k),
            self.store.get(&history_k),
            self.store.get(&events_k),
        );

        let profile: PersonaProfile = match profile_value? {
            Some(value) => serde_json::from_value(value)?,
            None => {
                return Err(Error::ProfileNotFound {
                    user_id: user_id.to_string(),
                })
            }
        };
        let mut history: Vec<ChatMessage> = match history_value? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        let events: Vec<LifeEvent> = match events_value? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };

        let user_message = ChatMessage::user(message);
        let outbound = assemble_turn(&profile, &history, &events, &user_message);
        let temperature = temperature_for(&profile.traits);

        debug!(
            user_id = %user_id,
            outbound = outbound.len(),
            temperature,
            "Dispatching chat turn"
        );

        let response = self
            .provider
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages: outbound,
                temperature,
            })
            .await?;

        append_turn(&mut history, user_message, response.message.clone());
        self.store
            .put(&history_key(user_id), serde_json::to_value(&history)?)
            .await?;

        Ok(response.message)
    }

    /// Log a life event: assign an insertion-time id, prepend newest-first,
    /// persist the whole sequence. No write-side cap.
    pub async fn log_event(&self, user_id: &str, event: NewLifeEvent) -> Result<LifeEvent> {
        if user_id.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "userId must not be empty".into(),
            });
        }

        let mut events = self.events(user_id).await?;
        let event = event.into_event(edgepersona_core::now_millis().to_string());
        events.insert(0, event.clone());

        self.store
            .put(&events_key(user_id), serde_json::to_value(&events)?)
            .await?;

        info!(user_id = %user_id, event_id = %event.id, "Life event logged");
        Ok(event)
    }

    /// The full persisted conversation history, oldest first.
    pub async fn history(&self, user_id: &str) -> Result<Vec<ChatMessage>> {
        match self.store.get(&history_key(user_id)).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// All logged life events, newest first.
    pub async fn events(&self, user_id: &str) -> Result<Vec<LifeEvent>> {
        match self.store.get(&events_key(user_id)).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Delete the profile, history, and events as one unit. Idempotent.
    pub async fn reset(&self, user_id: &str) -> Result<()> {
        self.store.delete(&profile_key(user_id)).await?;
        self.store.delete(&history_key(user_id)).await?;
        self.store.delete(&events_key(user_id)).await?;
        info!(user_id = %user_id, "Persona data reset");
        Ok(())
    }
}
