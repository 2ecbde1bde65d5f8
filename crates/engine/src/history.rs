//! Bounded conversation history.
//!
//! History grows by user+assistant pairs and is trimmed from the front two
//! entries at a time, so the retained window never desynchronizes role
//! alternation. Invariant: persisted history length is even.

use edgepersona_core::ChatMessage;
use tracing::warn;

/// Maximum persisted history entries per user.
pub const HISTORY_MAX: usize = 20;

/// Append one completed turn and trim to [`HISTORY_MAX`].
///
/// Eviction is pairwise (oldest user+assistant pair per pass), never a single
/// message. An odd-length input history indicates a previous partial write;
/// it is logged and trimmed pairwise regardless.
pub fn append_turn(history: &mut Vec<ChatMessage>, user: ChatMessage, assistant: ChatMessage) {
    if history.len() % 2 != 0 {
        warn!(
            len = history.len(),
            "Stored history has odd length; user/assistant pairing is skewed"
        );
    }

    history.push(user);
    history.push(assistant);

    while history.len() > HISTORY_MAX {
        history.drain(..2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(n: usize) -> (ChatMessage, ChatMessage) {
        (
            ChatMessage::user(format!("q{n}")),
            ChatMessage::assistant(format!("a{n}")),
        )
    }

    fn full_history(pairs: usize) -> Vec<ChatMessage> {
        let mut history = Vec::new();
        for n in 0..pairs {
            let (u, a) = turn(n);
            history.push(u);
            history.push(a);
        }
        history
    }

    #[test]
    fn short_history_just_appends() {
        let mut history = full_history(2);
        let (u, a) = turn(2);
        append_turn(&mut history, u, a);
        assert_eq!(history.len(), 6);
        assert_eq!(history[4].content, "q2");
        assert_eq!(history[5].content, "a2");
    }

    #[test]
    fn full_history_evicts_oldest_pair() {
        let mut history = full_history(10); // 20 entries, at capacity
        let (u, a) = turn(10);
        append_turn(&mut history, u, a);

        assert_eq!(history.len(), HISTORY_MAX);
        // Both entries of the oldest pair are gone, not just one
        assert!(!history.iter().any(|m| m.content == "q0"));
        assert!(!history.iter().any(|m| m.content == "a0"));
        assert_eq!(history[0].content, "q1");
        assert_eq!(history.last().unwrap().content, "a10");
    }

    #[test]
    fn trim_preserves_role_alternation() {
        let mut history = full_history(10);
        let (u, a) = turn(10);
        append_turn(&mut history, u, a);

        for pair in history.chunks(2) {
            assert_eq!(pair[0].role, edgepersona_core::Role::User);
            assert_eq!(pair[1].role, edgepersona_core::Role::Assistant);
        }
    }

    #[test]
    fn odd_length_input_still_trims_pairwise() {
        // 21 entries, as after a partial historical write
        let mut history = full_history(10);
        history.push(ChatMessage::user("stray"));

        let (u, a) = turn(11);
        append_turn(&mut history, u, a);

        // 23 -> 21 -> 19, always removing two at a time
        assert_eq!(history.len(), 19);
        assert!(!history.iter().any(|m| m.content == "q0"));
        assert!(!history.iter().any(|m| m.content == "a0"));
        assert!(!history.iter().any(|m| m.content == "q1"));
        assert!(!history.iter().any(|m| m.content == "a1"));
    }
}
