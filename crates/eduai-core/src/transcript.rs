//! Tutor chat transcript.
//!
//! The transcript is an append-only, ordering-preserving sequence of
//! messages. The user message is appended synchronously when the learner
//! sends it; the assistant reply is appended later, when its request
//! resolves and its token is still current (enforced by the caller through
//! [`crate::operation::AsyncOperation`]).

use serde::{Deserialize, Serialize};

/// Greeting the tutor posts into every new transcript.
pub const TUTOR_GREETING: &str = "Hi! I'm your AI tutor. I can help you understand DSA concepts, \
     debug code, or explain algorithms. What would you like to learn today?";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    /// The learner.
    User,
    /// The simulated tutor.
    Assistant,
}

/// A single message in the tutor chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonically increasing id, unique within one transcript.
    pub id: u64,
    /// The author of the message.
    pub sender: MessageSender,
    /// The message body.
    pub text: String,
    /// Timestamp when the message was appended (ISO 8601 format).
    pub timestamp: String,
}

/// Append-only conversation history with the tutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    /// Creates a transcript seeded with the tutor greeting.
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.push(MessageSender::Assistant, TUTOR_GREETING);
        transcript
    }

    /// Creates an empty transcript without the greeting.
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the messages in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the transcript holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a learner message and returns its id.
    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        self.push(MessageSender::User, text)
    }

    /// Appends a tutor message and returns its id.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> u64 {
        self.push(MessageSender::Assistant, text)
    }

    fn push(&mut self, sender: MessageSender, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        });
        id
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_seeded_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.len(), 1);
        let greeting = &transcript.messages()[0];
        assert_eq!(greeting.sender, MessageSender::Assistant);
        assert_eq!(greeting.text, TUTOR_GREETING);
    }

    #[test]
    fn test_empty_transcript_has_no_messages() {
        let transcript = ChatTranscript::empty();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut transcript = ChatTranscript::empty();
        let a = transcript.push_user("first");
        let b = transcript.push_assistant("second");
        let c = transcript.push_user("third");
        assert!(a < b && b < c);
    }

    #[test]
    fn test_append_order_is_preserved() {
        let mut transcript = ChatTranscript::empty();
        transcript.push_user("question A");
        transcript.push_user("question B");
        transcript.push_assistant("answer B");
        transcript.push_assistant("answer A");

        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["question A", "question B", "answer B", "answer A"]
        );
    }
}
