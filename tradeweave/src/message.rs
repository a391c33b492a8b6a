//! Minimal message types for conversation state.
//!
//! Message roles: System (usually first in the list), User, Assistant.
//! Tool observations are appended as User messages by the tools node so the
//! next assistant turn sees them as plain context.

/// A single message in the conversation.
///
/// Roles: system prompt, user input, assistant reply.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System prompt; typically placed first in the message list.
    System(String),
    /// User input (including tool observations fed back to the model).
    User(String),
    /// Model reply.
    Assistant(String),
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: system/user/assistant constructors produce the correct variant with content.
    #[test]
    fn message_constructors_produce_expected_variants() {
        assert!(matches!(&Message::system("s"), Message::System(c) if c == "s"));
        assert!(matches!(&Message::user("u"), Message::User(c) if c == "u"));
        assert!(matches!(&Message::assistant("a"), Message::Assistant(c) if c == "a"));
    }

    /// **Scenario**: Each Message variant round-trips through serde.
    #[test]
    fn message_serde_roundtrip() {
        for msg in [
            Message::system("sys"),
            Message::user("usr"),
            Message::assistant("ast"),
        ] {
            let json = serde_json::to_string(&msg).expect("serialize");
            let back: Message = serde_json::from_str(&json).expect("deserialize");
            match (&msg, &back) {
                (Message::System(a), Message::System(b)) => assert_eq!(a, b),
                (Message::User(a), Message::User(b)) => assert_eq!(a, b),
                (Message::Assistant(a), Message::Assistant(b)) => assert_eq!(a, b),
                _ => panic!("variant mismatch: {:?} vs {:?}", msg, back),
            }
        }
    }
}
