use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Speaker label used in transcripts.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub message: String,
}

/// Ordered log of a letter-writing session. The first assistant message is
/// the drafted letter; later entries are follow-up requests and revisions.
///
/// The caller owns the log and passes it into every render, so nothing
/// about a session lives in process-wide state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn push(&mut self, role: Role, message: impl Into<String>) {
        self.messages.push(Message {
            role,
            message: message.into(),
        });
    }

    pub fn push_user(&mut self, message: impl Into<String>) {
        self.push(Role::User, message);
    }

    pub fn push_assistant(&mut self, message: impl Into<String>) {
        self.push(Role::Assistant, message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent assistant reply, which is the letter to render.
    pub fn latest_letter(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.message.as_str())
    }

    /// Everything after the initial draft.
    pub fn follow_ups(&self) -> &[Message] {
        self.messages.get(1..).unwrap_or(&[])
    }

    /// Markdown rendering of the follow-up exchange, one entry per line,
    /// e.g. `**You:** shorter please`.
    pub fn transcript(&self) -> String {
        format_messages(self.follow_ups())
    }
}

pub(crate) fn format_messages(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("**{}:** {}", m.role.label(), m.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Conversation {
        let mut log = Conversation::new();
        log.push_assistant("Dear team, first draft.");
        log.push_user("Make it shorter.");
        log.push_assistant("Dear team, short draft.");
        log
    }

    #[test]
    fn latest_letter_is_last_assistant_message() {
        let mut log = session();
        assert_eq!(log.latest_letter(), Some("Dear team, short draft."));

        log.push_user("Now mention Rust.");
        assert_eq!(log.latest_letter(), Some("Dear team, short draft."));
    }

    #[test]
    fn empty_log_has_no_letter() {
        let log = Conversation::new();
        assert!(log.is_empty());
        assert_eq!(log.latest_letter(), None);
        assert!(log.follow_ups().is_empty());
        assert_eq!(log.transcript(), "");
    }

    #[test]
    fn transcript_skips_initial_draft() {
        assert_eq!(
            session().transcript(),
            "**You:** Make it shorter.\n**Assistant:** Dear team, short draft."
        );
    }

    #[test]
    fn json_uses_role_message_records() {
        let log = session();
        let json = log.to_json().expect("serialize");
        assert!(json.contains(r#""role": "assistant""#));
        assert!(json.contains(r#""message": "Make it shorter.""#));

        let parsed = Conversation::from_json(&json).expect("parse");
        assert_eq!(parsed, log);
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn rejects_unknown_role() {
        let err = Conversation::from_json(r#"[{"role": "system", "message": "x"}]"#);
        assert!(err.is_err());
    }
}
