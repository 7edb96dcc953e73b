//! Conversation history for a single chat session.
//!
//! The log is owned by whoever drives the session (the interactive prompt,
//! or the HTTP client that sends it back with each request). The router
//! never touches it; appending turns is the caller's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Avatar shown next to messages of this role.
    pub fn glyph(self) -> &'static str {
        match self {
            Role::User => "👤",
            Role::Assistant => "🤖",
        }
    }
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    #[serde(default)]
    pub avatar: String,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            avatar: role.glyph().to_string(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only, ordered list of turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ConversationTurn>", into = "Vec<ConversationTurn>")]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns
            .push(ConversationTurn::new(Role::Assistant, content));
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop every turn; used when a session ends.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl From<Vec<ConversationTurn>> for ConversationLog {
    fn from(mut turns: Vec<ConversationTurn>) -> Self {
        // Clients may omit the avatar.
        for turn in turns.iter_mut().filter(|t| t.avatar.is_empty()) {
            turn.avatar = turn.role.glyph().to_string();
        }
        Self { turns }
    }
}

impl From<ConversationLog> for Vec<ConversationTurn> {
    fn from(log: ConversationLog) -> Self {
        log.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_appends_in_order() {
        let mut log = ConversationLog::new();
        log.push_user("Qual a expectativa de vida média?");
        log.push_assistant("72.00 anos");

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].role, Role::User);
        assert_eq!(log.turns()[0].avatar, "👤");
        assert_eq!(log.turns()[1].role, Role::Assistant);
        assert_eq!(log.turns()[1].avatar, "🤖");
        assert_eq!(log.last().unwrap().content, "72.00 anos");
    }

    #[test]
    fn test_log_clear() {
        let mut log = ConversationLog::new();
        log.push_user("oi");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_serializes_as_array() {
        let mut log = ConversationLog::new();
        log.push_user("oi");
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["role"], "user");
        assert_eq!(json[0]["content"], "oi");
    }

    #[test]
    fn test_log_deserialize_fills_missing_avatar() {
        let json = r#"[{"role": "user", "content": "oi"}, {"role": "assistant", "content": "olá"}]"#;
        let log: ConversationLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.turns()[0].avatar, "👤");
        assert_eq!(log.turns()[1].avatar, "🤖");
    }

    #[test]
    fn test_role_rejects_unknown() {
        let result: Result<Role, _> = serde_json::from_str("\"system\"");
        assert!(result.is_err());
    }
}
