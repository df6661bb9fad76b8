use serde::{Deserialize, Serialize};

use shared_models::auth::UserType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender_id: String,
    pub sender_name: String,
    pub sender_type: UserType,
    pub content: String,
    /// Display label, e.g. "10:30 AM" or "Yesterday 3:00 PM".
    pub timestamp: String,
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participant_name: String,
    pub participant_type: UserType,
    pub participant_avatar: String,
    pub last_message: String,
    pub last_message_time: String,
    pub unread_count: u32,
    pub messages: Vec<Message>,
}

/// A conversation row in the inbox list, without its messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub id: String,
    pub participant_name: String,
    pub participant_type: UserType,
    pub participant_avatar: String,
    pub last_message: String,
    pub last_message_time: String,
    pub unread_count: u32,
}

impl From<&Conversation> for ConversationSummary {
    fn from(c: &Conversation) -> Self {
        Self {
            id: c.id.clone(),
            participant_name: c.participant_name.clone(),
            participant_type: c.participant_type,
            participant_avatar: c.participant_avatar.clone(),
            last_message: c.last_message.clone(),
            last_message_time: c.last_message_time.clone(),
            unread_count: c.unread_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}
