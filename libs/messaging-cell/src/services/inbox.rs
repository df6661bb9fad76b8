use std::collections::HashMap;

use chrono::Local;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use auth_cell::display_name;
use shared_models::auth::UserRecord;

use crate::error::MessagingError;
use crate::models::{Conversation, ConversationSummary, Message};
use crate::services::seed::{inbox_for, Me};

/// Conversations per signed-in user, keyed by email. Each inbox is seeded
/// the first time its owner looks at it.
#[derive(Debug, Default)]
pub struct MessagingService {
    inboxes: RwLock<HashMap<String, Vec<Conversation>>>,
}

impl MessagingService {
    pub fn new() -> Self {
        Self::default()
    }

    fn seed(user: &UserRecord) -> Vec<Conversation> {
        let name = display_name(user);
        inbox_for(user.user_type, &Me { id: &user.email, name: &name })
    }

    async fn with_inbox<T>(&self, user: &UserRecord, f: impl FnOnce(&mut Vec<Conversation>) -> T) -> T {
        let mut inboxes = self.inboxes.write().await;
        let inbox = inboxes
            .entry(user.email.clone())
            .or_insert_with(|| Self::seed(user));
        f(inbox)
    }

    /// Case-insensitive match on the participant's name.
    pub async fn list(&self, user: &UserRecord, search: Option<&str>) -> Vec<ConversationSummary> {
        let needle = search.unwrap_or_default().to_lowercase();
        self.with_inbox(user, |inbox| {
            inbox
                .iter()
                .filter(|c| c.participant_name.to_lowercase().contains(&needle))
                .map(ConversationSummary::from)
                .collect()
        })
        .await
    }

    pub async fn get(&self, user: &UserRecord, id: &str) -> Result<Conversation, MessagingError> {
        self.with_inbox(user, |inbox| {
            inbox
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| MessagingError::ConversationNotFound(id.to_string()))
        })
        .await
    }

    #[instrument(skip(self, user, content), fields(user = %user.email))]
    pub async fn send(&self, user: &UserRecord, id: &str, content: &str) -> Result<Message, MessagingError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(MessagingError::EmptyMessage);
        }

        let sender_name = display_name(user);
        self.with_inbox(user, |inbox| {
            let conversation = inbox
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| MessagingError::ConversationNotFound(id.to_string()))?;

            let message = Message {
                id: conversation.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1,
                sender_id: user.email.clone(),
                sender_name,
                sender_type: user.user_type,
                content: content.to_string(),
                timestamp: Local::now().format("%I:%M %p").to_string(),
                read: true,
            };
            conversation.messages.push(message.clone());
            conversation.last_message = content.to_string();
            conversation.last_message_time = "Just now".to_string();
            debug!("Message {} added to {}", message.id, id);

            Ok(message)
        })
        .await
    }

    /// Marks every message in the conversation as read.
    pub async fn mark_read(&self, user: &UserRecord, id: &str) -> Result<Conversation, MessagingError> {
        self.with_inbox(user, |inbox| {
            let conversation = inbox
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| MessagingError::ConversationNotFound(id.to_string()))?;

            conversation.messages.iter_mut().for_each(|m| m.read = true);
            conversation.unread_count = 0;
            Ok(conversation.clone())
        })
        .await
    }
}
