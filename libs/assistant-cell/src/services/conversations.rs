use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use shared_utils::idle::{IdleLimits, IdleMap};
use shared_utils::timer::ScopedTask;

use crate::error::AssistantError;
use crate::models::{ChatMessage, Conversation, Reply};
use crate::services::responder::{starter_suggestions, Responder, GREETING};

#[derive(Debug, Default)]
struct ConversationState {
    messages: Vec<ChatMessage>,
    typing: bool,
    /// Reply scheduled for the last user message. Dropped with the
    /// conversation, which cancels it.
    pending: Option<ScopedTask>,
}

impl ConversationState {
    fn snapshot(&self, id: Uuid) -> Conversation {
        Conversation {
            id,
            messages: self.messages.clone(),
            typing: self.typing,
        }
    }
}

type ConversationMap = Arc<RwLock<IdleMap<Uuid, ConversationState>>>;

pub struct AssistantService {
    responder: Arc<Responder>,
    typing_delay: Duration,
    conversations: ConversationMap,
}

impl AssistantService {
    pub fn new(responder: Arc<Responder>, typing_delay: Duration) -> Self {
        Self::with_limits(responder, typing_delay, IdleLimits::default())
    }

    /// Conversations idle past `limits.idle_timeout` are closed, cancelling
    /// any reply still pending.
    pub fn with_limits(responder: Arc<Responder>, typing_delay: Duration, limits: IdleLimits) -> Self {
        Self {
            responder,
            typing_delay,
            conversations: Arc::new(RwLock::new(IdleMap::new(limits))),
        }
    }

    /// Stateless answer to a single message.
    pub fn reply(&self, input: &str) -> Result<(Reply, Option<&'static str>), AssistantError> {
        if input.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        Ok((self.responder.respond(input), self.responder.topic(input)))
    }

    pub async fn start(&self) -> Conversation {
        let id = Uuid::new_v4();
        let state = ConversationState {
            messages: vec![ChatMessage::from_bot(Reply {
                content: GREETING.to_string(),
                suggestions: starter_suggestions(),
            })],
            ..Default::default()
        };

        let snapshot = state.snapshot(id);
        let evicted = self.conversations.write().await.insert(id, state);
        debug!("Started assistant conversation {} ({} idle closed)", id, evicted);
        snapshot
    }

    pub async fn get(&self, id: Uuid) -> Result<Conversation, AssistantError> {
        self.conversations
            .write()
            .await
            .get(&id)
            .map(|state| state.snapshot(id))
            .ok_or(AssistantError::ConversationNotFound)
    }

    /// Appends the user's message and schedules the bot reply after the
    /// typing delay. Only one reply can be pending per conversation.
    #[instrument(skip(self, content))]
    pub async fn send(&self, id: Uuid, content: &str) -> Result<Conversation, AssistantError> {
        if content.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }

        let mut conversations = self.conversations.write().await;
        let state = conversations
            .get_mut(&id)
            .ok_or(AssistantError::ConversationNotFound)?;
        if state.typing {
            return Err(AssistantError::StillTyping);
        }

        state.messages.push(ChatMessage::from_user(content));
        state.typing = true;

        let reply = self.responder.respond(content);
        let map = self.conversations.clone();
        state.pending = Some(ScopedTask::after(
            self.typing_delay,
            "assistant reply",
            async move {
                let mut conversations = map.write().await;
                if let Some(state) = conversations.get_mut(&id) {
                    state.messages.push(ChatMessage::from_bot(reply));
                    state.typing = false;
                }
            },
        ));

        Ok(state.snapshot(id))
    }

    pub async fn close(&self, id: Uuid) -> Result<(), AssistantError> {
        let removed = self
            .conversations
            .write()
            .await
            .remove(&id)
            .ok_or(AssistantError::ConversationNotFound)?;

        if removed.typing {
            info!("Closed conversation {} with a reply still pending", id);
        }
        drop(removed);
        Ok(())
    }
}
