use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;

use assistant_cell::services::responder::{GREETING, QUICK_SUGGESTIONS};
use assistant_cell::{AssistantError, AssistantService, Responder, Sender};
use shared_utils::idle::IdleLimits;

const DELAY: Duration = Duration::from_millis(1500);

fn service() -> AssistantService {
    AssistantService::new(Arc::new(Responder::ayurveda()), DELAY)
}

/// Lets paused time run past the typing delay and the reply task finish.
async fn wait_for_reply() {
    tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_conversation_opens_with_greeting() {
    let service = service();
    let conversation = service.start().await;

    assert_eq!(conversation.messages.len(), 1);
    assert_eq!(conversation.messages[0].sender, Sender::Bot);
    assert_eq!(conversation.messages[0].content, GREETING);
    assert_eq!(conversation.messages[0].suggestions, QUICK_SUGGESTIONS[..3].to_vec());
    assert!(!conversation.typing);
}

#[tokio::test(start_paused = true)]
async fn test_reply_arrives_after_typing_delay() {
    let service = service();
    let id = service.start().await.id;

    let conversation = service.send(id, "Tell me about Kapha").await.unwrap();
    assert!(conversation.typing);
    assert_eq!(conversation.messages.len(), 2);
    assert_eq!(conversation.messages[1].sender, Sender::User);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(service.get(id).await.unwrap().typing);

    wait_for_reply().await;
    let conversation = service.get(id).await.unwrap();
    assert!(!conversation.typing);
    assert_eq!(conversation.messages.len(), 3);
    assert!(conversation.messages[2].content.starts_with("Kapha dosha represents"));
    assert_eq!(conversation.messages[2].suggestions[0], "Kapha energizing foods");
}

#[tokio::test(start_paused = true)]
async fn test_blank_message_rejected() {
    let service = service();
    let id = service.start().await.id;

    assert_matches!(service.send(id, "   ").await, Err(AssistantError::EmptyMessage));
    assert_eq!(service.get(id).await.unwrap().messages.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_second_message_while_typing() {
    let service = service();
    let id = service.start().await.id;

    service.send(id, "sleep problems").await.unwrap();
    assert_matches!(service.send(id, "and stress").await, Err(AssistantError::StillTyping));

    wait_for_reply().await;
    assert!(service.send(id, "and stress").await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_closing_cancels_pending_reply() {
    let service = service();
    let id = service.start().await.id;

    service.send(id, "What is Panchakarma?").await.unwrap();
    service.close(id).await.unwrap();

    wait_for_reply().await;
    assert_matches!(service.get(id).await, Err(AssistantError::ConversationNotFound));
    assert_matches!(service.close(id).await, Err(AssistantError::ConversationNotFound));
}

#[tokio::test]
async fn test_stateless_reply() {
    let service = service();

    let (reply, topic) = service.reply("Any food advice?").unwrap();
    assert_eq!(topic, Some("diet"));
    assert_eq!(reply.suggestions, vec!["Vata diet plan", "Pitta diet plan", "Kapha diet plan"]);

    assert_matches!(service.reply(""), Err(AssistantError::EmptyMessage));
}

fn limited_service(idle_secs: u64, capacity: usize) -> AssistantService {
    AssistantService::with_limits(
        Arc::new(Responder::ayurveda()),
        DELAY,
        IdleLimits {
            idle_timeout: Duration::from_secs(idle_secs),
            capacity,
        },
    )
}

#[tokio::test(start_paused = true)]
async fn test_idle_conversation_is_closed() {
    let service = limited_service(300, 100);
    let id = service.start().await.id;

    tokio::time::sleep(Duration::from_secs(200)).await;
    assert!(service.get(id).await.is_ok());

    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_matches!(service.get(id).await, Err(AssistantError::ConversationNotFound));
    assert_matches!(
        service.send(id, "Hello").await,
        Err(AssistantError::ConversationNotFound)
    );
}

#[tokio::test(start_paused = true)]
async fn test_capacity_closes_oldest_conversation_and_its_reply() {
    let service = limited_service(300, 1);
    let first = service.start().await.id;
    service.send(first, "Tell me about sleep").await.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = service.start().await.id;

    wait_for_reply().await;
    assert_matches!(service.get(first).await, Err(AssistantError::ConversationNotFound));
    let conversation = service.get(second).await.unwrap();
    assert_eq!(conversation.messages.len(), 1);
    assert!(!conversation.typing);
}
