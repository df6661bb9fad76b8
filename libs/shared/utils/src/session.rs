use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::auth::UserRecord;

use crate::idle::{IdleLimits, IdleMap};

/// Signed-in identities keyed by bearer token. Created once at startup
/// and handed to every router that needs to know who is calling. Tokens
/// unused for the idle timeout stop resolving.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<IdleMap<String, UserRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: IdleLimits) -> Self {
        Self {
            sessions: RwLock::new(IdleMap::new(limits)),
        }
    }

    pub async fn open(&self, user: UserRecord) -> String {
        let token = Uuid::new_v4().to_string();
        info!("Opening session for {} ({})", user.email, user.user_type);
        self.sessions.write().await.insert(token.clone(), user);
        token
    }

    pub async fn get(&self, token: &str) -> Option<UserRecord> {
        self.sessions.write().await.get(token).cloned()
    }

    /// Explicit teardown on logout.
    pub async fn close(&self, token: &str) -> Option<UserRecord> {
        let removed = self.sessions.write().await.remove(token);
        if let Some(user) = &removed {
            info!("Closed session for {}", user.email);
        } else {
            debug!("Logout for unknown session token");
        }
        removed
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::auth::UserType;
    use std::time::Duration;

    fn record() -> UserRecord {
        UserRecord {
            email: "amit.patel@gmail.com".to_string(),
            username: "Amit Patel".to_string(),
            full_name: "Amit Patel".to_string(),
            user_type: UserType::Patient,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unused_token_expires() {
        let store = SessionStore::with_limits(IdleLimits {
            idle_timeout: Duration::from_secs(60),
            capacity: 10,
        });
        let token = store.open(record()).await;

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get(&token).await.is_some());
        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(store.get(&token).await.is_some());

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(store.get(&token).await, None);
    }

    #[tokio::test]
    async fn open_get_close_round() {
        let store = SessionStore::new();
        let token = store.open(record()).await;

        assert_eq!(store.get(&token).await, Some(record()));
        assert_eq!(store.close(&token).await, Some(record()));
        assert_eq!(store.get(&token).await, None);
        assert_eq!(store.active_sessions().await, 0);
    }
}
