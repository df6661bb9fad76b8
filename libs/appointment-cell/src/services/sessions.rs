use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_utils::idle::{IdleLimits, IdleMap};

use crate::error::BookingError;
use crate::services::calendar::MonthView;
use crate::services::wizard::BookingWizard;

/// One open booking flow: the wizard's selections plus the month the date
/// picker is showing. The two are independent.
#[derive(Debug, Clone)]
pub struct BookingSession {
    pub wizard: BookingWizard,
    pub calendar: MonthView,
}

impl BookingSession {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            wizard: BookingWizard::new(),
            calendar: MonthView::from_date(today),
        }
    }
}

/// Open booking flows. A flow left idle past the timeout is discarded as
/// if it had been deleted, and opening a flow at capacity discards the
/// stalest one.
#[derive(Debug, Default)]
pub struct BookingSessions {
    sessions: RwLock<IdleMap<Uuid, BookingSession>>,
}

impl BookingSessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: IdleLimits) -> Self {
        Self {
            sessions: RwLock::new(IdleMap::new(limits)),
        }
    }

    pub async fn open(&self, today: NaiveDate) -> (Uuid, BookingSession) {
        let id = Uuid::new_v4();
        let session = BookingSession::new(today);
        let evicted = self.sessions.write().await.insert(id, session.clone());
        if evicted > 0 {
            debug!("Discarded {} abandoned booking session(s)", evicted);
        }
        info!("Opened booking session {}", id);
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Result<BookingSession, BookingError> {
        self.sessions
            .write()
            .await
            .get(&id)
            .cloned()
            .ok_or(BookingError::SessionNotFound)
    }

    /// Runs `f` on the session under the write lock. On success the updated
    /// session is returned together with `f`'s output.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<(T, BookingSession), BookingError>
    where
        F: FnOnce(&mut BookingSession) -> Result<T, BookingError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(BookingError::SessionNotFound)?;
        let output = f(session)?;
        Ok((output, session.clone()))
    }

    /// Discards the session and every selection in it.
    pub async fn close(&self, id: Uuid) -> Result<(), BookingError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| debug!("Closed booking session {}", id))
            .ok_or(BookingError::SessionNotFound)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
