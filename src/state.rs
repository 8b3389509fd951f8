use crate::countdown::PostingAlarm;
use crate::dashboard::Dashboard;
use crate::notify::{AudioCue, NotificationQueue};
use crate::scheduler::Clock;
use crate::storage::Store;
use chrono::NaiveTime;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub dashboard: Arc<Mutex<Dashboard>>,
    pub clock: Arc<dyn Clock>,
    pub alarm: Arc<Mutex<PostingAlarm>>,
    pub notifications: NotificationQueue,
    pub audio: Arc<dyn AudioCue>,
}

impl AppState {
    pub fn new(
        store: Store,
        dashboard: Dashboard,
        clock: Arc<dyn Clock>,
        posting_time: NaiveTime,
        audio: Arc<dyn AudioCue>,
    ) -> Self {
        Self {
            store,
            dashboard: Arc::new(Mutex::new(dashboard)),
            clock,
            alarm: Arc::new(Mutex::new(PostingAlarm::new(posting_time))),
            notifications: NotificationQueue::default(),
            audio,
        }
    }

    pub async fn posting_time(&self) -> NaiveTime {
        self.alarm.lock().await.posting_time()
    }
}
