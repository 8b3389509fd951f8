use crate::countdown::Notification;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

const MAX_PENDING: usize = 16;

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

pub trait AudioCue: Send + Sync {
    fn play(&self) -> io::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationQueue {
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *pending)
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: &Notification) {
        info!(title = %notification.title, "posting reminder: {}", notification.body);
        let mut pending = self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if pending.len() >= MAX_PENDING {
            pending.remove(0);
        }
        pending.push(notification.clone());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl AudioCue for TerminalBell {
    fn play(&self) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        stderr.write_all(b"\x07")?;
        stderr.flush()
    }
}

pub fn announce(notifier: &dyn Notifier, audio: &dyn AudioCue, notification: &Notification) {
    notifier.notify(notification);
    if let Err(err) = audio.play() {
        warn!("audio cue failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct BrokenSpeaker {
        attempts: AtomicUsize,
    }

    impl AudioCue for BrokenSpeaker {
        fn play(&self) -> io::Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::other("no audio device"))
        }
    }

    fn reminder() -> Notification {
        Notification::posting_time(NaiveTime::from_hms_opt(20, 30, 0).unwrap())
    }

    #[test]
    fn audio_failure_does_not_block_notification() {
        let queue = NotificationQueue::default();
        let speaker = BrokenSpeaker {
            attempts: AtomicUsize::new(0),
        };
        announce(&queue, &speaker, &reminder());
        assert_eq!(speaker.attempts.load(Ordering::SeqCst), 1);
        assert_eq!(queue.drain(), vec![reminder()]);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_keeps_only_recent_notifications() {
        let queue = NotificationQueue::default();
        for _ in 0..(MAX_PENDING + 4) {
            queue.notify(&reminder());
        }
        assert_eq!(queue.len(), MAX_PENDING);
    }
}
