use chrono::{Duration, Local, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;

const NOTIFICATION_TITLE: &str = "Posting Time! 🚀";
const NOTIFICATION_DURATION_MS: u64 = 10_000;

/// Time left until the next posting instant in the local zone. Once today's
/// instant has passed the target moves to tomorrow.
pub fn time_until_posting(now: NaiveDateTime, posting: NaiveTime) -> Duration {
    time_until_posting_in(&Local, now, posting)
}

/// Elapsed time between the wall-clock readings, so a daylight-saving shift
/// before the target lengthens or shortens the wait. Readings the zone
/// cannot place fall back to wall-clock difference.
pub fn time_until_posting_in<Tz: TimeZone>(
    tz: &Tz,
    now: NaiveDateTime,
    posting: NaiveTime,
) -> Duration {
    let mut target = now.date().and_time(posting);
    if now > target {
        target += Duration::days(1);
    }
    match (
        tz.from_local_datetime(&now).earliest(),
        tz.from_local_datetime(&target).earliest(),
    ) {
        (Some(start), Some(end)) => end.signed_duration_since(start),
        _ => target - now,
    }
}

pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    format!("{}h {}m {}s", total / 3600, (total % 3600) / 60, total % 60)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub duration_ms: u64,
}

impl Notification {
    pub fn posting_time(posting: NaiveTime) -> Self {
        Self {
            title: NOTIFICATION_TITLE.to_string(),
            body: format!(
                "It's {}. Time to publish your daily content and build your legacy!",
                posting.format("%-I:%M %p")
            ),
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub remaining: String,
    pub notification: Option<Notification>,
}

/// Fires once when the countdown reads zero and re-arms as soon as it no
/// longer does.
#[derive(Debug, Clone)]
pub struct PostingAlarm {
    posting: NaiveTime,
    notified: bool,
}

impl PostingAlarm {
    pub fn new(posting: NaiveTime) -> Self {
        Self {
            posting,
            notified: false,
        }
    }

    pub fn posting_time(&self) -> NaiveTime {
        self.posting
    }

    pub fn tick(&mut self, now: NaiveDateTime) -> Tick {
        let remaining = time_until_posting(now, self.posting);
        let mut notification = None;
        if remaining.num_seconds() == 0 {
            if !self.notified {
                self.notified = true;
                notification = Some(Notification::posting_time(self.posting));
            }
        } else {
            self.notified = false;
        }
        Tick {
            remaining: format_remaining(remaining),
            notification,
        }
    }
}
