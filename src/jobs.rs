use crate::notify::announce;
use crate::scheduler::{self, TickerHandle};
use crate::state::AppState;
use std::time::Duration;
use tracing::{error, info};

const TICK: Duration = Duration::from_secs(1);

pub struct Jobs {
    pub clock: TickerHandle,
    pub countdown: TickerHandle,
}

impl Jobs {
    pub fn cancel(self) {
        self.clock.cancel();
        self.countdown.cancel();
    }
}

pub fn spawn(state: &AppState) -> Jobs {
    let clock_state = state.clone();
    let clock = scheduler::every(TICK, move || {
        let state = clock_state.clone();
        async move { refresh_clock(&state).await }
    });

    let countdown_state = state.clone();
    let countdown = scheduler::every(TICK, move || {
        let state = countdown_state.clone();
        async move {
            refresh_countdown(&state).await;
        }
    });

    Jobs { clock, countdown }
}

pub async fn refresh_clock(state: &AppState) {
    let today = state.clock.today();
    let mut dashboard = state.dashboard.lock().await;
    let mut next = dashboard.clone();
    if next.roll_over(today) {
        if let Err(err) = state.store.save_dashboard(&next.state).await {
            error!("failed to persist rollover, retrying next tick: {err}");
            return;
        }
        info!(%today, "new day: checklist, mood and win of the day reset");
    }
    *dashboard = next;
}

pub async fn refresh_countdown(state: &AppState) -> String {
    let now = state.clock.now();
    let tick = state.alarm.lock().await.tick(now);
    if let Some(notification) = &tick.notification {
        announce(&state.notifications, state.audio.as_ref(), notification);
    }
    tick.remaining
}
