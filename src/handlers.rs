use crate::calendar::CalendarDate;
use crate::catalog::{Platform, TaskCategory};
use crate::countdown::Notification;
use crate::dashboard::{Action, Dashboard, Outcome, StatField, SyncReceipt};
use crate::errors::{AppError, DashboardError};
use crate::models::{
    BaselineInputs, CountdownResponse, DashboardView, MoodRequest, PreferencesRequest,
    StatRequest, ToggleRequest, WinRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{build_countdown, build_view};
use axum::{Json, extract::State, response::Html};
use chrono::NaiveDateTime;
use tokio::sync::MutexGuard;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (now, dashboard) = current(&state).await?;
    let posting = state.posting_time().await;
    Ok(Html(render_index(&build_view(now, &dashboard, posting))))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    let (now, dashboard) = current(&state).await?;
    let posting = state.posting_time().await;
    Ok(Json(build_view(now, &dashboard, posting)))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let category = payload.category.parse::<TaskCategory>()?;
    let (view, _) = dispatch(
        &state,
        Action::ToggleTask {
            category,
            index: payload.index,
        },
    )
    .await?;
    Ok(Json(view))
}

pub async fn update_stat(
    State(state): State<AppState>,
    Json(payload): Json<StatRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let platform = payload.platform.parse::<Platform>()?;
    let field = payload.field.parse::<StatField>()?;
    let (view, _) = dispatch(
        &state,
        Action::UpdateStat {
            platform,
            field,
            value: payload.value,
        },
    )
    .await?;
    Ok(Json(view))
}

pub async fn set_baseline(
    State(state): State<AppState>,
    Json(payload): Json<BaselineInputs>,
) -> Result<Json<DashboardView>, AppError> {
    let (view, _) = dispatch(&state, Action::SetBaseline(payload)).await?;
    info!("baseline saved");
    Ok(Json(view))
}

pub async fn sync_day(State(state): State<AppState>) -> Result<Json<SyncReceipt>, AppError> {
    let (_, outcome) = dispatch(&state, Action::SyncDay).await?;
    let receipt = outcome
        .receipt
        .ok_or_else(|| AppError::bad_request("sync produced no receipt"))?;
    info!(streak = receipt.current_streak, "daily sync recorded");
    Ok(Json(receipt))
}

pub async fn select_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let (view, _) = dispatch(&state, Action::SelectMood { index: payload.index }).await?;
    Ok(Json(view))
}

pub async fn set_win(
    State(state): State<AppState>,
    Json(payload): Json<WinRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let (view, _) = dispatch(&state, Action::SetWinOfTheDay(payload.text)).await?;
    Ok(Json(view))
}

pub async fn set_preferences(
    State(state): State<AppState>,
    Json(payload): Json<PreferencesRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let mut view = None;
    if let Some(enabled) = payload.dark_mode {
        view = Some(dispatch(&state, Action::SetDarkMode(enabled)).await?.0);
    }
    if let Some(enabled) = payload.fb_auto_sync {
        view = Some(dispatch(&state, Action::SetAutoSync(enabled)).await?.0);
    }
    match view {
        Some(view) => Ok(Json(view)),
        None => Err(AppError::bad_request(
            "expected at least one of 'darkMode' or 'fbAutoSync'",
        )),
    }
}

pub async fn get_countdown(State(state): State<AppState>) -> Json<CountdownResponse> {
    let posting = state.posting_time().await;
    Json(build_countdown(state.clock.now(), posting))
}

pub async fn drain_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.drain())
}

async fn current(
    state: &AppState,
) -> Result<(NaiveDateTime, MutexGuard<'_, Dashboard>), AppError> {
    let now = state.clock.now();
    let today = CalendarDate::from(now.date());
    let mut dashboard = state.dashboard.lock().await;
    let mut next = dashboard.clone();
    if next.roll_over(today) {
        state.store.save_dashboard(&next.state).await?;
        info!(%today, "new day: checklist, mood and win of the day reset");
    }
    *dashboard = next;
    Ok((now, dashboard))
}

/// Applies `action` to a copy and only swaps it in once the touched keys
/// are on disk.
async fn dispatch(state: &AppState, action: Action) -> Result<(DashboardView, Outcome), AppError> {
    let (now, mut dashboard) = current(state).await?;
    let today = CalendarDate::from(now.date());

    let mut next = dashboard.clone();
    let outcome = next.apply(action, today).map_err(|err| {
        if let DashboardError::Sync(reason) = &err {
            info!(%today, "sync rejected: {reason}");
        }
        AppError::from(err)
    })?;
    state.store.persist(&next, outcome.persist).await?;
    *dashboard = next;

    let posting = state.posting_time().await;
    Ok((build_view(now, &dashboard, posting), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RebasePolicy;
    use crate::notify::TerminalBell;
    use crate::scheduler::{Clock, ManualClock};
    use crate::storage::{Snapshot, Store};
    use axum::http::StatusCode;
    use chrono::{NaiveDate, NaiveTime};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn unique_path(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "social_dashboard_{label}_{}_{}",
            std::process::id(),
            nanos
        ))
    }

    // A store whose directory sits below a regular file, so every write fails.
    async fn unwritable_store() -> Store {
        let blocker = unique_path("blocker");
        tokio::fs::write(&blocker, b"").await.unwrap();
        Store::new(blocker.join("data"))
    }

    fn app_state(store: Store, clock: &ManualClock) -> AppState {
        AppState::new(
            store,
            Dashboard::hydrate(Snapshot::default(), RebasePolicy::default()),
            Arc::new(clock.clone()),
            NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
            Arc::new(TerminalBell),
        )
    }

    fn morning() -> ManualClock {
        ManualClock::new(
            NaiveDate::from_ymd_opt(2026, 5, 4)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        )
    }

    async fn fill_checklist(state: &AppState, today: CalendarDate) {
        let mut dashboard = state.dashboard.lock().await;
        for category in TaskCategory::ALL {
            for index in 0..category.task_count() {
                dashboard
                    .apply(Action::ToggleTask { category, index }, today)
                    .unwrap();
            }
        }
    }

    #[tokio::test]
    async fn failed_save_leaves_sync_uncommitted() {
        let clock = morning();
        let state = app_state(unwritable_store().await, &clock);
        fill_checklist(&state, clock.today()).await;

        for _ in 0..2 {
            let err = sync_day(State(state.clone())).await.unwrap_err();
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        }

        let dashboard = state.dashboard.lock().await;
        assert_eq!(dashboard.state.streak_data.current_streak, 0);
        assert!(dashboard.state.streak_data.history.is_empty());
        assert!(dashboard.state.checklist.is_complete());
    }

    #[tokio::test]
    async fn failed_save_leaves_toggle_uncommitted() {
        let clock = morning();
        let state = app_state(unwritable_store().await, &clock);

        let payload = ToggleRequest {
            category: "digitalArt".into(),
            index: 0,
        };
        let err = toggle_task(State(state.clone()), Json(payload)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        let dashboard = state.dashboard.lock().await;
        assert_eq!(dashboard.state.checklist.completion().completed, 0);
    }

    #[tokio::test]
    async fn sync_commits_once_saved() {
        let clock = morning();
        let store = Store::new(unique_path("handlers"));
        store.ensure_dir().await.unwrap();
        let state = app_state(store, &clock);
        fill_checklist(&state, clock.today()).await;

        let Json(receipt) = sync_day(State(state.clone())).await.unwrap();
        assert_eq!(receipt.current_streak, 1);

        let err = sync_day(State(state.clone())).await.unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let stored = state.store.load().await.dashboard.unwrap();
        assert_eq!(stored.streak_data.current_streak, 1);
    }
}
