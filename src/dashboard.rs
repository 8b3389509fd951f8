use crate::calendar::CalendarDate;
use crate::catalog::{Mood, Platform, TaskCategory};
use crate::config::RebasePolicy;
use crate::errors::{DashboardError, SyncError};
use crate::growth::{combined_growth, parse_count};
use crate::models::{BaselineInputs, BaselineState, DashboardState, PlatformStat};
use crate::storage::Snapshot;
use crate::streak::Achievements;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Followers,
    Views,
    Growth,
}

impl FromStr for StatField {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "followers" => Ok(StatField::Followers),
            "views" => Ok(StatField::Views),
            "growth" => Ok(StatField::Growth),
            other => Err(DashboardError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    ToggleTask { category: TaskCategory, index: usize },
    UpdateStat { platform: Platform, field: StatField, value: String },
    SetBaseline(BaselineInputs),
    SyncDay,
    SelectMood { index: usize },
    SetWinOfTheDay(String),
    SetDarkMode(bool),
    SetAutoSync(bool),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Persist {
    pub dashboard: bool,
    pub baseline: bool,
}

impl Persist {
    const DASHBOARD: Persist = Persist {
        dashboard: true,
        baseline: false,
    };
    const BASELINE: Persist = Persist {
        dashboard: false,
        baseline: true,
    };
    const BOTH: Persist = Persist {
        dashboard: true,
        baseline: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReceipt {
    pub current_streak: u32,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub persist: Persist,
    pub receipt: Option<SyncReceipt>,
}

impl Outcome {
    fn persist(persist: Persist) -> Self {
        Self {
            persist,
            receipt: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub state: DashboardState,
    pub baseline: Option<BaselineState>,
    rebase: RebasePolicy,
}

impl Dashboard {
    pub fn new(state: DashboardState, baseline: Option<BaselineState>, rebase: RebasePolicy) -> Self {
        Self {
            state,
            baseline,
            rebase,
        }
    }

    /// Builds the dashboard from whatever the store returned, repairing the
    /// checklist shape. Rollover is left to [`Dashboard::roll_over`].
    pub fn hydrate(snapshot: Snapshot, rebase: RebasePolicy) -> Self {
        let mut state = snapshot.dashboard.unwrap_or_default();
        state.checklist.normalize();
        Self::new(state, snapshot.baseline, rebase)
    }

    pub fn needs_baseline(&self) -> bool {
        self.baseline.is_none()
    }

    pub fn roll_over(&mut self, today: CalendarDate) -> bool {
        let previous = self.state.last_visit_date.replace(today);
        match previous {
            Some(last) if last != today => {
                self.state.checklist.reset();
                self.state.selected_mood = Mood::default();
                self.state.win_of_the_day.clear();
                true
            }
            _ => false,
        }
    }

    pub fn apply(&mut self, action: Action, today: CalendarDate) -> Result<Outcome, DashboardError> {
        let outcome = match action {
            Action::ToggleTask { category, index } => {
                self.state.checklist.toggle(category, index)?;
                Outcome::persist(Persist::DASHBOARD)
            }
            Action::UpdateStat {
                platform,
                field,
                value,
            } => {
                self.update_stat(platform, field, value);
                Outcome::persist(Persist::DASHBOARD)
            }
            Action::SetBaseline(inputs) => {
                self.set_baseline(&inputs);
                Outcome::persist(Persist::BASELINE)
            }
            Action::SyncDay => {
                let receipt = self.sync_day(today)?;
                Outcome {
                    persist: Persist::BOTH,
                    receipt: Some(receipt),
                }
            }
            Action::SelectMood { index } => {
                self.state.selected_mood =
                    Mood::preset(index).ok_or(DashboardError::UnknownMood(index))?;
                Outcome::persist(Persist::DASHBOARD)
            }
            Action::SetWinOfTheDay(text) => {
                self.state.win_of_the_day = text;
                Outcome::persist(Persist::DASHBOARD)
            }
            Action::SetDarkMode(enabled) => {
                self.state.is_dark_mode = enabled;
                Outcome::persist(Persist::DASHBOARD)
            }
            Action::SetAutoSync(enabled) => {
                self.state.fb_auto_sync = enabled;
                Outcome::persist(Persist::DASHBOARD)
            }
        };
        self.state.last_visit_date = Some(today);
        Ok(outcome)
    }

    /// Writes one stat field. Follower and view edits recompute growth when a
    /// baseline exists; growth edits are stored as given.
    fn update_stat(&mut self, platform: Platform, field: StatField, value: String) {
        let stat = self.state.social_stats.get_mut(platform);
        match field {
            StatField::Followers => stat.followers = value,
            StatField::Views => stat.views = value,
            StatField::Growth => {
                stat.growth = value;
                return;
            }
        }
        if let Some(baseline) = &self.baseline {
            stat.growth = combined_growth(stat, baseline.get(platform));
        }
    }

    fn set_baseline(&mut self, inputs: &BaselineInputs) {
        let mut baseline = BaselineState::default();
        for platform in Platform::ALL {
            let input = inputs.get(platform);
            let entry = baseline.get_mut(platform);
            entry.followers = parse_count(&input.followers).max(0.0);
            entry.views = parse_count(&input.views).max(0.0);
        }
        self.baseline = Some(baseline);
    }

    fn sync_day(&mut self, today: CalendarDate) -> Result<SyncReceipt, SyncError> {
        if !self.state.checklist.is_complete() {
            return Err(SyncError::ChecklistIncomplete);
        }
        let streak = self.state.streak_data.check_in(today)?;
        self.state.achievements = Achievements::for_streak(streak);
        self.rebase_baseline();
        for platform in Platform::ALL {
            let stat = self.state.social_stats.get_mut(platform);
            *stat = PlatformStat {
                growth: std::mem::take(&mut stat.growth),
                ..PlatformStat::default()
            };
        }
        Ok(SyncReceipt {
            current_streak: streak,
            message: format!("Sync Successful! Current Streak: {streak} days."),
        })
    }

    fn rebase_baseline(&mut self) {
        let mut baseline = self.baseline.unwrap_or_default();
        for platform in Platform::ALL {
            let stat = self.state.social_stats.get(platform);
            let entry = baseline.get_mut(platform);
            entry.followers = parse_count(&stat.followers).max(0.0);
            entry.views = match self.rebase {
                RebasePolicy::FollowersOnly => 0.0,
                RebasePolicy::All => parse_count(&stat.views).max(0.0),
            };
        }
        self.baseline = Some(baseline);
    }
}
