use crate::calendar::{self, CalendarDate};
use crate::catalog::{Mood, Platform, Quote, TaskCategory};
use crate::checklist::Checklist;
use crate::streak::{Achievements, Badge, StreakData};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStat {
    pub followers: String,
    pub views: String,
    pub growth: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialStats {
    pub youtube: PlatformStat,
    pub instagram: PlatformStat,
    pub linkedin: PlatformStat,
}

impl SocialStats {
    pub fn get(&self, platform: Platform) -> &PlatformStat {
        match platform {
            Platform::Youtube => &self.youtube,
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
        }
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut PlatformStat {
        match platform {
            Platform::Youtube => &mut self.youtube,
            Platform::Instagram => &mut self.instagram,
            Platform::Linkedin => &mut self.linkedin,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineStat {
    pub followers: f64,
    pub views: f64,
}

/// Stored under the `baseline-state` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineState {
    pub youtube: BaselineStat,
    pub instagram: BaselineStat,
    pub linkedin: BaselineStat,
}

impl BaselineState {
    pub fn get(&self, platform: Platform) -> &BaselineStat {
        match platform {
            Platform::Youtube => &self.youtube,
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
        }
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut BaselineStat {
        match platform {
            Platform::Youtube => &mut self.youtube,
            Platform::Instagram => &mut self.instagram,
            Platform::Linkedin => &mut self.linkedin,
        }
    }
}

/// Stored under the `dashboard-state` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    pub social_stats: SocialStats,
    pub checklist: Checklist,
    pub achievements: Achievements,
    pub win_of_the_day: String,
    pub fb_auto_sync: bool,
    pub selected_mood: Mood,
    pub is_dark_mode: bool,
    pub streak_data: StreakData,
    #[serde(with = "calendar::empty_as_none")]
    pub last_visit_date: Option<CalendarDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaselineInput {
    pub followers: String,
    pub views: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaselineInputs {
    pub youtube: BaselineInput,
    pub instagram: BaselineInput,
    pub linkedin: BaselineInput,
}

impl BaselineInputs {
    pub fn get(&self, platform: Platform) -> &BaselineInput {
        match platform {
            Platform::Youtube => &self.youtube,
            Platform::Instagram => &self.instagram,
            Platform::Linkedin => &self.linkedin,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub category: String,
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct StatRequest {
    pub platform: String,
    pub field: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct WinRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRequest {
    pub dark_mode: Option<bool>,
    pub fb_auto_sync: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountdownResponse {
    pub remaining: String,
    pub now: String,
}

#[derive(Debug, Serialize)]
pub struct TaskView {
    pub label: &'static str,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct ChecklistGroup {
    pub category: TaskCategory,
    pub label: &'static str,
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Serialize)]
pub struct CompletionView {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakView {
    pub current_streak: u32,
    pub last_check_in: String,
    pub history: Vec<CalendarDate>,
    pub status: &'static str,
    pub synced_today: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub date: CalendarDate,
    pub now: String,
    pub social_stats: SocialStats,
    pub baseline: Option<BaselineState>,
    pub needs_baseline: bool,
    pub checklist: Vec<ChecklistGroup>,
    pub completion: CompletionView,
    pub achievements: Achievements,
    pub badges: Vec<Badge>,
    pub streak: StreakView,
    pub selected_mood: Mood,
    pub moods: Vec<Mood>,
    pub win_of_the_day: String,
    pub fb_auto_sync: bool,
    pub is_dark_mode: bool,
    pub quote: Quote,
    pub countdown: String,
    pub posting_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_state_uses_stored_field_names() {
        let value = serde_json::to_value(DashboardState::default()).unwrap();
        for key in [
            "socialStats",
            "checklist",
            "achievements",
            "winOfTheDay",
            "fbAutoSync",
            "selectedMood",
            "isDarkMode",
            "streakData",
            "lastVisitDate",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["lastVisitDate"], "");
        assert_eq!(value["streakData"]["lastCheckIn"], "");
    }

    #[test]
    fn partial_state_fills_defaults() {
        let state: DashboardState = serde_json::from_str(
            r#"{"isDarkMode":true,"socialStats":{"youtube":{"followers":"10"}}}"#,
        )
        .unwrap();
        assert!(state.is_dark_mode);
        assert_eq!(state.social_stats.youtube.followers, "10");
        assert_eq!(state.social_stats.youtube.views, "");
        assert_eq!(state.streak_data.current_streak, 0);
        assert!(state.last_visit_date.is_none());
    }

    #[test]
    fn baseline_reads_stored_numbers() {
        let baseline: BaselineState = serde_json::from_str(
            r#"{"youtube":{"followers":100,"views":1000},"instagram":{"followers":5.5,"views":0},"linkedin":{"followers":0,"views":0}}"#,
        )
        .unwrap();
        assert_eq!(baseline.get(Platform::Youtube).views, 1000.0);
        assert_eq!(baseline.get(Platform::Instagram).followers, 5.5);
    }
}
