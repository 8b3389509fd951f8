use crate::calendar::CalendarDate;
use crate::catalog::{Mood, TaskCategory, quote_of_the_day};
use crate::countdown::{format_remaining, time_until_posting};
use crate::dashboard::Dashboard;
use crate::models::{
    ChecklistGroup, CompletionView, CountdownResponse, DashboardView, StreakView, TaskView,
};
use chrono::{NaiveDateTime, NaiveTime};

pub fn build_view(now: NaiveDateTime, dashboard: &Dashboard, posting: NaiveTime) -> DashboardView {
    let today = CalendarDate::from(now.date());
    let state = &dashboard.state;

    let checklist = TaskCategory::ALL
        .into_iter()
        .map(|category| ChecklistGroup {
            category,
            label: category.label(),
            tasks: category
                .tasks()
                .iter()
                .zip(state.checklist.tasks(category))
                .map(|(label, done)| TaskView {
                    label: *label,
                    done: *done,
                })
                .collect(),
        })
        .collect();

    let completion = state.checklist.completion();
    let streak = &state.streak_data;

    DashboardView {
        date: today,
        now: now.format("%H:%M:%S").to_string(),
        social_stats: state.social_stats.clone(),
        baseline: dashboard.baseline,
        needs_baseline: dashboard.needs_baseline(),
        checklist,
        completion: CompletionView {
            completed: completion.completed,
            total: completion.total,
            percent: completion.percent(),
        },
        achievements: state.achievements,
        badges: state.achievements.badges(),
        streak: StreakView {
            current_streak: streak.current_streak,
            last_check_in: streak
                .last_check_in
                .map(|date| date.to_string())
                .unwrap_or_default(),
            history: streak.history.clone(),
            status: streak.status(today).as_str(),
            synced_today: streak.checked_in_on(today),
        },
        selected_mood: state.selected_mood.clone(),
        moods: Mood::presets(),
        win_of_the_day: state.win_of_the_day.clone(),
        fb_auto_sync: state.fb_auto_sync,
        is_dark_mode: state.is_dark_mode,
        quote: quote_of_the_day(today),
        countdown: format_remaining(time_until_posting(now, posting)),
        posting_time: posting.format("%H:%M").to_string(),
    }
}

pub fn build_countdown(now: NaiveDateTime, posting: NaiveTime) -> CountdownResponse {
    CountdownResponse {
        remaining: format_remaining(time_until_posting(now, posting)),
        now: now.format("%H:%M:%S").to_string(),
    }
}
