use crate::calendar::{self, CalendarDate};
use crate::errors::SyncError;
use serde::{Deserialize, Serialize};

pub const SEVEN_DAY: u32 = 7;
pub const THIRTY_DAY: u32 = 30;
pub const SIX_MONTH: u32 = 180;
pub const ONE_YEAR: u32 = 365;

/// Consecutive-day check-in record. `history` is append-only and its last
/// entry equals `last_check_in` once non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakData {
    pub current_streak: u32,
    #[serde(with = "calendar::empty_as_none")]
    pub last_check_in: Option<CalendarDate>,
    pub history: Vec<CalendarDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStatus {
    NoHistory,
    Active(u32),
    Broken,
}

impl StreakStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StreakStatus::NoHistory => "none",
            StreakStatus::Active(_) => "active",
            StreakStatus::Broken => "broken",
        }
    }
}

impl StreakData {
    pub fn status(&self, today: CalendarDate) -> StreakStatus {
        match self.last_check_in {
            None => StreakStatus::NoHistory,
            Some(last) if last == today || last == today.previous_day() => {
                StreakStatus::Active(self.current_streak)
            }
            Some(_) => StreakStatus::Broken,
        }
    }

    pub fn checked_in_on(&self, today: CalendarDate) -> bool {
        self.last_check_in == Some(today)
    }

    pub fn next_streak(&self, today: CalendarDate) -> u32 {
        match self.last_check_in {
            Some(last) if last == today.previous_day() => self.current_streak.saturating_add(1),
            _ => 1,
        }
    }

    pub fn check_in(&mut self, today: CalendarDate) -> Result<u32, SyncError> {
        if self.checked_in_on(today) {
            return Err(SyncError::AlreadySyncedToday);
        }
        let streak = self.next_streak(today);
        self.current_streak = streak;
        self.last_check_in = Some(today);
        self.history.push(today);
        Ok(streak)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievements {
    pub seven_day: bool,
    pub thirty_day: bool,
    pub six_month: bool,
    pub one_year: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub key: &'static str,
    pub label: &'static str,
    pub threshold: u32,
    pub unlocked: bool,
}

impl Achievements {
    pub fn for_streak(streak: u32) -> Self {
        Self {
            seven_day: streak >= SEVEN_DAY,
            thirty_day: streak >= THIRTY_DAY,
            six_month: streak >= SIX_MONTH,
            one_year: streak >= ONE_YEAR,
        }
    }

    pub fn badges(&self) -> Vec<Badge> {
        vec![
            Badge {
                key: "sevenDay",
                label: "7-Day Streak",
                threshold: SEVEN_DAY,
                unlocked: self.seven_day,
            },
            Badge {
                key: "thirtyDay",
                label: "30-Day Streak",
                threshold: THIRTY_DAY,
                unlocked: self.thirty_day,
            },
            Badge {
                key: "sixMonth",
                label: "6-Month Streak",
                threshold: SIX_MONTH,
                unlocked: self.six_month,
            },
            Badge {
                key: "oneYear",
                label: "1-Year Streak",
                threshold: ONE_YEAR,
                unlocked: self.one_year,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> CalendarDate {
        CalendarDate::from_ymd(2026, 5, d).unwrap()
    }

    fn streak_on(last: CalendarDate, current: u32) -> StreakData {
        StreakData {
            current_streak: current,
            last_check_in: Some(last),
            history: vec![last],
        }
    }

    #[test]
    fn first_check_in_starts_at_one() {
        let mut streak = StreakData::default();
        assert_eq!(streak.status(day(3)), StreakStatus::NoHistory);
        assert_eq!(streak.check_in(day(3)), Ok(1));
        assert_eq!(streak.last_check_in, Some(day(3)));
        assert_eq!(streak.history, vec![day(3)]);
    }

    #[test]
    fn consecutive_day_continues() {
        let mut streak = streak_on(day(10), 6);
        assert_eq!(streak.status(day(11)), StreakStatus::Active(6));
        assert_eq!(streak.check_in(day(11)), Ok(7));
        assert_eq!(streak.last_check_in, Some(day(11)));
        assert_eq!(streak.history, vec![day(10), day(11)]);
    }

    #[test]
    fn continuation_crosses_month_boundary() {
        let last = CalendarDate::from_ymd(2026, 4, 30).unwrap();
        let mut streak = streak_on(last, 29);
        assert_eq!(streak.check_in(day(1)), Ok(30));
    }

    #[test]
    fn gap_restarts_at_one() {
        for gap in [2, 3, 30, 400] {
            let last = day(1);
            let mut streak = streak_on(last, 12);
            let today = last.add_days(gap);
            assert_eq!(streak.status(today), StreakStatus::Broken);
            assert_eq!(streak.check_in(today), Ok(1));
            assert_eq!(streak.history.len(), 2);
        }
    }

    #[test]
    fn same_day_check_in_is_rejected_without_change() {
        let mut streak = streak_on(day(4), 3);
        let before = streak.clone();
        assert_eq!(streak.check_in(day(4)), Err(SyncError::AlreadySyncedToday));
        assert_eq!(streak, before);
    }

    #[test]
    fn achievements_follow_thresholds_independently() {
        assert_eq!(Achievements::for_streak(0), Achievements::default());
        assert_eq!(Achievements::for_streak(6), Achievements::default());

        let week = Achievements::for_streak(7);
        assert!(week.seven_day && !week.thirty_day);

        let half_year = Achievements::for_streak(180);
        assert!(half_year.seven_day && half_year.thirty_day && half_year.six_month);
        assert!(!half_year.one_year);

        let all = Achievements::for_streak(400);
        assert!(all.seven_day && all.thirty_day && all.six_month && all.one_year);

        for n in [1, 7, 29, 30, 179, 180, 364, 365, 1000] {
            let a = Achievements::for_streak(n);
            assert_eq!(a.seven_day, n >= 7);
            assert_eq!(a.thirty_day, n >= 30);
            assert_eq!(a.six_month, n >= 180);
            assert_eq!(a.one_year, n >= 365);
        }
    }

    #[test]
    fn stored_streak_uses_empty_last_check_in() {
        let streak: StreakData =
            serde_json::from_str(r#"{"currentStreak":0,"lastCheckIn":"","history":[]}"#).unwrap();
        assert_eq!(streak, StreakData::default());

        let json = serde_json::to_value(streak_on(day(9), 2)).unwrap();
        assert_eq!(json["lastCheckIn"], "2026-05-09");
        assert_eq!(json["history"][0], "2026-05-09");
    }
}
