use crate::calendar::CalendarDate;
use crate::errors::DashboardError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
    Linkedin,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Youtube, Platform::Instagram, Platform::Linkedin];

    pub fn key(self) -> &'static str {
        match self {
            Platform::Youtube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
        }
    }
}

impl FromStr for Platform {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::UnknownPlatform(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskCategory {
    YoutubeShorts,
    YoutubeCommunity,
    DigitalArt,
    LinkedinPost,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 4] = [
        TaskCategory::YoutubeShorts,
        TaskCategory::YoutubeCommunity,
        TaskCategory::DigitalArt,
        TaskCategory::LinkedinPost,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TaskCategory::YoutubeShorts => "youtubeShorts",
            TaskCategory::YoutubeCommunity => "youtubeCommunity",
            TaskCategory::DigitalArt => "digitalArt",
            TaskCategory::LinkedinPost => "linkedinPost",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::YoutubeShorts => "YouTube Shorts",
            TaskCategory::YoutubeCommunity => "YouTube Community",
            TaskCategory::DigitalArt => "Digital Art",
            TaskCategory::LinkedinPost => "LinkedIn Post",
        }
    }

    pub fn tasks(self) -> &'static [&'static str] {
        match self {
            TaskCategory::YoutubeShorts => &["Daily CS Short (Upload & Optimize)"],
            TaskCategory::YoutubeCommunity => &["Engagement Post", "Festival Post"],
            TaskCategory::DigitalArt => &[
                "Primary Post: MS Paint Digital Art",
                "Secondary Post: Promotion / Behind the Scenes",
            ],
            TaskCategory::LinkedinPost => &["Career Update", "Coding Insight"],
        }
    }

    pub fn task_count(self) -> usize {
        self.tasks().len()
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TaskCategory::ALL
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashboardError::UnknownCategory(wanted.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub emoji: String,
    pub label: String,
}

const MOODS: [(&str, &str); 8] = [
    ("😊", "Happy & Positive"),
    ("🚀", "Highly Productive"),
    ("💪", "Strong & Disciplined"),
    ("✨", "Creative & Inspired"),
    ("🔥", "On Fire!"),
    ("🎯", "Focused & Determined"),
    ("💡", "Idea Mode"),
    ("🌟", "Legacy Building"),
];

impl Mood {
    pub fn preset(index: usize) -> Option<Mood> {
        MOODS.get(index).map(|(emoji, label)| Mood {
            emoji: (*emoji).to_string(),
            label: (*label).to_string(),
        })
    }

    pub fn presets() -> Vec<Mood> {
        (0..MOODS.len()).filter_map(Mood::preset).collect()
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood {
            emoji: MOODS[0].0.to_string(),
            label: MOODS[0].1.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const QUOTES: [Quote; 7] = [
    Quote {
        text: "Success is the sum of small efforts, repeated day in and day out.",
        author: "Robert Collier",
    },
    Quote {
        text: "Your work is going to fill a large part of your life, and the only way to be truly satisfied is to do what you believe is great work.",
        author: "Steve Jobs",
    },
    Quote {
        text: "Consistency is what transforms average into excellence.",
        author: "Unknown",
    },
    Quote {
        text: "The secret of your future is hidden in your daily routine.",
        author: "Mike Murdock",
    },
    Quote {
        text: "Don't count the days, make the days count.",
        author: "Muhammad Ali",
    },
    Quote {
        text: "Motivation is what gets you started. Habit is what keeps you going.",
        author: "Jim Ryun",
    },
    Quote {
        text: "Focus on being productive instead of busy.",
        author: "Tim Ferriss",
    },
];

pub fn quote_of_the_day(date: CalendarDate) -> Quote {
    let index = date.day_number().rem_euclid(QUOTES.len() as i64) as usize;
    QUOTES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checklist_shape_is_fixed() {
        let total: usize = TaskCategory::ALL.iter().map(|c| c.task_count()).sum();
        assert_eq!(total, 7);
        assert_eq!(TaskCategory::YoutubeShorts.task_count(), 1);
    }

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("YouTube".parse::<Platform>().unwrap(), Platform::Youtube);
        assert_eq!(
            "digitalart".parse::<TaskCategory>().unwrap(),
            TaskCategory::DigitalArt
        );
        assert!(matches!(
            "tiktok".parse::<Platform>(),
            Err(DashboardError::UnknownPlatform(name)) if name == "tiktok"
        ));
    }

    #[test]
    fn quote_rotates_daily_and_wraps() {
        let day = CalendarDate::from_ymd(2026, 3, 1).unwrap();
        assert_ne!(quote_of_the_day(day), quote_of_the_day(day.add_days(1)));
        assert_eq!(quote_of_the_day(day), quote_of_the_day(day.add_days(7)));
    }

    #[test]
    fn default_mood_is_first_preset() {
        assert_eq!(Mood::default(), Mood::preset(0).unwrap());
        assert_eq!(Mood::presets().len(), 8);
        assert!(Mood::preset(8).is_none());
    }
}
