use crate::catalog::TaskCategory;
use crate::errors::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Checklist {
    pub youtube_shorts: Vec<bool>,
    pub youtube_community: Vec<bool>,
    pub digital_art: Vec<bool>,
    pub linkedin_post: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}

impl Default for Checklist {
    fn default() -> Self {
        let blank = |category: TaskCategory| vec![false; category.task_count()];
        Self {
            youtube_shorts: blank(TaskCategory::YoutubeShorts),
            youtube_community: blank(TaskCategory::YoutubeCommunity),
            digital_art: blank(TaskCategory::DigitalArt),
            linkedin_post: blank(TaskCategory::LinkedinPost),
        }
    }
}

impl Checklist {
    pub fn tasks(&self, category: TaskCategory) -> &[bool] {
        match category {
            TaskCategory::YoutubeShorts => &self.youtube_shorts,
            TaskCategory::YoutubeCommunity => &self.youtube_community,
            TaskCategory::DigitalArt => &self.digital_art,
            TaskCategory::LinkedinPost => &self.linkedin_post,
        }
    }

    fn tasks_mut(&mut self, category: TaskCategory) -> &mut Vec<bool> {
        match category {
            TaskCategory::YoutubeShorts => &mut self.youtube_shorts,
            TaskCategory::YoutubeCommunity => &mut self.youtube_community,
            TaskCategory::DigitalArt => &mut self.digital_art,
            TaskCategory::LinkedinPost => &mut self.linkedin_post,
        }
    }

    pub fn toggle(&mut self, category: TaskCategory, index: usize) -> Result<bool, DashboardError> {
        let task = self
            .tasks_mut(category)
            .get_mut(index)
            .ok_or(DashboardError::TaskOutOfRange { category, index })?;
        *task = !*task;
        Ok(*task)
    }

    fn all_tasks(&self) -> impl Iterator<Item = bool> + '_ {
        TaskCategory::ALL
            .into_iter()
            .flat_map(|category| self.tasks(category).iter().copied())
    }

    pub fn completion(&self) -> Completion {
        let (completed, total) = self
            .all_tasks()
            .fold((0, 0), |(done, total), task| (done + usize::from(task), total + 1));
        Completion { completed, total }
    }

    pub fn is_complete(&self) -> bool {
        self.all_tasks().all(|task| task)
    }

    pub fn normalize(&mut self) -> bool {
        let mut changed = false;
        for category in TaskCategory::ALL {
            let tasks = self.tasks_mut(category);
            let expected = category.task_count();
            if tasks.len() != expected {
                tasks.resize(expected, false);
                changed = true;
            }
        }
        changed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
