use crate::catalog::TaskCategory;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("Complete all checklist tasks before syncing for streak!")]
    ChecklistIncomplete,
    #[error("You've already synced for today!")]
    AlreadySyncedToday,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Sync(#[from] SyncError),
    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),
    #[error("unknown checklist category '{0}'")]
    UnknownCategory(String),
    #[error("{category} has no task at index {index}")]
    TaskOutOfRange { category: TaskCategory, index: usize },
    #[error("unknown stat field '{0}'")]
    UnknownField(String),
    #[error("no mood at index {0}")]
    UnknownMood(usize),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode state: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        let status = match err {
            DashboardError::Sync(SyncError::ChecklistIncomplete) => StatusCode::UNPROCESSABLE_ENTITY,
            DashboardError::Sync(SyncError::AlreadySyncedToday) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        error!("failed to persist dashboard: {err}");
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_rejections_map_to_distinct_statuses() {
        let incomplete = AppError::from(DashboardError::from(SyncError::ChecklistIncomplete));
        let duplicate = AppError::from(DashboardError::from(SyncError::AlreadySyncedToday));
        assert_eq!(incomplete.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(duplicate.status, StatusCode::CONFLICT);
        assert_ne!(incomplete.message, duplicate.message);
    }

    #[test]
    fn bad_input_is_a_client_error() {
        let err = AppError::from(DashboardError::UnknownMood(42));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "no mood at index 42");
    }
}
