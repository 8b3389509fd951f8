pub mod app;
pub mod calendar;
pub mod catalog;
pub mod checklist;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod errors;
pub mod growth;
pub mod handlers;
pub mod jobs;
pub mod models;
pub mod notify;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod streak;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use dashboard::Dashboard;
pub use state::AppState;
pub use storage::Store;
