use crate::dashboard::{Dashboard, Persist};
use crate::errors::StoreError;
use crate::models::{BaselineState, DashboardState};
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

pub const DASHBOARD_KEY: &str = "dashboard-state";
pub const BASELINE_KEY: &str = "baseline-state";

/// Everything read from disk at startup. A key is `None` when it was
/// missing or could not be parsed.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub dashboard: Option<DashboardState>,
    pub baseline: Option<BaselineState>,
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub async fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    pub async fn load(&self) -> Snapshot {
        Snapshot {
            dashboard: self.read_key(DASHBOARD_KEY).await,
            baseline: self.read_key(BASELINE_KEY).await,
        }
    }

    pub async fn save_dashboard(&self, state: &DashboardState) -> Result<(), StoreError> {
        self.write_key(DASHBOARD_KEY, state).await
    }

    pub async fn save_baseline(&self, baseline: &BaselineState) -> Result<(), StoreError> {
        self.write_key(BASELINE_KEY, baseline).await
    }

    pub async fn persist(&self, dashboard: &Dashboard, persist: Persist) -> Result<(), StoreError> {
        if persist.dashboard {
            self.save_dashboard(&dashboard.state).await?;
        }
        if persist.baseline {
            if let Some(baseline) = &dashboard.baseline {
                self.save_baseline(baseline).await?;
            }
        }
        Ok(())
    }

    async fn read_key<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    error!("failed to parse {key} at {}: {err}", path.display());
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no stored {key}, starting from defaults");
                None
            }
            Err(err) => {
                error!("failed to read {key} at {}: {err}", path.display());
                None
            }
        }
    }

    async fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(value)?;
        fs::write(self.path_for(key), payload).await?;
        Ok(())
    }
}
