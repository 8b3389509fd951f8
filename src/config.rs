use chrono::NaiveTime;
use std::{env, path::PathBuf, str::FromStr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_DIR: &str = "data";

/// `FollowersOnly` drops the views baseline to 0 on sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RebasePolicy {
    #[default]
    FollowersOnly,
    All,
}

impl FromStr for RebasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "followers" => Ok(RebasePolicy::FollowersOnly),
            "all" => Ok(RebasePolicy::All),
            other => Err(format!("expected 'followers' or 'all', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub posting_time: NaiveTime,
    pub rebase: RebasePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT, |v| v.parse().ok());
        let data_dir = lookup("APP_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let posting_time = parse_or_default(&lookup, "POSTING_TIME", default_posting_time(), |v| {
            parse_posting_time(v)
        });
        let rebase = parse_or_default(&lookup, "BASELINE_REBASE", RebasePolicy::default(), |v| {
            v.parse().ok()
        });

        Self {
            port,
            data_dir,
            posting_time,
            rebase,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

pub fn default_posting_time() -> NaiveTime {
    NaiveTime::from_hms_opt(20, 30, 0).unwrap_or_default()
}

fn parse_posting_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

fn parse_or_default<T: std::fmt::Debug>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    match lookup(key) {
        Some(raw) => parse(&raw).unwrap_or_else(|| {
            warn!("ignoring invalid {key}={raw:?}, using {default:?}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.posting_time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        assert_eq!(config.rebase, RebasePolicy::FollowersOnly);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9191"),
            ("APP_DATA_DIR", "/tmp/dash"),
            ("POSTING_TIME", "07:15"),
            ("BASELINE_REBASE", "ALL"),
        ]));
        assert_eq!(config.port, 9191);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dash"));
        assert_eq!(config.posting_time, NaiveTime::from_hms_opt(7, 15, 0).unwrap());
        assert_eq!(config.rebase, RebasePolicy::All);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("POSTING_TIME", "25:99"),
            ("BASELINE_REBASE", "sometimes"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.posting_time, default_posting_time());
        assert_eq!(config.rebase, RebasePolicy::FollowersOnly);
    }
}
