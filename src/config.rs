use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";
pub const DEFAULT_COMPETITION: &str = "BSA";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REFRESH_SECS: u64 = 300;

/// Rounds in a Série A season. Not derived from the API.
pub const TOTAL_ROUNDS: u32 = 38;
pub const LEAGUE_TEAMS: u32 = 20;

// Standings colour bands, by last position (inclusive) of each band.
pub const LIBERTADORES_LAST: u32 = 4;
pub const PRE_LIBERTADORES_LAST: u32 = 6;
pub const SUL_AMERICANA_LAST: u32 = 12;
pub const RELEGATION_FIRST: u32 = 17;

pub const SCORERS_LIMIT: usize = 20;

const API_KEY_VARS: [&str; 2] = ["API_KEY", "FOOTBALL_DATA_API_KEY"];

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub competition: String,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
    pub cache_failures: bool,
    pub refresh_every: Duration,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(api_key) = API_KEY_VARS
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|val| val.trim().to_string())
            .find(|val| !val.is_empty())
        else {
            bail!("API_KEY is not set (football-data.org token)");
        };

        let base_url = lookup("FOOTBALL_DATA_BASE_URL")
            .map(|val| val.trim().trim_end_matches('/').to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let competition = lookup("COMPETITION_CODE")
            .map(|val| val.trim().to_ascii_uppercase())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_COMPETITION.to_string());
        let cache_ttl = lookup("CACHE_TTL_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS)
            .max(1);
        let request_timeout = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(1, 60);
        let cache_failures = lookup("CACHE_FAILURES")
            .and_then(|val| parse_bool(&val))
            .unwrap_or(true);
        let refresh_every = lookup("REFRESH_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS)
            .max(30);
        let log_file = lookup("LOG_FILE")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_key,
            base_url,
            competition,
            cache_ttl: Duration::from_secs(cache_ttl),
            request_timeout: Duration::from_secs(request_timeout),
            cache_failures,
            refresh_every: Duration::from_secs(refresh_every),
            log_file,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
