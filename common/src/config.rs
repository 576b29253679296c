//! Client settings.
//!
//! The browser bundle has no process environment, so the frontend resolves
//! keys at compile time and hands them to [`Settings::from_lookup`]. Any key
//! that is missing falls back to the default below.

use log::{info, warn, LevelFilter};

pub const SUPABASE_URL_KEY: &str = "SCHOLARHUB_SUPABASE_URL";
pub const ANON_KEY_KEY: &str = "SCHOLARHUB_SUPABASE_ANON_KEY";
pub const TABLE_KEY: &str = "SCHOLARHUB_TABLE";
pub const BASE_PATH_KEY: &str = "SCHOLARHUB_BASE_PATH";
pub const LOG_LEVEL_KEY: &str = "SCHOLARHUB_LOG_LEVEL";

const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";
const DEFAULT_TABLE: &str = "scholarships";
const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    /// Public anon key sent as `apikey` on every request.
    pub anon_key: String,
    /// Remote table holding the listings.
    pub table: String,
    /// Path the pages are served under; always starts and ends with `/`.
    pub base_path: String,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let load = |key: &str, default: &str| -> String {
            match lookup(key).map(|v| v.trim().to_string()) {
                Some(value) if !value.is_empty() => value,
                _ => {
                    info!("{key} not set, using default: {default}");
                    default.to_string()
                }
            }
        };

        let anon_key = lookup(ANON_KEY_KEY).unwrap_or_default().trim().to_string();
        if anon_key.is_empty() {
            warn!("{ANON_KEY_KEY} not set, remote calls will be rejected");
        }

        let log_level = load(LOG_LEVEL_KEY, DEFAULT_LOG_LEVEL)
            .parse()
            .unwrap_or_else(|e| {
                warn!("Invalid {LOG_LEVEL_KEY} value: {e}");
                LevelFilter::Info
            });

        Self {
            supabase_url: load(SUPABASE_URL_KEY, DEFAULT_SUPABASE_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key,
            table: load(TABLE_KEY, DEFAULT_TABLE),
            base_path: normalize_base_path(&load(BASE_PATH_KEY, DEFAULT_BASE_PATH)),
            log_level,
        }
    }

    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1/{}", self.supabase_url, self.table)
    }

    pub fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.supabase_url, endpoint)
    }
}

fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
