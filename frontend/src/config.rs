//! Settings baked into the bundle at build time.
//!
//! `trunk build` runs with the project's environment, so the keys are read
//! with `option_env!` and fed to the shared settings loader.

use common::config::{
    Settings, ANON_KEY_KEY, BASE_PATH_KEY, LOG_LEVEL_KEY, SUPABASE_URL_KEY, TABLE_KEY,
};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::from_lookup(compile_time_var);
}

fn compile_time_var(key: &str) -> Option<String> {
    let value = match key {
        SUPABASE_URL_KEY => option_env!("SCHOLARHUB_SUPABASE_URL"),
        ANON_KEY_KEY => option_env!("SCHOLARHUB_SUPABASE_ANON_KEY"),
        TABLE_KEY => option_env!("SCHOLARHUB_TABLE"),
        BASE_PATH_KEY => option_env!("SCHOLARHUB_BASE_PATH"),
        LOG_LEVEL_KEY => option_env!("SCHOLARHUB_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}
