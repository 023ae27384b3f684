// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "cava-tools/0.2";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';

// Summary data
pub const MISSING_SENTINEL: &str = "-9999999";
pub const MODIFIED_CUTOFF: &str = "2013";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_CONTENTS_SUBDIR: &str = "contents";
pub const DEFAULT_PROFILE_SUBDIR: &str = "profile";
pub const DEFAULT_DISCRETE_SUBDIR: &str = "discrete";
pub const DEFAULT_FILE: &str = "all";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
