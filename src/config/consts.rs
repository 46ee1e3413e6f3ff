// src/config/consts.rs

// Net config
pub const DEFAULT_ENDPOINT: &str = "https://matchstats.sea.ffesports.com/api/match_stats/search";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// App dir (config + debug log)
pub const APP_DIR: &str = ".matchstats";
pub const CONFIG_FILE: &str = "config";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// GUI
pub const DEFAULT_WINDOW_W: u32 = 900;
pub const DEFAULT_WINDOW_H: u32 = 640;
