// src/config/consts.rs

// Dataset locations (relative to the working directory unless overridden)
pub const DEFAULT_DEPUTES: &str = "data/deputes.json";
pub const DEFAULT_SENATEURS: &str = "data/senateurs.json";
pub const DEFAULT_ROOT: &str = ".";

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORE_FILE: &str = ".store/state.txt";
pub const LOG_FILE: &str = ".store/debug.log";
pub const BEST_STREAK_KEY: &str = "polidle.best_streak";

// Config file
pub const CONFIG_FILE: &str = "polidle.cfg";

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "polidle/0.1";

// Generated party colours
pub const HASH_SATURATION: u8 = 55;
pub const HASH_LIGHTNESS: u8 = 50;

// Keyboard shortcuts cover choices 1..=9
pub const MAX_SHORTCUTS: usize = 9;

// GUI
pub const PHOTO_SIZE: f32 = 240.0;
pub const WINDOW_W: f32 = 900.0;
pub const WINDOW_H: f32 = 720.0;
