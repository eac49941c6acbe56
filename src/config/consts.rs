// src/config/consts.rs

// Local store (logs)
pub const LOG_FILE: &str = ".store/debug.log";

// Data sources
pub const DEFAULT_DATA_DIR: &str = "data";
pub const ROSTER_STEM: &str = "roster";
pub const STATS_STEM: &str = "stats";

// Cache
pub const CACHE_TTL_SECS: u64 = 3600;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "players";

// Role rule thresholds
pub const HIGH_EFF_ATTACK_PER_SET: f64 = 5.0;   // strictly greater
pub const HIGH_EFF_SUCCESS_PCT: f64 = 40.0;
pub const ELITE_BLOCK_PER_SET: f64 = 1.0;
pub const LIBERO_RECEPTION_PCT: f64 = 65.0;
pub const SERVING_THREAT_ACES_PER_SET: f64 = 0.5;

// Season catalogue: (id, label), newest first
pub const SEASONS: &[(&str, &str)] = &[
    ("20", "Enterprise League Year 20 (2025-2026)"),
    ("19", "Enterprise League Year 19 (2024-2025)"),
    ("18", "Enterprise League Year 18 (2023-2024)"),
    ("17", "Enterprise League Year 17 (2022-2023)"),
];
pub const DEFAULT_SEASON_INDEX: usize = 3;
