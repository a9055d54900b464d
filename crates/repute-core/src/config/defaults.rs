// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_DECAY_AFTER_DAYS: i64 = 365;
pub const DEFAULT_DECAY_MULTIPLIER: f64 = 0.5;
pub const MAX_DECAY_AFTER_DAYS: i64 = 365 * 10_000;
pub const DEFAULT_STAKE_BOOST_CEILING: f64 = 2.0;
pub const DEFAULT_STAKE_BOOST_COEFFICIENT: f64 = 0.25;
pub const DEFAULT_GIVEN_WEIGHT: f64 = 1.0;
pub const DEFAULT_RECEIVED_WEIGHT: f64 = 1.0;
pub const DEFAULT_VOUCH_BONUS: f64 = 5.0;
pub const DEFAULT_BUILDER_BONUS: f64 = 10.0;
pub const DEFAULT_ACTIVITY_PER_UNIT: f64 = 0.5;
pub const DEFAULT_ACTIVITY_CAP: f64 = 5.0;
pub const DEFAULT_MIN_SCORE: f64 = -100.0;
pub const DEFAULT_MAX_SCORE: f64 = 100.0;
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;
pub const DEFAULT_CACHE_BUCKET_SECS: u64 = 300; // 5 minutes

// --- Graph ---
pub const DEFAULT_GRAPHQL_URL: &str = "https://mainnet.intuition.sh/v1/graphql";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_OFFSET: u32 = 1_000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 250;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 4_000;
pub const DEFAULT_USER_AGENT: &str = "repute/0.1";

// --- Registry ---
pub const DEFAULT_REGISTRY_PATH: &str = "repute_registry.db";

// --- Summary ---
pub const DEFAULT_LLM_ENABLED: bool = false;
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 300;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
