//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default geocoding provider
pub const DEFAULT_PROVIDER: &str = "openstreetmap";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "geocoder";
