// =============================================================================
// Application Identity
// =============================================================================

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".condsql";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "condsql.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "CONDSQL_CONFIG";

// =============================================================================
// Environment Variables - Logging
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "CONDSQL_LOG";

/// Log filter used when neither `CONDSQL_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Environment Variables - Limits
// =============================================================================

/// Environment variable for maximum condition JSON size in bytes
pub const ENV_MAX_BYTES: &str = "CONDSQL_MAX_BYTES";

/// Environment variable for maximum condition tree depth
pub const ENV_MAX_DEPTH: &str = "CONDSQL_MAX_DEPTH";

// =============================================================================
// Environment Variables - Output
// =============================================================================

/// Environment variable to prefix output with the WHERE keyword
pub const ENV_WHERE: &str = "CONDSQL_WHERE";

/// Environment variable to keep padding spaces in output
pub const ENV_NO_TRIM: &str = "CONDSQL_NO_TRIM";

// =============================================================================
// Output Defaults
// =============================================================================

/// Default for prefixing output with `WHERE`
pub const DEFAULT_WHERE_KEYWORD: bool = false;

/// Default for trimming padding spaces from output
pub const DEFAULT_TRIM: bool = true;
