pub const DEFAULT_BASE_URL: &str = "http://localhost:1337/api/bulk-replace";
pub const API_KEY_ENV: &str = "BULK_REPLACE_API_KEY";

pub const CONFIG_DIR_NAME: &str = "bulk-replace";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Separator between entry id and field name in `--include`/`--exclude`.
pub const FIELD_REF_SEPARATOR: char = ':';
