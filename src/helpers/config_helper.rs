use crate::config::constants::{API_KEY_ENV, DEFAULT_BASE_URL};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_api_key_env() -> Option<String> {
        Some(API_KEY_ENV.to_string())
    }
}
