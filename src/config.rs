use std::env;

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Server settings resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Page size used when a listing request omits `PageSize`.
    pub default_page_size: usize,
    /// Directory where uploaded product images are stored.
    pub media_root: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let default_page_size = env::var("DEFAULT_PAGE_SIZE")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());

        Self {
            default_page_size,
            media_root,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            media_root: "media".to_string(),
        }
    }
}
