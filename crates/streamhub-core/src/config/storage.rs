//! Media storage configuration.

use serde::{Deserialize, Serialize};

/// Media storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored media files.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// Public URL path prefix under which stored media is served.
    #[serde(default = "default_public_base_path")]
    pub public_base_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload(),
            public_base_path: default_public_base_path(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_max_upload() -> u64 {
    // 512 MiB
    512 * 1024 * 1024
}

fn default_public_base_path() -> String {
    "/media".to_string()
}
