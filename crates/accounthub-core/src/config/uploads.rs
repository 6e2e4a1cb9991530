//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// File upload configuration for registration images and documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Root directory for stored uploads. Image files land under
    /// `<root>/image`, documents under `<root>/document`.
    #[serde(default = "default_root")]
    pub root: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_root() -> String {
    "public".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}
