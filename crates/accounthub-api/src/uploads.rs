//! Upload storage for registration and profile images.
//!
//! Stored references are relative paths like `image/<millis>-<name>` or
//! `document/<millis>-<name>`, rooted at the configured upload directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use axum::body::Bytes;
use chrono::Utc;
use tracing::warn;

use accounthub_core::AppResult;
use accounthub_core::error::AppError;

/// What is being uploaded; decides the subdirectory and the accepted
/// content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Document,
}

impl UploadKind {
    pub fn subdir(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
        }
    }

    /// Whether a multipart part's content type is acceptable for this kind.
    pub fn accepts(&self, content_type: &str) -> bool {
        match self {
            Self::Image => matches!(content_type, "image/jpeg" | "image/png"),
            Self::Document => matches!(
                content_type,
                "application/msword"
                    | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                    | "application/pdf"
            ),
        }
    }
}

/// Persists upload bytes and resolves stored references back to files.
#[async_trait]
pub trait UploadStore: Send + Sync + 'static {
    /// Store the bytes and return the reference to persist on the user.
    async fn save(&self, kind: UploadKind, original_name: &str, bytes: Bytes)
    -> AppResult<String>;

    /// Remove a previously stored reference. Best effort; failures are
    /// logged, not surfaced.
    async fn delete(&self, reference: &str);
}

/// Filesystem-backed upload store.
pub struct LocalUploadStore {
    root: PathBuf,
}

impl LocalUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn target_path(&self, reference: &str) -> PathBuf {
        self.root.join(reference)
    }
}

#[async_trait]
impl UploadStore for LocalUploadStore {
    async fn save(
        &self,
        kind: UploadKind,
        original_name: &str,
        bytes: Bytes,
    ) -> AppResult<String> {
        let name = sanitize_file_name(original_name);
        let reference = format!(
            "{}/{}-{}",
            kind.subdir(),
            Utc::now().timestamp_millis(),
            name
        );

        let path = self.target_path(&reference);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::internal(format!("Upload directory unavailable: {e}")))?;
        }
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| AppError::internal(format!("Upload write failed: {e}")))?;

        Ok(reference)
    }

    async fn delete(&self, reference: &str) {
        let path = self.target_path(reference);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            warn!(reference, error = %e, "Failed to remove stored upload");
        }
    }
}

/// Keep only the final path component and replace anything outside a
/// conservative character set.
fn sanitize_file_name(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("photo of me.png"), "photo_of_me.png");
        assert_eq!(sanitize_file_name(""), "upload");
    }

    #[test]
    fn test_kind_accepts() {
        assert!(UploadKind::Image.accepts("image/png"));
        assert!(!UploadKind::Image.accepts("image/gif"));
        assert!(UploadKind::Document.accepts("application/pdf"));
        assert!(!UploadKind::Document.accepts("text/plain"));
    }

    #[tokio::test]
    async fn test_save_and_delete_roundtrip() {
        let dir = std::env::temp_dir().join(format!("accounthub-uploads-{}", uuid::Uuid::new_v4()));
        let store = LocalUploadStore::new(&dir);

        let reference = store
            .save(UploadKind::Image, "avatar.png", Bytes::from_static(b"png-bytes"))
            .await
            .unwrap();
        assert!(reference.starts_with("image/"));
        assert!(reference.ends_with("-avatar.png"));

        let on_disk = dir.join(&reference);
        assert_eq!(tokio::fs::read(&on_disk).await.unwrap(), b"png-bytes");

        store.delete(&reference).await;
        assert!(!on_disk.exists());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
