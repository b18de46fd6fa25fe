//! Upload storage on the local filesystem
//!
//! Files are written as `<unix-millis>-<sanitized name>` so concurrent
//! uploads of the same file never overwrite each other.

use crate::error::CoreError;
use chrono::Utc;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Longest sanitized filename kept, in characters
const MAX_NAME_LEN: usize = 128;

/// Give up after this many name collisions within one millisecond
const MAX_COLLISION_ATTEMPTS: u32 = 1000;

/// A file written to the upload directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUpload {
    /// Name as sent by the client
    pub original_name: String,
    /// Name on disk (unique within the directory)
    pub stored_name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// Reduce a client-supplied filename to a safe single path component
///
/// Directory components and leading dots are dropped, anything outside
/// `[A-Za-z0-9._-]` becomes `_`. An empty result becomes `upload`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned: String = cleaned
        .trim_start_matches('.')
        .chars()
        .take(MAX_NAME_LEN)
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Build the on-disk name for an attempt (1-based)
fn stored_name(stamp: i64, sanitized: &str, attempt: u32) -> String {
    if attempt <= 1 {
        return format!("{}-{}", stamp, sanitized);
    }

    match sanitized.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            format!("{}-{}-{}.{}", stamp, stem, attempt, ext)
        }
        _ => format!("{}-{}-{}", stamp, sanitized, attempt),
    }
}

/// Writes uploads into a single directory
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<(), CoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| CoreError::DirectoryCreate {
                path: self.dir.clone(),
                source,
            })
    }

    /// Write an upload and return where it landed
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredUpload, CoreError> {
        self.save_at(Utc::now().timestamp_millis(), original_name, bytes)
            .await
    }

    async fn save_at(
        &self,
        stamp: i64,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<StoredUpload, CoreError> {
        self.ensure_dir().await?;

        let sanitized = sanitize_filename(original_name);

        for attempt in 1..=MAX_COLLISION_ATTEMPTS {
            let name = stored_name(stamp, &sanitized, attempt);
            let path = self.dir.join(&name);

            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(source) => return Err(CoreError::FileWrite { path, source }),
            };

            let write = async {
                file.write_all(bytes).await?;
                file.flush().await
            };
            write.await.map_err(|source| CoreError::FileWrite {
                path: path.clone(),
                source,
            })?;

            debug!(path = %path.display(), size = bytes.len(), "Stored upload");

            return Ok(StoredUpload {
                original_name: original_name.to_string(),
                stored_name: name,
                path,
                size: bytes.len() as u64,
            });
        }

        Err(CoreError::FileWrite {
            path: self.dir.join(&sanitized),
            source: std::io::Error::new(ErrorKind::AlreadyExists, "too many name collisions"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_keeps_safe_names() {
        assert_eq!(sanitize_filename("Alpine_Dream-01.png"), "Alpine_Dream-01.png");
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename(r"C:\Users\me\photo.jpg"), "photo.jpg");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_chars() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("café.png"), "caf_.png");
    }

    #[test]
    fn test_sanitize_leading_dots_and_empty() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename("..."), "upload");
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("dir/"), "upload");
    }

    #[test]
    fn test_sanitize_truncates_long_names() {
        let long = "a".repeat(500);
        assert_eq!(sanitize_filename(&long).len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_stored_name_suffix_before_extension() {
        assert_eq!(stored_name(42, "cat.png", 1), "42-cat.png");
        assert_eq!(stored_name(42, "cat.png", 3), "42-cat-3.png");
        assert_eq!(stored_name(42, "README", 2), "42-README-2");
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::new(temp.path().join("nested/uploads"));

        let stored = store.save("photo.jpg", b"jpeg-bytes").await.unwrap();

        assert!(stored.stored_name.ends_with("-photo.jpg"));
        assert_eq!(stored.original_name, "photo.jpg");
        assert_eq!(stored.size, 10);
        assert_eq!(tokio::fs::read(&stored.path).await.unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_save_collision_gets_suffix() {
        let temp = TempDir::new().unwrap();
        let store = UploadStore::new(temp.path());

        let first = store.save_at(1000, "cat.png", b"one").await.unwrap();
        let second = store.save_at(1000, "cat.png", b"two").await.unwrap();

        assert_eq!(first.stored_name, "1000-cat.png");
        assert_eq!(second.stored_name, "1000-cat-2.png");
        assert_eq!(tokio::fs::read(&first.path).await.unwrap(), b"one");
        assert_eq!(tokio::fs::read(&second.path).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_ensure_dir_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let store = UploadStore::new(blocker.join("uploads"));
        let err = store.ensure_dir().await.unwrap_err();
        assert!(matches!(err, CoreError::DirectoryCreate { .. }));
    }
}
