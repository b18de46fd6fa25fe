//! Integration tests for upload storage and the passthrough processor
//!
//! Run with:
//! ```bash
//! cargo test -p spatial-core --test upload_storage
//! ```

use spatial_core::{CoreError, ImageProcessor, PassthroughProcessor, Upload, UploadStore};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_traversal_names_stay_inside_upload_dir() {
    let temp = TempDir::new().unwrap();
    let store = UploadStore::new(temp.path().join("uploads"));

    let stored = store.save("../../escape.png", b"data").await.unwrap();

    assert_eq!(stored.path.parent(), Some(store.dir()));
    assert!(stored.stored_name.ends_with("-escape.png"));
    assert!(!temp.path().join("escape.png").exists());
}

#[tokio::test]
async fn test_concurrent_uploads_of_same_name_do_not_clobber() {
    let temp = TempDir::new().unwrap();
    let processor: Arc<dyn ImageProcessor> = Arc::new(PassthroughProcessor::new(
        UploadStore::new(temp.path()),
        "/uploads",
    ));

    let mut handles = Vec::new();
    for i in 0..8u8 {
        let processor = Arc::clone(&processor);
        handles.push(tokio::spawn(async move {
            let upload = Upload::new("same.png", None, vec![i; 16]).unwrap();
            processor.process(upload).await
        }));
    }

    let mut names = Vec::new();
    for handle in handles {
        names.push(handle.await.unwrap().unwrap().stored_name);
    }
    names.sort();
    names.dedup();

    assert_eq!(names.len(), 8);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 8);
}

#[tokio::test]
async fn test_unwritable_dir_surfaces_directory_error() {
    let temp = TempDir::new().unwrap();
    let file_in_the_way = temp.path().join("not-a-dir");
    std::fs::write(&file_in_the_way, b"x").unwrap();

    let processor = PassthroughProcessor::new(UploadStore::new(&file_in_the_way), "/uploads");
    let upload = Upload::new("a.png", None, b"a".to_vec()).unwrap();

    let err = processor.process(upload).await.unwrap_err();
    assert!(matches!(err, CoreError::DirectoryCreate { .. }));
    assert!(!err.is_client_error());
}
