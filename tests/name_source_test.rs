use decoy_gen::core::error::AppError;
use decoy_gen::services::names::{FakerNameSource, FileNameSource, NameSource};

#[tokio::test]
async fn test_file_source_loads_and_filters() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.txt");
    let last_path = dir.path().join("last.txt");

    std::fs::write(&first_path, "# decoy first names\nAnn\n\n  Bea  \n").unwrap();
    std::fs::write(&last_path, "Lee\r\nCho\r\n# trailing comment\n").unwrap();

    let source = FileNameSource::new(&first_path, &last_path);
    let (first, last) = source.load().await.unwrap();

    assert_eq!(first.entries(), &["Ann", "Bea"]);
    assert_eq!(last.entries(), &["Lee", "Cho"]);
}

#[tokio::test]
async fn test_file_source_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.txt");
    std::fs::write(&first_path, "Ann\n").unwrap();

    let source = FileNameSource::new(&first_path, dir.path().join("nope.txt"));
    let err = source.load().await.unwrap_err();

    assert!(matches!(err, AppError::NameSource { .. }));
    assert!(err.to_string().contains("nope.txt"));
}

#[tokio::test]
async fn test_file_source_rejects_list_that_filters_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let first_path = dir.path().join("first.txt");
    let last_path = dir.path().join("last.txt");

    std::fs::write(&first_path, "# only comments\n\n").unwrap();
    std::fs::write(&last_path, "Lee\n").unwrap();

    let source = FileNameSource::new(&first_path, &last_path);
    let err = source.load().await.unwrap_err();

    assert!(matches!(err, AppError::EmptyNameList { which: "first" }));
}

#[tokio::test]
async fn test_faker_source_yields_non_empty_pools() {
    let source = FakerNameSource::new(25);
    let (first, last) = source.load().await.unwrap();

    assert_eq!(first.len(), 25);
    assert_eq!(last.len(), 25);
    assert!(first.entries().iter().all(|n| !n.is_empty()));
    assert!(last.entries().iter().all(|n| !n.is_empty()));
}

#[tokio::test]
async fn test_faker_source_with_zero_pool_is_an_error() {
    let source = FakerNameSource::new(0);
    let err = source.load().await.unwrap_err();
    assert!(matches!(err, AppError::EmptyNameList { which: "first" }));
}
