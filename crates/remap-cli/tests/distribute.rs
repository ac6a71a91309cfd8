//! Integration tests for leaf-directory file distribution.

use std::fs;
use std::path::Path;

use remap_cli::distribute::{DistributeOptions, MANIFEST_FILE, distribute};

fn manifest(dir: &Path) -> String {
    fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap()
}

#[test]
fn test_distribute_copies_into_every_leaf() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir_all(base.path().join("item1")).unwrap();
    fs::create_dir_all(base.path().join("batch/item2")).unwrap();

    let source = tempfile::tempdir().unwrap();
    let file = source.path().join("license.txt");
    fs::write(&file, "license text").unwrap();

    let report = distribute(&file, base.path(), &DistributeOptions::default()).unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.failed, 0);
    for leaf in ["item1", "batch/item2"] {
        let copied = base.path().join(leaf).join("license.txt");
        assert_eq!(fs::read_to_string(copied).unwrap(), "license text");
        assert_eq!(manifest(&base.path().join(leaf)), "license.txt\n");
    }
    // The intermediate directory is not a leaf and gets nothing.
    assert!(!base.path().join("batch/license.txt").exists());
}

#[test]
fn test_distribute_appends_metadata_columns() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir_all(base.path().join("item")).unwrap();

    let source = tempfile::tempdir().unwrap();
    let file = source.path().join("readme.txt");
    fs::write(&file, "hello").unwrap();

    let options = DistributeOptions {
        metadata: vec!["bundle:TEXT".to_string(), "en".to_string()],
        replace_spaces: false,
    };
    distribute(&file, base.path(), &options).unwrap();

    assert_eq!(
        manifest(&base.path().join("item")),
        "readme.txt\tbundle:TEXT\ten\n"
    );
}

#[test]
fn test_distribute_replaces_spaces_when_asked() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir_all(base.path().join("item")).unwrap();

    let source = tempfile::tempdir().unwrap();
    let file = source.path().join("my file.txt");
    fs::write(&file, "x").unwrap();

    let options = DistributeOptions {
        metadata: Vec::new(),
        replace_spaces: true,
    };
    distribute(&file, base.path(), &options).unwrap();

    assert!(base.path().join("item/my_file.txt").exists());
    assert_eq!(manifest(&base.path().join("item")), "my_file.txt\n");
}

#[test]
fn test_existing_target_is_skipped_without_manifest_growth() {
    let base = tempfile::tempdir().unwrap();
    fs::create_dir_all(base.path().join("item")).unwrap();

    let source = tempfile::tempdir().unwrap();
    let file = source.path().join("data.txt");
    fs::write(&file, "x").unwrap();

    let first = distribute(&file, base.path(), &DistributeOptions::default()).unwrap();
    let second = distribute(&file, base.path(), &DistributeOptions::default()).unwrap();

    assert_eq!(first.copied, 1);
    assert_eq!(second.copied, 0);
    assert_eq!(second.skipped, 1);
    assert_eq!(manifest(&base.path().join("item")), "data.txt\n");
}

#[test]
fn test_missing_base_directory_fails() {
    let source = tempfile::tempdir().unwrap();
    let file = source.path().join("data.txt");
    fs::write(&file, "x").unwrap();

    let error = distribute(
        &file,
        Path::new("/nonexistent/base"),
        &DistributeOptions::default(),
    )
    .unwrap_err();

    assert!(error.to_string().contains("not a directory"));
}
