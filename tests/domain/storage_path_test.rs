use docchat::domain::{FileId, StoragePath};

#[test]
fn given_file_id_and_extension_when_creating_path_then_format_is_uuid_dot_extension() {
    let file_id = FileId::new();
    let path = StoragePath::new(&file_id, "txt");

    let expected = format!("{}.txt", file_id.as_uuid());
    assert_eq!(path.as_str(), expected);
}

#[test]
fn given_two_different_files_when_creating_paths_then_paths_differ() {
    let path_a = StoragePath::new(&FileId::new(), "pdf");
    let path_b = StoragePath::new(&FileId::new(), "pdf");

    assert_ne!(path_a, path_b);
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::new(&FileId::new(), "md");

    assert_eq!(format!("{}", path), path.as_str());
}
