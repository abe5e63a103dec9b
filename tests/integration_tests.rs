use std::fs;

use inidoc::{from_str, to_string, Error, ExportOptions, IniDocument};

#[test]
fn test_parse_edit_render() {
    let mut doc = from_str("title = My App\n\n[server]\nhost = localhost\nport = 8080");

    doc.get_section("server").get_field("port").set("9090");
    doc.add_field("version", "2.0");
    doc.create_section("auth").add_field("user", "admin");

    assert_eq!(
        to_string(&doc),
        "title = My App\nversion = 2.0\n\n\
         [server]\nhost = localhost\nport = 9090\n\n\
         [auth]\nuser = admin"
    );
}

#[test]
fn test_lookups_create_what_is_missing() {
    let mut doc = IniDocument::default();

    let timeout = doc
        .get_section("net")
        .get_field_or("timeout", "30")
        .get()
        .to_string();
    assert_eq!(timeout, "30");

    // The lookup materialized both the section and the field.
    assert_eq!(to_string(&doc), "[net]\ntimeout = 30");
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");

    let mut original = IniDocument::new(&path);
    original.add_field("title", "demo");
    let server = original.create_section("server");
    server.add_field("host", "localhost");
    server.add_field("port", "8080");
    original.write().unwrap();

    let reloaded = IniDocument::new(&path).parse().unwrap();
    assert_eq!(reloaded, original);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "title = demo\n\n[server]\nhost = localhost\nport = 8080"
    );
}

#[test]
fn test_parse_missing_file_leaves_document_unchanged() {
    let dir = tempfile::tempdir().unwrap();

    let mut doc = IniDocument::new(dir.path().join("absent.ini"));
    doc.add_field("seeded", "yes");

    let doc = doc.parse().unwrap();
    assert_eq!(doc.field("seeded").map(|f| f.get()), Some("yes"));
    assert_eq!(doc.sections().count(), 0);
}

#[test]
fn test_parse_merges_file_into_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(&path, "from_file = 1\n[server]\nport = 8080").unwrap();

    let mut doc = IniDocument::new(&path);
    doc.add_field("in_memory", "1");
    let doc = doc.parse().unwrap();

    assert_eq!(doc.field("in_memory").map(|f| f.get()), Some("1"));
    assert_eq!(doc.field("from_file").map(|f| f.get()), Some("1"));
    assert!(doc.section("server").is_some());
}

#[test]
fn test_parse_unreadable_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();

    // A directory exists but cannot be read as text.
    let err = IniDocument::new(dir.path()).parse().unwrap_err();
    match err {
        Error::Read { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("expected a read error, got {other:?}"),
    }
}

#[test]
fn test_write_to_leaves_stored_path_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let stored = dir.path().join("primary.ini");
    let copy = dir.path().join("backup.ini");

    let mut doc = IniDocument::new(&stored);
    doc.add_field("k", "v");
    doc.write_to(&copy).unwrap();

    assert_eq!(doc.path(), stored);
    assert!(!stored.exists());
    assert_eq!(fs::read_to_string(&copy).unwrap(), "k = v");
}

#[test]
fn test_write_to_unwritable_path_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("no_such_dir").join("app.ini");

    let mut doc = IniDocument::default();
    doc.add_field("k", "v");

    let err = doc.write_to(&bad).unwrap_err();
    match err {
        Error::Write { path, .. } => assert_eq!(path, bad),
        other => panic!("expected a write error, got {other:?}"),
    }
}

#[test]
fn test_write_with_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compact.ini");

    let doc = from_str("a = 1\n[s]\nb = 2");
    let compact = ExportOptions::new()
        .with_key_value_whitespace(false)
        .with_newline_after_section(false);
    doc.write_to_with_options(&path, compact).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a=1\n[s]\nb=2");
}

#[test]
fn test_first_run_bootstrap_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");

    // First run: no file yet, defaults get seeded and persisted.
    let mut config = IniDocument::new(&path).parse().unwrap();
    assert!(config.is_empty());
    config.get_section("server").get_field_or("port", "8080");
    config.write().unwrap();

    // Second run: the stored value wins over the default.
    let mut config = IniDocument::new(&path).parse().unwrap();
    let port = config.get_section("server").get_field_or("port", "9000");
    assert_eq!(port.get(), "8080");
}

#[test]
fn test_from_reader_on_file_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(&path, "[db]\nurl = postgres://localhost/app").unwrap();

    let doc = inidoc::from_reader(fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(
        doc.section("db").and_then(|s| s.field("url")).map(|f| f.get()),
        Some("postgres://localhost/app")
    );
}

#[test]
fn test_serde_export_shape() {
    let doc = from_str("title = demo\n\n[server]\nhost = localhost\nport = 8080");

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "title": "demo",
            "server": { "host": "localhost", "port": "8080" }
        })
    );
}

#[test]
fn test_serde_export_preserves_order() {
    let mut doc = IniDocument::default();
    doc.add_field("zebra", "1");
    doc.add_field("apple", "2");
    doc.create_section("first").add_field("k", "v");
    doc.create_section("second");

    // Streaming serialization emits entries in document order.
    assert_eq!(
        serde_json::to_string(&doc).unwrap(),
        r#"{"zebra":"1","apple":"2","first":{"k":"v"},"second":{}}"#
    );
}

#[cfg(feature = "async")]
mod async_io {
    use super::*;

    #[tokio::test]
    async fn test_async_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.ini");

        let mut original = IniDocument::new(&path);
        original.create_section("server").add_field("port", "8080");
        original.write_async().await.unwrap();

        let reloaded = IniDocument::new(&path).parse_async().await.unwrap();
        assert_eq!(reloaded, original);
    }

    #[tokio::test]
    async fn test_async_parse_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let doc = IniDocument::new(dir.path().join("absent.ini"))
            .parse_async()
            .await
            .unwrap();
        assert!(doc.is_empty());
    }

    #[tokio::test]
    async fn test_async_write_to_with_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compact.ini");

        let doc = from_str("[s]\nk = v");
        let compact = ExportOptions::new().with_key_value_whitespace(false);
        doc.write_to_with_options_async(&path, compact).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[s]\nk=v");
    }
}
