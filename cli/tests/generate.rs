use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn restdoc(args: &[&str], root: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_restdoc"))
        .args(args)
        .current_dir(root)
        .env_remove("RUST_LOG")
        .env_remove("RESTDOC_API_VERSION")
        .env_remove("RESTDOC_AUTHOR")
        .env_remove("RESTDOC_PRODUCT")
        .output()
        .unwrap()
}

fn write_message(root: &Path) {
    let rest = root.join("jsonFiles").join("rest");
    fs::create_dir_all(&rest).unwrap();
    fs::write(
        rest.join("message.json"),
        r#"{"name": "message", "allowPatch": true, "restPath": {"/me/messages/{id}": true},
            "properties": [{"name": "isRead", "dataType": "Boolean"}]}"#,
    )
    .unwrap();
    fs::write(rest.join("zz-broken.json"), "{ nope").unwrap();
}

#[test]
fn test_generate_with_default_layout() {
    let dir = tempfile::tempdir().unwrap();
    write_message(dir.path());

    let out = restdoc(&["generate", "--author", "docs-team"], dir.path());
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().next(), Some("*** OK. Processed 1 input files"));
    assert!(stdout.contains("*** update pages: 1"));

    let markdown = dir.path().join("markdown");
    let page = fs::read_to_string(markdown.join("resources").join("message.md")).unwrap();
    assert!(page.contains("\nauthor: docs-team\n"));
    assert!(markdown.join("api").join("message-update.md").is_file());
    assert!(markdown.join("resources").join("service-root.md").is_file());
    assert!(markdown.join("resources").join("enums.md").is_file());
}

#[test]
fn test_clean_removes_stale_pages() {
    let dir = tempfile::tempdir().unwrap();
    write_message(dir.path());
    let stale = dir.path().join("markdown").join("api").join("stale.md");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "old").unwrap();

    let out = restdoc(&["generate", "--clean"], dir.path());
    assert!(out.status.success());
    assert!(!stale.exists());
}

#[test]
fn test_missing_input_exits_with_code_two() {
    let dir = tempfile::tempdir().unwrap();
    let out = restdoc(&["-q", "generate"], dir.path());
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Input folder not found"));
}

#[test]
fn test_bad_settings_exit_with_code_three() {
    let dir = tempfile::tempdir().unwrap();
    write_message(dir.path());
    fs::write(dir.path().join("settings.yml"), "server_base: not-a-url\n").unwrap();

    let out = restdoc(&["generate", "--settings", "settings.yml"], dir.path());
    assert_eq!(out.status.code(), Some(3));
}
