use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the `todo` binary isolated inside `dir`, with its file in `dir`.
fn todo(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .arg("--file")
        .arg(dir.join("todos.json"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("TODO_BACKEND")
        .env_remove("TODO_FILE")
        .env_remove("TODO_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_add_list_delete_persists_between_runs() {
    let temp = TempDir::new().unwrap();

    let added = todo(temp.path(), &["add", "--title", "buy milk"]);
    assert!(added.status.success());
    assert_eq!(stdout(&added), "Added Todo: ID=1, Title=buy milk\n");

    let added = todo(temp.path(), &["add", "--title", "walk dog"]);
    assert_eq!(stdout(&added), "Added Todo: ID=2, Title=walk dog\n");

    let deleted = todo(temp.path(), &["delete", "1"]);
    assert!(deleted.status.success());
    assert_eq!(stdout(&deleted), "Deleted Todo with ID 1\n");

    let listed = todo(temp.path(), &["list"]);
    assert!(listed.status.success());
    assert_eq!(
        stdout(&listed),
        "All Todos:\nID=2, Title=walk dog, Status=Not Done\n"
    );
}

#[test]
fn test_single_dash_title_is_accepted() {
    let temp = TempDir::new().unwrap();

    let added = todo(temp.path(), &["add", "-title", "buy milk"]);
    assert!(added.status.success());
    assert_eq!(stdout(&added), "Added Todo: ID=1, Title=buy milk\n");

    let added = todo(temp.path(), &["add", "-title=buy"]);
    assert!(added.status.success());
    assert_eq!(stdout(&added), "Added Todo: ID=2, Title=buy\n");

    let listed = todo(temp.path(), &["list"]);
    assert_eq!(
        stdout(&listed),
        "All Todos:\n\
         ID=1, Title=buy milk, Status=Not Done\n\
         ID=2, Title=buy, Status=Not Done\n"
    );
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();

    let listed = todo(temp.path(), &["list"]);
    assert!(listed.status.success());
    assert_eq!(stdout(&listed), "No todos found.\n");
}

#[test]
fn test_delete_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    let deleted = todo(temp.path(), &["delete", "99"]);
    assert!(!deleted.status.success());
    assert!(stderr(&deleted).contains("todo not found"));
    assert!(stdout(&deleted).is_empty());
}

#[test]
fn test_add_without_title_is_usage_error() {
    let temp = TempDir::new().unwrap();

    let output = todo(temp.path(), &["add"]);
    assert_eq!(output.status.code(), Some(2));

    let output = todo(temp.path(), &["add", "--title", ""]);
    assert_eq!(output.status.code(), Some(2));

    assert!(!temp.path().join("todos.json").exists());
}

#[test]
fn test_delete_non_integer_is_usage_error() {
    let temp = TempDir::new().unwrap();

    let output = todo(temp.path(), &["delete", "first"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();

    let output = todo(temp.path(), &[]);
    assert!(!output.status.success());
}

#[test]
fn test_corrupt_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todos.json"), "not json").unwrap();

    let output = todo(temp.path(), &["list"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error opening todo file"));
}

#[test]
fn test_memory_backend_does_not_persist() {
    let temp = TempDir::new().unwrap();

    let added = todo(temp.path(), &["--backend", "memory", "add", "-t", "ephemeral"]);
    assert!(added.status.success());
    assert_eq!(stdout(&added), "Added Todo: ID=1, Title=ephemeral\n");
    assert!(!temp.path().join("todos.json").exists());

    let listed = todo(temp.path(), &["--backend", "memory", "list"]);
    assert_eq!(stdout(&listed), "No todos found.\n");
}

#[test]
fn test_local_config_selects_backend() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("todo.toml"),
        "[storage]\nbackend = \"memory\"\n",
    )
    .unwrap();

    let added = todo(temp.path(), &["add", "-t", "from config"]);
    assert!(added.status.success());
    assert!(!temp.path().join("todos.json").exists());
}
