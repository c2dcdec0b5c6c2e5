//! 対話セッションの結合テスト
//!
//! 実ファイルのストアと、メモリ上の入出力で App を動かす

use std::fs;
use tempfile::TempDir;
use todo_app::error::StoreError;
use todo_app::store::{self, CsvStore, TodoStore};
use todo_app::{App, Importance, Status, Todo, TodoError};

fn run(store: CsvStore, input: &str) -> (todo_app::Result<()>, String, Vec<Todo>) {
    let mut output = Vec::new();
    let (result, todos) = {
        let mut app = App::new(store, input.as_bytes(), &mut output).unwrap();
        let result = app.run();
        (result, app.todos().to_vec())
    };
    (result, String::from_utf8(output).unwrap(), todos)
}

#[test]
fn test_fresh_store_new_todo_is_autosaved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data").join("todo.csv");
    let store = CsvStore::new(&path);

    store.ensure_file().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Id,Importance,Status,Description\n"
    );

    let (result, _, todos) = run(store, "new\nTest item\nexit\n");
    assert!(result.is_ok());
    assert_eq!(todos.len(), 1);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec!["Id,Importance,Status,Description", "1,Medium,Created,Test item"]
    );
}

#[test]
fn test_list_bogus_exit_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todo.csv");
    store::ensure_file(&path).unwrap();

    let (result, output, _) = run(CsvStore::new(&path), "list\nbogus\nexit\n");

    assert!(result.is_ok());
    let list_at = output.find("ID  Status  Importance  Details").unwrap();
    let error_at = output.find("Error: unknown command: bogus").unwrap();
    let goodbye_at = output.find("Goodbye!").unwrap();
    assert!(list_at < error_at && error_at < goodbye_at);
}

#[test]
fn test_session_continues_numbering_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todo.csv");
    fs::write(
        &path,
        "Id,Importance,Status,Description\n1,Medium,Created,Buy milk\n2,Urgent,Done,Finish report\n",
    )
    .unwrap();

    let (result, output, todos) = run(CsvStore::new(&path), "new\nCall mom\nlist\nexit\n");

    assert!(result.is_ok());
    assert_eq!(todos[2].id, 3);
    assert!(output.contains("3   Created  Medium      Call mom"));

    let reloaded = store::load(&path).unwrap();
    assert_eq!(reloaded, todos);
    assert_eq!(reloaded[1].importance, Importance::Urgent);
    assert_eq!(reloaded[1].status, Status::Done);
}

#[test]
fn test_unsaved_changes_are_not_written_on_exit() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todo.csv");
    store::ensure_file(&path).unwrap();

    let (_, _, _) = run(CsvStore::new(&path), "list\nexit\n");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Id,Importance,Status,Description\n"
    );
}

#[test]
fn test_malformed_store_aborts_startup() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todo.csv");
    fs::write(
        &path,
        "Id,Importance,Status,Description\n1,Medium,Created,Buy milk\n2,Huge,Created,Oops\n",
    )
    .unwrap();

    let mut output = Vec::new();
    let result = App::new(CsvStore::new(&path), "exit\n".as_bytes(), &mut output);

    match result {
        Err(TodoError::Store(StoreError::Parse { line, .. })) => assert_eq!(line, 3),
        Err(other) => panic!("Expected Parse error, got {:?}", other),
        Ok(_) => panic!("Expected load to fail"),
    }
}

#[test]
fn test_end_of_input_ends_session_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("todo.csv");
    store::ensure_file(&path).unwrap();

    let (result, output, _) = run(CsvStore::new(&path), "help\n");

    assert!(output.contains("Available commands:"));
    let error = result.unwrap_err();
    assert!(error.is_fatal());
    assert_eq!(error.to_string(), "failed to read input: end of input");
}
