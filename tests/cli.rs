//! End-to-end tests for the todo binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Sandbox {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn todo_file(&self) -> PathBuf {
        self.dir.path().join("todo.json")
    }

    fn user_file(&self) -> PathBuf {
        self.dir.path().join("user")
    }

    fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("todo").expect("Failed to find todo binary");
        cmd.current_dir(self.dir.path())
            .env("TODO_FILE", self.todo_file())
            .env("TODO_USER_FILE", self.user_file())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args(args);
        cmd
    }
}

#[test]
fn test_no_command_prints_usage() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd(&[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Friend's Todo List"));
    assert!(!sandbox.todo_file().exists());
    assert!(!sandbox.user_file().exists());
}

#[test]
fn test_full_session() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd(&["add", "Test", "todo", "item"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo: Test todo item"));

    sandbox
        .cmd(&["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test todo item"))
        .stdout(predicate::str::contains("Pending: 1"));

    sandbox
        .cmd(&["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed todo #1"))
        .stdout(predicate::str::contains("All tasks completed"));

    sandbox
        .cmd(&["add", "Another test item"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo: Another test item"));

    sandbox
        .cmd(&["del", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted todo #1: Test todo item"));

    sandbox
        .cmd(&["--plain", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Another test item"))
        .stdout(predicate::str::contains("[1]"))
        .stdout(predicate::str::contains("Test todo item").not())
        .stdout(predicate::str::contains("Total: 1"));
}

#[test]
fn test_invalid_position_fails_without_writing() {
    let sandbox = Sandbox::new();
    sandbox.cmd(&["add", "Buy milk"]).assert().success();
    sandbox.cmd(&["add", "Walk dog"]).assert().success();
    let before = fs::read(sandbox.todo_file()).unwrap();

    sandbox
        .cmd(&["complete", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid todo number 5"));

    sandbox
        .cmd(&["del", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid todo number 0"));

    assert_eq!(fs::read(sandbox.todo_file()).unwrap(), before);
}

#[test]
fn test_blank_todo_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd(&["add", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No todo text provided"));

    sandbox
        .cmd(&["add"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No todo text provided"));

    assert!(!sandbox.todo_file().exists());
}

#[test]
fn test_empty_list() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.todo_file(), "").unwrap();

    sandbox
        .cmd(&["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("your todo list is empty"));
}

#[test]
fn test_corrupt_file_is_reported() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.todo_file(), "not json").unwrap();

    sandbox
        .cmd(&["add", "anything"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to decode todo file"));

    assert_eq!(fs::read_to_string(sandbox.todo_file()).unwrap(), "not json");
}

#[test]
fn test_stored_name_is_used() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.user_file(), "Ada\n").unwrap();
    sandbox.cmd(&["add", "Write notes"]).assert().success();

    sandbox
        .cmd(&["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada's Todos"));
}

#[test]
fn test_file_flag_wins_over_env() {
    let sandbox = Sandbox::new();
    let other = sandbox.dir.path().join("other.json");

    sandbox
        .cmd(&["--file", other.to_str().unwrap(), "add", "Elsewhere"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!sandbox.todo_file().exists());
}
