use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to run tasklist against a database file inside `temp`
fn tasklist(temp: &TempDir, args: &[&str]) -> assert_cmd::Command {
    let db = temp.path().join("todos.db");
    let mut cmd = cargo::cargo_bin_cmd!("tasklist");
    cmd.current_dir(temp.path())
        .arg("--database")
        .arg(db)
        .args(args);
    cmd
}

/// Helper to initialize the schema and create the Groceries todo
fn seed_groceries(temp: &TempDir) {
    tasklist(temp, &["init"]).assert().success();

    tasklist(temp, &["todo", "new"])
        .write_stdin("Groceries\nBuy food\nMilk\nEggs\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created todo #1"));
}

#[test]
fn test_init_creates_database_file() {
    let temp = TempDir::new().unwrap();

    tasklist(&temp, &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(temp.path().join("todos.db").exists());
}

#[test]
fn test_list_before_init_fails() {
    let temp = TempDir::new().unwrap();

    tasklist(&temp, &["todo", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_list_empty_table() {
    let temp = TempDir::new().unwrap();
    tasklist(&temp, &["init"]).assert().success();

    tasklist(&temp, &["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet"));
}

#[test]
fn test_new_then_list_and_get() {
    let temp = TempDir::new().unwrap();
    seed_groceries(&temp);

    tasklist(&temp, &["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Groceries: Buy food [Milk|Eggs]"));

    tasklist(&temp, &["todo", "get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn test_get_missing_id_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    tasklist(&temp, &["init"]).assert().success();

    tasklist(&temp, &["todo", "get", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_get_without_id_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    tasklist(&temp, &["todo", "get"]).assert().failure();
}

#[test]
fn test_add_then_remove_task_round_trip() {
    let temp = TempDir::new().unwrap();
    seed_groceries(&temp);

    tasklist(&temp, &["todo", "add-task", "1", "Bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Milk|Eggs|Bread]"));

    tasklist(&temp, &["todo", "remove-task", "1", "Eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Milk|Bread]"));
}

#[test]
fn test_update_replaces_name_and_keeps_tasks() {
    let temp = TempDir::new().unwrap();
    seed_groceries(&temp);

    // New name, empty input keeps the existing description.
    tasklist(&temp, &["todo", "update", "1"])
        .write_stdin("Chores\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated todo #1"));

    tasklist(&temp, &["todo", "get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Chores: Buy food [Milk|Eggs]"));
}

#[test]
fn test_update_missing_id_fails_before_prompting() {
    let temp = TempDir::new().unwrap();
    tasklist(&temp, &["init"]).assert().success();

    tasklist(&temp, &["todo", "update", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_delete_then_get_fails() {
    let temp = TempDir::new().unwrap();
    seed_groceries(&temp);

    tasklist(&temp, &["todo", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted todo #1"));

    tasklist(&temp, &["todo", "get", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_delete_missing_id_succeeds() {
    let temp = TempDir::new().unwrap();
    tasklist(&temp, &["init"]).assert().success();

    tasklist(&temp, &["todo", "delete", "9"]).assert().success();
}

#[test]
fn test_new_with_no_tasks() {
    let temp = TempDir::new().unwrap();
    tasklist(&temp, &["init"]).assert().success();

    tasklist(&temp, &["todo", "new"])
        .write_stdin("Chores\nAround the house\n\n")
        .assert()
        .success();

    tasklist(&temp, &["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Chores: Around the house"));
}

#[test]
fn test_config_init_creates_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("tasklist.toml");

    cargo::cargo_bin_cmd!("tasklist")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    assert!(config_path.exists());
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("tasklist.toml");

    cargo::cargo_bin_cmd!("tasklist")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success();

    cargo::cargo_bin_cmd!("tasklist")
        .args(["config", "init", "--path", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_database_path_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("tasklist.toml");
    let db_path = temp.path().join("elsewhere.db");

    std::fs::write(
        &config_path,
        format!(
            "database = \"{}\"\n",
            db_path.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();

    cargo::cargo_bin_cmd!("tasklist")
        .current_dir(temp.path())
        .args(["--config", config_path.to_str().unwrap(), "init"])
        .assert()
        .success();

    assert!(db_path.exists());
}
