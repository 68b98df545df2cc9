use std::io::{BufRead, Write};

use crate::error::Result;
use crate::models::TaskList;
use crate::prompt::Prompter;
use crate::store::Store;

/// Print all todos, ordered by id
pub fn list(store: &Store) -> Result<()> {
    let todos = store.list_all()?;

    if todos.is_empty() {
        println!("No todos yet. Run 'tasklist todo new' to create one.");
        return Ok(());
    }

    for todo in todos {
        println!("{}", todo);
    }

    Ok(())
}

/// Create a new todo from interactively collected fields
pub fn new<R: BufRead, W: Write>(store: &Store, prompter: &mut Prompter<R, W>) -> Result<()> {
    let name = prompter.required("Name")?;
    let description = prompter.required("Description")?;
    let tasks = TaskList::new(prompter.task_list()?);

    let id = store.insert(&name, &description, &tasks)?;
    tracing::debug!("added {} tasks", tasks.len());

    println!("Created todo #{}", id);
    Ok(())
}

/// Print a single todo
pub fn get(store: &Store, id: i64) -> Result<()> {
    let todo = store.get(id)?;
    println!("{}", todo);
    Ok(())
}

/// Replace a todo's name and description, keeping existing values as
/// prompt defaults. Tasks are only changed by add-task/remove-task.
pub fn update<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
    id: i64,
) -> Result<()> {
    let existing = store.get(id)?;

    let name = prompter.with_default("Name", &existing.name)?;
    let description = prompter.with_default("Description", &existing.description)?;

    store.update(id, &name, &description, &existing.tasks)?;

    println!("Updated todo #{}", id);
    Ok(())
}

/// Append a task to the todo's task list
pub fn add_task(store: &Store, id: i64, task: &str) -> Result<()> {
    let mut todo = store.get(id)?;
    todo.tasks.push(task.to_string());

    store.update(id, &todo.name, &todo.description, &todo.tasks)?;

    println!("{}", todo);
    Ok(())
}

/// Remove every exact match of `task` from the todo's task list
pub fn remove_task(store: &Store, id: i64, task: &str) -> Result<()> {
    let mut todo = store.get(id)?;
    todo.tasks.remove_all(task);

    store.update(id, &todo.name, &todo.description, &todo.tasks)?;

    println!("{}", todo);
    Ok(())
}

/// Delete a todo permanently
pub fn delete(store: &Store, id: i64) -> Result<()> {
    store.delete(id)?;
    println!("Deleted todo #{}", id);
    Ok(())
}
