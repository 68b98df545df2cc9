//! SQLite persistence for todo records

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::{Result, TasklistError};
use crate::models::{TaskList, Todo};

const CREATE_TODOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    description TEXT,
    tasks TEXT
)
"#;

/// SQLite-backed store for the todos table
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open a database file (creates the file if it doesn't exist).
    ///
    /// Does not create the schema; that is the `init` command's job.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the todos table if absent. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        self.conn
            .execute(CREATE_TODOS_TABLE, [])
            .map_err(|e| TasklistError::Schema(e.to_string()))?;
        tracing::debug!("todos table created");
        Ok(())
    }

    /// Insert a new todo and return the id the database assigned
    pub fn insert(&self, name: &str, description: &str, tasks: &TaskList) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO todos (name, description, tasks) VALUES (?1, ?2, ?3)",
            params![name, description, tasks.encode()],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, "inserted todo");
        Ok(id)
    }

    /// Get a todo by id, failing with NotFound when no row matches
    pub fn get(&self, id: i64) -> Result<Todo> {
        self.conn
            .query_row(
                "SELECT id, name, description, tasks FROM todos WHERE id = ?1",
                [id],
                Self::row_to_todo,
            )
            .optional()?
            .ok_or(TasklistError::NotFound(id))
    }

    /// List every todo, ordered by ascending id
    pub fn list_all(&self) -> Result<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description, tasks FROM todos ORDER BY id")?;

        let todos = stmt
            .query_map([], Self::row_to_todo)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(todos)
    }

    /// Overwrite all mutable fields of the row matching `id`.
    ///
    /// Returns the number of rows affected; 0 means the id did not exist and
    /// is not an error. Callers needing existence guarantees call `get` first.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        tasks: &TaskList,
    ) -> Result<usize> {
        let affected = self.conn.execute(
            "UPDATE todos SET name = ?1, description = ?2, tasks = ?3 WHERE id = ?4",
            params![name, description, tasks.encode(), id],
        )?;
        tracing::info!("{} rows affected", affected);
        Ok(affected)
    }

    /// Delete the row matching `id`. Deleting a missing id is a no-op.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM todos WHERE id = ?1", [id])?;
        tracing::debug!(id, "deleted todo");
        Ok(())
    }

    fn row_to_todo(row: &rusqlite::Row) -> rusqlite::Result<Todo> {
        let raw_tasks: String = row.get(3)?;
        Ok(Todo {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            tasks: TaskList::decode(&raw_tasks),
        })
    }
}
