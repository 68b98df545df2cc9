use std::fmt;

/// Separator used for the persisted task encoding.
const TASK_DELIMITER: &str = "|";

/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Surrogate key assigned by the store on creation
    pub id: i64,
    /// Human-readable title
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Ordered task strings
    pub tasks: TaskList,
}

/// Ordered list of free-text task strings.
///
/// Persisted as a single `|`-joined string, so task items must not contain
/// the delimiter character or the encoding will not round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList(Vec<String>);

impl TaskList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append a task, keeping insertion order.
    pub fn push(&mut self, task: String) {
        self.0.push(task);
    }

    /// Remove every task equal to `task` by exact string match.
    pub fn remove_all(&mut self, task: &str) {
        self.0.retain(|t| t != task);
    }

    /// Encode for storage. The empty list encodes as the empty string.
    pub fn encode(&self) -> String {
        self.0.join(TASK_DELIMITER)
    }

    /// Decode the stored representation. The empty string decodes to an
    /// empty list rather than a single empty task.
    pub fn decode(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(TASK_DELIMITER).map(str::to_string).collect())
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.id, self.name, self.description)?;
        if !self.tasks.is_empty() {
            write!(f, " [{}]", self.tasks)?;
        }
        Ok(())
    }
}
