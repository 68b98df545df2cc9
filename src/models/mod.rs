//! Data model for todo entries

mod todo;

pub use todo::{TaskList, Todo};
