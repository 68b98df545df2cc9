//! Command-line interface module
//!
//! Implements all CLI commands:
//! - init: Create the todos table
//! - config init: Initialize configuration file
//! - todo list/new/get/update/add-task/remove-task/delete: CRUD on todos

pub mod init;
pub mod todo;
