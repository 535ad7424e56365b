//! todo - a personal command line task list
//!
//! Todos live in a single JSON file, loaded whole at the start of each
//! invocation and written back whole after a change. A todo is addressed by
//! its 1-based position in the list; deleting one renumbers the todos after
//! it.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use todo::TaskList;
//!
//! # fn main() -> Result<(), todo::TaskError> {
//! let path = Path::new(".todos.json");
//! let mut list = TaskList::new();
//! list.load(path)?;
//! list.add("Buy milk");
//! list.complete(1)?;
//! list.store(path)?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate prettytable;

pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod profile;

pub use error::TaskError;
pub use model::{Task, TaskList};
