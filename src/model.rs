//! The todo list and its JSON file.

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskError};

/// A single todo, saved as one entry of the todo file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub description: String,
    pub done: bool,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    fn new(description: String, now: DateTime<Local>) -> Self {
        Task {
            description,
            done: false,
            created_at: now,
            completed_at: None,
        }
    }

    /// Mark the task as done. The completion time is never earlier than the
    /// creation time, and completing twice keeps the first completion time.
    fn complete(&mut self, now: DateTime<Local>) {
        if self.done {
            return;
        }
        self.done = true;
        self.completed_at = Some(std::cmp::max(now, self.created_at));
    }

    /// Describe why a task read from disk cannot be accepted, if it can't.
    /// A done task without a completion time is fine; older files lack it.
    fn inconsistency(&self) -> Option<&'static str> {
        match self.completed_at {
            Some(_) if !self.done => Some("pending todo has a completion time"),
            Some(completed_at) if completed_at < self.created_at => {
                Some("completion time is earlier than creation time")
            }
            _ => None,
        }
    }
}

/// The ordered list of todos. Positions taken and returned by the public
/// operations are 1-based; deleting a task shifts every following task one
/// position to the left.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get the task at a 1-based position, if any.
    pub fn get(&self, position: usize) -> Option<&Task> {
        self.index_of(position).ok().map(|index| &self.tasks[index])
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Append a new pending task. The description is not validated here.
    pub fn add(&mut self, description: impl Into<String>) {
        self.add_at(description.into(), Local::now());
    }

    fn add_at(&mut self, description: String, now: DateTime<Local>) {
        debug!("Adding todo #{}: {}", self.tasks.len() + 1, description);
        self.tasks.push(Task::new(description, now));
    }

    /// Mark the task at the given 1-based position as done.
    pub fn complete(&mut self, position: usize) -> Result<()> {
        self.complete_at(position, Local::now())
    }

    fn complete_at(&mut self, position: usize, now: DateTime<Local>) -> Result<()> {
        let index = self.index_of(position)?;
        self.tasks[index].complete(now);
        debug!("Completed todo #{}", position);
        Ok(())
    }

    /// Remove the task at the given 1-based position, closing the gap, and
    /// return it.
    pub fn delete(&mut self, position: usize) -> Result<Task> {
        let index = self.index_of(position)?;
        let task = self.tasks.remove(index);
        debug!("Deleted todo #{}: {}", position, task.description);
        Ok(task)
    }

    /// Replace the list with the content of the todo file.
    ///
    /// A missing or empty file is not an error and leaves the list as it
    /// is. On a decode error the list is left untouched as well.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No todo file at {}, starting empty", path.display());
                return Ok(());
            }
            Err(err) => return Err(TaskError::io(path, err)),
        };

        if data.iter().all(u8::is_ascii_whitespace) {
            debug!("Todo file {} is empty", path.display());
            return Ok(());
        }

        let tasks: Vec<Task> =
            serde_json::from_slice(&data).map_err(|source| TaskError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let invalid = tasks.iter().enumerate().find_map(|(index, task)| {
            task.inconsistency().map(|reason| (index + 1, reason))
        });
        if let Some((position, reason)) = invalid {
            return Err(TaskError::Decode {
                path: path.to_path_buf(),
                source: serde::de::Error::custom(format!("todo #{}: {}", position, reason)),
            });
        }

        debug!("Loaded {} todos from {}", tasks.len(), path.display());
        self.tasks = tasks;
        Ok(())
    }

    /// Write the whole list to the todo file, replacing its previous content.
    ///
    /// The data goes to a sibling temporary file first, which is then renamed
    /// over `path`. On unix the file is readable and writable by its owner
    /// only.
    pub fn store(&self, path: &Path) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(&self.tasks)
            .map_err(|err| TaskError::io(path, io::Error::from(err)))?;
        data.push(b'\n');

        let tmp_path = tmp_path_for(path);
        write_private(&tmp_path, &data).map_err(|err| {
            let _ = fs::remove_file(&tmp_path);
            TaskError::io(path, err)
        })?;
        fs::rename(&tmp_path, path).map_err(|err| {
            let _ = fs::remove_file(&tmp_path);
            TaskError::io(path, err)
        })?;

        debug!("Stored {} todos to {}", self.tasks.len(), path.display());
        Ok(())
    }

    /// The single place where user positions become vector indices.
    fn index_of(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.tasks.len() {
            return Err(TaskError::InvalidIndex {
                position,
                len: self.tasks.len(),
            });
        }
        Ok(position - 1)
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Create (or truncate) `path` with owner-only permissions and write `data`.
pub(crate) fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    // The mode above only applies to new files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}
