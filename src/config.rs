//! Configuration for todo

use std::ffi::OsString;
use std::path::PathBuf;

/// Default todo file, relative to the working directory.
pub const DEFAULT_TASK_FILE: &str = ".todos.json";

/// Default display name file, relative to the working directory.
pub const DEFAULT_USER_FILE: &str = ".todo_user";

/// Environment variable overriding the todo file.
pub const TASK_FILE_ENV: &str = "TODO_FILE";

/// Environment variable overriding the display name file.
pub const USER_FILE_ENV: &str = "TODO_USER_FILE";

/// Any value disables colors.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the todo file
    pub task_file: PathBuf,

    /// Path to the file holding the user's display name
    pub user_file: PathBuf,

    /// Whether output may be colored
    pub color: bool,
}

/// Settings given on the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub task_file: Option<PathBuf>,
    pub user_file: Option<PathBuf>,
    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_file: PathBuf::from(DEFAULT_TASK_FILE),
            user_file: PathBuf::from(DEFAULT_USER_FILE),
            color: true,
        }
    }
}

impl Config {
    /// Resolve the configuration from the process environment.
    pub fn from_env(overrides: Overrides) -> Self {
        Self::resolve(overrides, |key| std::env::var_os(key))
    }

    /// Resolve each path as: command line, then environment (ignored when
    /// empty), then the default file in the working directory. Colors are off
    /// with `--plain` or when `NO_COLOR` is set.
    pub fn resolve<F>(overrides: Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let from_env = |key: &str| env(key).filter(|value| !value.is_empty()).map(PathBuf::from);
        let defaults = Config::default();

        Self {
            task_file: overrides
                .task_file
                .or_else(|| from_env(TASK_FILE_ENV))
                .unwrap_or(defaults.task_file),
            user_file: overrides
                .user_file
                .or_else(|| from_env(USER_FILE_ENV))
                .unwrap_or(defaults.user_file),
            color: !overrides.plain && env(NO_COLOR_ENV).is_none(),
        }
    }
}
