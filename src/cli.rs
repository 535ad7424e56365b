use std::path::PathBuf;
use structopt::StructOpt;

use crate::config::Overrides;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Add a new todo.
    Add {
        /// The todo text. Several words are joined with spaces.
        #[structopt()]
        words: Vec<String>,
    },
    /// Mark the todo at the given position as done.
    #[structopt(visible_alias = "done")]
    Complete {
        #[structopt()]
        position: usize,
    },
    /// Remove the todo at the given position. Later todos move up by one.
    #[structopt(visible_aliases = &["delete", "rm"])]
    Del {
        #[structopt()]
        position: usize,
    },
    /// List all todos.
    #[structopt(visible_alias = "ls")]
    List,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "todo", about = "Your personal command line task manager.")]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Option<Command>,

    /// Use a different todo file (defaults to $TODO_FILE, then .todos.json).
    #[structopt(parse(from_os_str), short, long)]
    pub file: Option<PathBuf>,

    /// Use a different name file (defaults to $TODO_USER_FILE, then .todo_user).
    #[structopt(parse(from_os_str), long)]
    pub user_file: Option<PathBuf>,

    /// Disable colors.
    #[structopt(long)]
    pub plain: bool,

    /// Print debug logs to stderr.
    #[structopt(short, long)]
    pub verbose: bool,
}

impl CommandLineArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            task_file: self.file.clone(),
            user_file: self.user_file.clone(),
            plain: self.plain,
        }
    }
}
