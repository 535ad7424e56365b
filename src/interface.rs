use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use colored::*;
use humantime::format_duration;
use log::info;
use prettytable::{format, Cell, Row, Table};
use std::io;
use std::time::Duration as STDDuration;

use crate::cli::Command;
use crate::config::Config;
use crate::model::{Task, TaskList};
use crate::profile;

/// Width at which long todo texts wrap inside the table.
const TASK_COLUMN_WIDTH: usize = 50;

const RULE_WIDTH: usize = 40;

/// Run one invocation: load the todos, apply at most one change, save if
/// something changed and show the result.
pub fn run(config: &Config, action: Option<Command>) -> Result<()> {
    let name = profile::resolve_name(&config.user_file)?;

    let action = match action {
        Some(action) => action,
        None => {
            print_usage(&name);
            return Ok(());
        }
    };

    let mut list = TaskList::new();
    list.load(&config.task_file).context("Failed to load todos")?;

    match action {
        Command::Add { words } => add_task(config, &mut list, &words)?,
        Command::Complete { position } => complete_task(config, &mut list, position)?,
        Command::Del { position } => delete_task(config, &mut list, position)?,
        Command::List => {}
    }

    print_list(&list, &name, config.color)
}

/// Join the words of an `add` command into the todo text, refusing blank text.
pub fn todo_text(words: &[String]) -> Result<String> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        bail!("No todo text provided");
    }
    Ok(text)
}

fn add_task(config: &Config, list: &mut TaskList, words: &[String]) -> Result<()> {
    let text = todo_text(words)?;
    list.add(text.as_str());
    save(config, list)?;
    info!("Added todo #{}", list.len());
    println!("{}", format!("✨ Added todo: {}", text).green());
    Ok(())
}

fn complete_task(config: &Config, list: &mut TaskList, position: usize) -> Result<()> {
    list.complete(position)?;
    save(config, list)?;
    println!("{}", format!("✅ Completed todo #{}", position).green());
    Ok(())
}

fn delete_task(config: &Config, list: &mut TaskList, position: usize) -> Result<()> {
    let task = list.delete(position)?;
    save(config, list)?;
    println!(
        "{}",
        format!("🗑  Deleted todo #{}: {}", position, task.description).yellow()
    );
    Ok(())
}

fn save(config: &Config, list: &TaskList) -> Result<()> {
    list.store(&config.task_file).context("Failed to save todos")
}

pub fn print_usage(name: &str) {
    print_header(name);

    println!("\n{}", "🔍 Usage:".bright_white().bold());
    println!("  todo [OPTIONS] [COMMAND] [ARGUMENTS]");

    println!("\n{}", "🛠  Available Commands:".bright_white().bold());
    for (command, description) in &[
        ("list", "Show all your todos"),
        ("add <todo text>", "Create a new todo"),
        ("complete <number>", "Mark a todo as done"),
        ("del <number>", "Remove a todo"),
    ] {
        println!("  {} {}", format!("{:<22}", command).bright_green().bold(), description);
    }

    println!("\n{}", "💡 Examples:".bright_white().bold());
    for example in &[
        "todo add \"Buy groceries\"",
        "todo list",
        "todo complete 1",
        "todo del 2",
    ] {
        println!("  {}", example.bright_blue());
    }
    println!();
}

fn print_header(name: &str) {
    println!("\n{}", format!("📝 {}'s Todo List", name).bright_cyan().bold());
    println!("{}", "Your Personal Command Line Task Manager".bright_black());
    println!("{}", "─".repeat(RULE_WIDTH));
}

pub fn print_list(list: &TaskList, name: &str, color: bool) -> Result<()> {
    if list.is_empty() {
        println!(
            "{}",
            format!(
                "\n📝 {}, your todo list is empty! Add one with: todo add \"your todo\"",
                name
            )
            .yellow()
        );
        return Ok(());
    }

    println!("\n{}", format!("📋 {}'s Todos:", name).bright_cyan().bold());

    let table = task_table(list.tasks(), Local::now(), color);
    if color {
        table.printstd();
    } else {
        table
            .print(&mut io::stdout())
            .context("Failed to print todos")?;
    }

    println!("{}", "─".repeat(RULE_WIDTH));
    println!("{}", summary_line(list));
    if let Some(message) = encouragement(list, name) {
        println!("\n{}", message);
    }
    Ok(())
}

/// Build the table of todos, one row per todo, numbered from 1.
pub fn task_table(tasks: &[Task], now: DateTime<Local>, color: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row!["#", "", "todo", "added", "completed"]);

    for (index, task) in tasks.iter().enumerate() {
        let (checkbox, style) = if task.done { ("✓", "FG") } else { ("☐", "FW") };
        let styled = |content: &str, spec: &str| {
            let cell = Cell::new(content);
            if color {
                cell.style_spec(spec)
            } else {
                cell
            }
        };

        table.add_row(Row::new(vec![
            styled(&format!("[{}]", index + 1), style),
            styled(checkbox, style),
            styled(&textwrap::fill(&task.description, TASK_COLUMN_WIDTH), style),
            styled(&fmt_age(task.created_at, now), "FD"),
            styled(&fmt_completed_at(task), "FD"),
        ]));
    }
    table
}

/// Describe how long ago `created_at` was, at minute precision (hour
/// precision past a day).
pub fn fmt_age(created_at: DateTime<Local>, now: DateTime<Local>) -> String {
    let secs = (now - created_at).to_std().unwrap_or_default().as_secs();
    let precision = if secs >= 24 * 3600 { 3600 } else { 60 };
    let rounded = secs - secs % precision;
    if rounded == 0 {
        return "just now".to_string();
    }
    format!("{} ago", format_duration(STDDuration::from_secs(rounded)))
}

fn fmt_completed_at(task: &Task) -> String {
    match task.completed_at {
        Some(completed_at) => completed_at.format("%b %-d %H:%M").to_string(),
        None => String::new(),
    }
}

pub fn summary_line(list: &TaskList) -> String {
    format!(
        "{}  {}  {}",
        format!("Total: {}", list.len()).bright_black(),
        format!("Completed: {}", list.completed_count()).bright_green(),
        format!("Pending: {}", list.pending_count()).bright_yellow()
    )
}

fn encouragement(list: &TaskList, name: &str) -> Option<ColoredString> {
    if list.is_empty() {
        None
    } else if list.pending_count() == 0 {
        Some(format!("🎉 Amazing job {}! All tasks completed! 🌟", name).bright_green())
    } else if list.completed_count() > 0 {
        Some(format!("💪 Keep going {}! You're making great progress!", name).bright_cyan())
    } else {
        None
    }
}
