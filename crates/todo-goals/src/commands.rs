//! Line commands
//!
//! Translates user input into actions. Positions typed by the user are the
//! 1-based numbers shown by the renderer; they are resolved to ids against
//! the current state before an action is built.

use std::rc::Rc;
use thiserror::Error;
use todo_goals::state::{AppState, Goal, Identified, Todo};
use todo_goals::Action;

pub const HELP: &str = "\
Commands:
  todo <name>    add a todo
  goal <name>    add a goal
  toggle <n>     toggle todo number n
  rm-todo <n>    remove todo number n
  rm-goal <n>    remove goal number n
  show           print the lists
  state          print the state as JSON
  help           print this help
  quit           exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo(String),
    AddGoal(String),
    ToggleTodo(usize),
    RemoveTodo(usize),
    RemoveGoal(usize),
    Show,
    DumpState,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for a list of commands")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a valid position")]
    InvalidPosition(String),
    #[error("there is no {list} at position {position}")]
    OutOfRange { list: &'static str, position: usize },
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "todo" => Command::AddTodo(name("todo", rest)?),
        "goal" => Command::AddGoal(name("goal", rest)?),
        "toggle" => Command::ToggleTodo(position("toggle", rest)?),
        "rm-todo" => Command::RemoveTodo(position("rm-todo", rest)?),
        "rm-goal" => Command::RemoveGoal(position("rm-goal", rest)?),
        "show" => Command::Show,
        "state" => Command::DumpState,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn name(command: &'static str, rest: &str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a name",
        });
    }
    Ok(rest.to_string())
}

fn position(command: &'static str, rest: &str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "a position",
        });
    }
    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidPosition(rest.to_string())),
    }
}

/// Build the action for a command
///
/// `new_id` is only called for commands creating an entity. Commands that do
/// not change state (show, help, ...) yield `None`.
pub fn to_action(
    command: &Command,
    state: &AppState,
    new_id: impl FnOnce() -> String,
) -> Result<Option<Action>, CommandError> {
    let action = match command {
        Command::AddTodo(name) => Action::add_todo(Todo::new(new_id(), name.as_str())),
        Command::AddGoal(name) => Action::add_goal(Goal::new(new_id(), name.as_str())),
        Command::ToggleTodo(n) => Action::toggle_todo(id_at(&state.todos[..], "todo", *n)?),
        Command::RemoveTodo(n) => Action::remove_todo(id_at(&state.todos[..], "todo", *n)?),
        Command::RemoveGoal(n) => Action::remove_goal(id_at(&state.goals[..], "goal", *n)?),
        Command::Show | Command::DumpState | Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(action))
}

fn id_at<T: Identified>(
    items: &[Rc<T>],
    list: &'static str,
    position: usize,
) -> Result<String, CommandError> {
    position
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .map(|item| item.id().to_string())
        .ok_or(CommandError::OutOfRange { list, position })
}
