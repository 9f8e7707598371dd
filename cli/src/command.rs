//! Line commands typed at the prompt.

use board_core::{Id, UiEvent};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  list                     show the todo list
  users                    show the user selection
  add <user-id> <title>    create a todo for a user
  done <id>                check a todo
  undo <id>                uncheck a todo
  rm <id>                  delete a todo
  help                     show this text
  quit                     leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Users,
    Help,
    Quit,
    Event(UiEvent),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word {
        "list" | "ls" => Command::List,
        "users" => Command::Users,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "add" => {
            let (user, title) = rest.split_once(char::is_whitespace).ok_or(CommandError::MissingArgument {
                command: "add",
                argument: "a user id and a title",
            })?;
            Command::Event(UiEvent::Submit {
                user: user.to_string(),
                title: title.trim_start().to_string(),
            })
        }
        "done" => Command::Event(UiEvent::Toggle {
            id: id_arg("done", rest)?,
            completed: true,
        }),
        "undo" => Command::Event(UiEvent::Toggle {
            id: id_arg("undo", rest)?,
            completed: false,
        }),
        "rm" | "del" => Command::Event(UiEvent::Close { id: id_arg("rm", rest)? }),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn id_arg(command: &'static str, rest: &str) -> Result<Id, CommandError> {
    let id = rest.split_whitespace().next().ok_or(CommandError::MissingArgument {
        command,
        argument: "a todo id",
    })?;
    Ok(Id::from(id.trim_start_matches('#')))
}
