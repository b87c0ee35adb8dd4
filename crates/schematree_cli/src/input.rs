//! Line parser mapping typed commands onto shell commands.

use schematree_core::{EditableTitle, ShellCommand, ToolAction};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const HELP: &str = "\
commands:
  create | exit | save | open
  edit <tree|notes>            start editing a title
  type <tree|notes> <text>     replace the title being edited
  confirm <tree|notes>         commit the edit (blank -> default label)
  cancel <tree|notes>          discard the edit
  draft <text>                 set the pending comment
  submit                       post the pending comment
  comment <text>               draft + submit in one step
  delete <index>               remove a comment
  tool <name>                  add-node remove-node draw-lines undo redo
                               add-text attach-files add-forms
  theme                        toggle light/dark
  dismiss <id>                 dismiss a notification
  show | help | quit";

/// What one input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Commands(Vec<ShellCommand>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidField(String),
    InvalidIndex(String),
    UnknownTool(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(word) => write!(f, "unknown command `{word}`; try `help`"),
            Self::MissingArgument(what) => write!(f, "missing {what}"),
            Self::InvalidField(value) => {
                write!(f, "`{value}` is not an editable title; use tree or notes")
            }
            Self::InvalidIndex(value) => write!(f, "`{value}` is not a comment index"),
            Self::UnknownTool(value) => write!(f, "unknown tool `{value}`"),
        }
    }
}

impl Error for InputError {}

/// Parses one line. Blank lines re-render.
pub fn parse_line(line: &str) -> Result<ShellInput, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" | "show" => return Ok(ShellInput::Show),
        "help" | "?" => return Ok(ShellInput::Help),
        "quit" | "q" => return Ok(ShellInput::Quit),
        "create" => ShellCommand::EnterCreation,
        "exit" => ShellCommand::ExitCreation,
        "save" => ShellCommand::Save,
        "open" | "load" => ShellCommand::Load,
        "edit" => ShellCommand::BeginTitleEdit(field(rest)?),
        "confirm" => ShellCommand::ConfirmTitleEdit(field(rest)?),
        "cancel" => ShellCommand::CancelTitleEdit(field(rest)?),
        "type" => {
            let (name, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            ShellCommand::TypeTitle(field(name)?, text.trim_start().to_string())
        }
        "draft" => ShellCommand::SetCommentDraft(rest.to_string()),
        "submit" => ShellCommand::SubmitComment,
        "comment" => {
            return Ok(ShellInput::Commands(vec![
                ShellCommand::SetCommentDraft(rest.to_string()),
                ShellCommand::SubmitComment,
            ]))
        }
        "delete" => ShellCommand::DeleteComment(index(rest)?),
        "tool" => {
            let name = required(rest, "tool name")?;
            let tool =
                ToolAction::parse(name).ok_or_else(|| InputError::UnknownTool(name.to_string()))?;
            ShellCommand::UseTool(tool)
        }
        "theme" => ShellCommand::ToggleTheme,
        "dismiss" => {
            let value = required(rest, "notification id")?;
            let id = value
                .parse()
                .map_err(|_| InputError::InvalidIndex(value.to_string()))?;
            ShellCommand::DismissNotification(id)
        }
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(ShellInput::Commands(vec![command]))
}

fn required<'a>(value: &'a str, what: &'static str) -> Result<&'a str, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::MissingArgument(what));
    }
    Ok(value)
}

fn field(value: &str) -> Result<EditableTitle, InputError> {
    let value = required(value, "title field")?;
    EditableTitle::parse(value).ok_or_else(|| InputError::InvalidField(value.to_string()))
}

fn index(value: &str) -> Result<usize, InputError> {
    let value = required(value, "comment index")?;
    value
        .parse()
        .map_err(|_| InputError::InvalidIndex(value.to_string()))
}
