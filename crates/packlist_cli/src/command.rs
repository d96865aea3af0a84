//! Line command parsing for the interactive shell.

use once_cell::sync::Lazy;
use packlist_core::{ItemId, SortCriterion, SortCriterionParseError};
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\S+)(?:\s+(.*?))?\s*$").expect("valid command regex"));
static ADD_ARGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\s+(.+)$").expect("valid add args regex"));

pub const USAGE: &str = "commands:
  add <qty> <description>   add an item directly
  desc <text>               set form description
  qty <n>                   set form quantity (1-20)
  submit                    add or update from the form
  edit <id>                 load an item into the form
  cancel                    leave edit mode
  toggle <id>               flip packed state
  delete <id>               remove one item
  clear                     remove every item
  sort <input|description|packed>
  list | stats | help | quit";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { quantity: u32, description: String },
    Describe(String),
    Quantity(u32),
    Submit,
    Edit(ItemId),
    Cancel,
    Toggle(ItemId),
    Delete(ItemId),
    Clear,
    Sort(SortCriterion),
    List,
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    Sort(SortCriterionParseError),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(verb) => write!(f, "unknown command `{verb}`"),
            Self::MissingArgument(usage) => write!(f, "usage: {usage}"),
            Self::InvalidNumber(value) => write!(f, "not a number: `{value}`"),
            Self::Sort(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sort(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SortCriterionParseError> for CommandParseError {
    fn from(value: SortCriterionParseError) -> Self {
        Self::Sort(value)
    }
}

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    if line.trim().is_empty() {
        return Err(CommandParseError::Empty);
    }
    let caps = COMMAND_RE
        .captures(line)
        .ok_or_else(|| CommandParseError::UnknownCommand(line.trim().to_string()))?;
    let raw_verb = caps.get(1).map(|m| m.as_str()).unwrap_or("");
    let verb = raw_verb.to_ascii_lowercase();
    let args = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    match verb.as_str() {
        "add" => {
            let add = ADD_ARGS_RE
                .captures(args)
                .ok_or(CommandParseError::MissingArgument("add <qty> <description>"))?;
            Ok(Command::Add {
                quantity: parse_number(&add[1])?,
                description: add[2].to_string(),
            })
        }
        "desc" => Ok(Command::Describe(args.to_string())),
        "qty" => Ok(Command::Quantity(parse_number(required(args, "qty <n>")?)?)),
        "submit" => Ok(Command::Submit),
        "edit" => Ok(Command::Edit(parse_number(required(args, "edit <id>")?)?)),
        "cancel" => Ok(Command::Cancel),
        "toggle" => Ok(Command::Toggle(parse_number(required(args, "toggle <id>")?)?)),
        "delete" => Ok(Command::Delete(parse_number(required(args, "delete <id>")?)?)),
        "clear" => Ok(Command::Clear),
        "sort" => Ok(Command::Sort(
            required(args, "sort <input|description|packed>")?.parse()?,
        )),
        "list" => Ok(Command::List),
        "stats" => Ok(Command::Stats),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(CommandParseError::UnknownCommand(raw_verb.to_string())),
    }
}

fn required<'a>(args: &'a str, usage: &'static str) -> Result<&'a str, CommandParseError> {
    if args.is_empty() {
        return Err(CommandParseError::MissingArgument(usage));
    }
    Ok(args)
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, CommandParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| CommandParseError::InvalidNumber(value.to_string()))
}
