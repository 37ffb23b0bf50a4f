//! Parsing of REPL input lines into chat messages and slash commands.

use intake::QuickReply;
use thiserror::Error;

/// One line of REPL input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// Free text sent to the assistant.
    Chat(String),
    /// Prompt for every profile field in turn.
    Form,
    /// Save an answer; `index` is 0-based (the user types 1-based).
    Answer { index: usize, text: String },
    /// Replace the session API key (empty clears it).
    Key(String),
    Quick(QuickReply),
    Status,
    Reset,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: /{0} (try /help)")]
    Unknown(String),
    #[error("usage: /answer N TEXT (N starts at 1)")]
    AnswerUsage,
    #[error("usage: /quick 1|2|3")]
    QuickUsage,
}

pub const HELP: &str = "\
Type a message to chat with TalentScout. Commands:
  /form            fill in your details field by field (blank keeps the current value)
  /answer N TEXT   save your answer to technical question N
  /quick N         send a starter prompt (1 share info, 2 tech stack, 3 what do you need)
  /key KEY         use this API key for replies (/key alone switches to offline replies)
  /status          show captured details, questions and answers
  /reset           start over
  /help            show this help
  /quit            leave (saying 'bye' ends the conversation too)";

/// Parses one input line. Lines not starting with `/` are chat messages.
pub fn parse_line(line: &str) -> Result<ReplCommand, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReplCommand::Empty);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(ReplCommand::Chat(line.to_string()));
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };
    match name.to_lowercase().as_str() {
        "form" => Ok(ReplCommand::Form),
        "answer" => parse_answer(arg),
        "key" => Ok(ReplCommand::Key(arg.to_string())),
        "quick" => parse_quick(arg),
        "status" => Ok(ReplCommand::Status),
        "reset" => Ok(ReplCommand::Reset),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" => Ok(ReplCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_answer(arg: &str) -> Result<ReplCommand, CommandError> {
    let (number, text) = arg
        .split_once(char::is_whitespace)
        .ok_or(CommandError::AnswerUsage)?;
    let number: usize = number.parse().map_err(|_| CommandError::AnswerUsage)?;
    if number == 0 {
        return Err(CommandError::AnswerUsage);
    }
    Ok(ReplCommand::Answer {
        index: number - 1,
        text: text.trim().to_string(),
    })
}

fn parse_quick(arg: &str) -> Result<ReplCommand, CommandError> {
    let number: usize = arg.parse().map_err(|_| CommandError::QuickUsage)?;
    number
        .checked_sub(1)
        .and_then(|i| QuickReply::ALL.get(i).copied())
        .map(ReplCommand::Quick)
        .ok_or(CommandError::QuickUsage)
}
