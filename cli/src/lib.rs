//! TalentScout terminal front end: slash-command parsing, text rendering and the REPL loop
//! used by the `talentscout chat` subcommand.

pub mod command;
pub mod render;
pub mod repl;

pub use command::{parse_line, CommandError, ReplCommand, HELP};
pub use repl::{run_repl, WELCOME};
