//! Interactive REPL over one local intake session.
//!
//! Reads lines from any async buffered reader and writes to any `Write`, so the loop runs the
//! same against stdin/stdout and against scripted input in tests.

use std::io::Write;

use intake::{CandidateField, ChatTurn, ReplyGenerator, SessionError, SessionState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{info_span, Instrument};

use crate::command::{parse_line, ReplCommand, HELP};
use crate::render::{render_questions, render_reply, render_status, render_warnings};

pub const WELCOME: &str = "👋 Welcome to TalentScout! I'm here to learn about your experience \
and ask a few technical questions based on your tech stack. Type /help for commands.";

/// Runs the REPL until EOF, `/quit`, or an I/O error.
///
/// Session errors (ended conversation, empty answer, unknown question) are printed and the
/// loop continues. Each message sent to the assistant runs in a `turn` span numbered from 1.
pub async fn run_repl<R, W>(
    input: R,
    out: &mut W,
    session: &mut SessionState,
    generator: &ReplyGenerator,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut turn = 0u64;
    writeln!(out, "{}", WELCOME)?;
    if session.api_key().is_empty() {
        writeln!(out, "(no API key configured: replies are offline; use /key KEY to enable)")?;
    }

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Chat(text) => {
                turn += 1;
                let result = session
                    .send_chat(&text, generator)
                    .instrument(info_span!("turn", n = turn))
                    .await;
                print_turn(out, session, result)?;
            }
            ReplCommand::Quick(quick) => {
                turn += 1;
                let result = session
                    .send_quick_reply(quick, generator)
                    .instrument(info_span!("turn", n = turn, quick = ?quick))
                    .await;
                print_turn(out, session, result)?;
            }
            ReplCommand::Form => {
                if !run_form(&mut lines, out, session).await? {
                    break;
                }
            }
            ReplCommand::Answer { index, text } => match session.save_answer(index, &text) {
                Ok(()) => writeln!(
                    out,
                    "✓ Saved answer to Q{} ({} words).",
                    index + 1,
                    text.split_whitespace().count()
                )?,
                Err(e) => writeln!(out, "⚠️  {}", e)?,
            },
            ReplCommand::Key(key) => {
                session.set_api_key(&key);
                if session.api_key().is_empty() {
                    writeln!(out, "API key cleared; replies are offline.")?;
                } else {
                    writeln!(out, "API key set for this session.")?;
                }
            }
            ReplCommand::Status => writeln!(out, "{}", render_status(&session.snapshot()))?,
            ReplCommand::Reset => {
                session.reset();
                writeln!(out, "Session reset. {}", WELCOME)?;
            }
        }
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

fn print_turn<W: Write>(
    out: &mut W,
    session: &SessionState,
    result: Result<ChatTurn, SessionError>,
) -> std::io::Result<()> {
    match result {
        Ok(turn) => {
            writeln!(out, "{}", render_reply(&turn))?;
            if turn.questions_generated {
                writeln!(out, "{}", render_questions(session.questions()))?;
            }
            if turn.ended {
                writeln!(out, "(conversation ended: /reset to start over, /quit to leave)")?;
            }
            Ok(())
        }
        Err(e) => writeln!(out, "⚠️  {}", e),
    }
}

/// Prompts for each field; a blank line keeps the current value. Returns `false` on EOF.
async fn run_form<R, W>(
    lines: &mut Lines<R>,
    out: &mut W,
    session: &mut SessionState,
) -> Result<bool, Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let had_questions = !session.questions().is_empty();
    let mut entries = Vec::with_capacity(CandidateField::ALL.len());
    for field in CandidateField::ALL {
        match session.profile().get(field) {
            Some(current) => write!(out, "{} [{}]: ", field.label(), current)?,
            None => match field.placeholder() {
                Some(hint) => write!(out, "{} ({}): ", field.label(), hint)?,
                None => write!(out, "{}: ", field.label())?,
            },
        }
        out.flush()?;
        let Some(value) = lines.next_line().await? else {
            return Ok(false);
        };
        entries.push((field, value));
    }

    let warnings = session.submit_form(entries);
    if !warnings.is_empty() {
        writeln!(out, "{}", render_warnings(&warnings))?;
    }
    let snapshot = session.snapshot();
    writeln!(
        out,
        "✓ Details saved ({}/{} fields).",
        snapshot.filled, snapshot.total_fields
    )?;
    if !had_questions && !session.questions().is_empty() {
        writeln!(out, "{}", render_questions(session.questions()))?;
    }
    Ok(true)
}
