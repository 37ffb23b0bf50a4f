//! Plain-text rendering of session output for the terminal.

use intake::{CandidateField, ChatTurn, FieldWarning, Phase, SessionSnapshot};

pub fn render_reply(turn: &ChatTurn) -> String {
    format!("TalentScout: {}", turn.reply)
}

/// Numbered list of technical questions (1-based, matching `/answer N`).
pub fn render_questions(questions: &[String]) -> String {
    let mut out = String::from("📝 Technical questions (answer with /answer N TEXT):");
    for (i, q) in questions.iter().enumerate() {
        out.push_str(&format!("\n  Q{}. {}", i + 1, q));
    }
    out
}

pub fn render_warnings(warnings: &[FieldWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("⚠️  {}: {}", w.field.label(), w.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_status(snapshot: &SessionSnapshot) -> String {
    let phase = match snapshot.phase {
        Phase::CollectingFields => "collecting details",
        Phase::ShowingQuestions => "technical questions",
        Phase::Ended => "ended",
    };
    let mut out = format!(
        "Profile {}/{} ({}), replies: {}",
        snapshot.filled,
        snapshot.total_fields,
        phase,
        if snapshot.api_key_set { "model" } else { "offline" }
    );
    for field in CandidateField::ALL {
        let value = snapshot.profile.get(field).unwrap_or("-");
        out.push_str(&format!("\n  {:<20} {}", field.label(), value));
    }
    if !snapshot.questions.is_empty() {
        out.push_str(&format!(
            "\nQuestions answered: {}/{}",
            snapshot.answered,
            snapshot.questions.len()
        ));
        for q in &snapshot.questions {
            let mark = if q.answer.is_some() {
                format!("✓ {} words", q.answer_words)
            } else {
                "unanswered".to_string()
            };
            out.push_str(&format!("\n  Q{}. [{}] {}", q.index + 1, mark, q.question));
        }
        if snapshot.all_answered {
            out.push_str("\n🎯 All questions answered. Type 'bye' to finish.");
        }
    }
    out
}
