//! Tech-stack normalization: raw "Python, Django & React" into lowercase tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[,/]| and | & |\n").expect("stack delimiter regex"));

/// Splits on `,` `/` ` and ` ` & ` or newline, trims, lowercases, and drops empty and
/// repeated tokens. Order of first appearance is kept.
pub fn normalize_stack(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for part in DELIMITER_RE.split(raw) {
        let token = part.trim().to_lowercase();
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
