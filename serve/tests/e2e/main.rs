//! End-to-end tests: real server on 127.0.0.1:0, real WebSocket client, mock model.
//!
//! Run with `cargo test -p serve --test e2e -- --nocapture` to see received frames.

mod init_logging;

mod common;

mod chat_fallback;
mod invalid_json;
mod page;
mod ping;
mod save_answer;
mod session_isolation;
