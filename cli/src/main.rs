//! `talentscout` binary: web server or interactive terminal intake.
//!
//! Subcommands: `serve` (HTTP page + WebSocket sessions), `chat` (default, REPL on stdin).

mod log_format;
mod logging;

use clap::{Parser, Subcommand};
use config::IntakeSettings;
use intake::{ReplyGenerator, SessionState};
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "talentscout")]
#[command(about = "TalentScout: chat-based candidate intake for tech recruiting")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Serve the intake page and WebSocket sessions (default 127.0.0.1:8080 or TALENTSCOUT_ADDR)
    Serve(ServeArgs),
    /// Chat with TalentScout in the terminal
    Chat(ChatArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address, e.g. 0.0.0.0:8080
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,
    /// Exit after the first WebSocket connection closes
    #[arg(long)]
    once: bool,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct ChatArgs {
    /// API key for model replies (overrides OPENAI_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,
    /// Chat model name (overrides TALENTSCOUT_MODEL)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,
}

/// Applies command-line overrides on top of environment settings.
fn chat_settings(mut settings: IntakeSettings, args: &ChatArgs) -> IntakeSettings {
    if let Some(key) = &args.api_key {
        settings.api_key = key.trim().to_string();
    }
    if let Some(model) = &args.model {
        settings.model = model.clone();
    }
    settings
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("talentscout", None) {
        eprintln!("talentscout: ignoring config: {}", e);
    }
    let args = Args::parse();

    match args.cmd.unwrap_or_else(|| Command::Chat(ChatArgs::default())) {
        Command::Serve(sa) => {
            logging::init(logging::Fallback::Stderr)?;
            if let Err(e) = serve::run_serve(sa.addr.as_deref(), sa.once).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Chat(ca) => {
            logging::init(logging::Fallback::Sink)?;
            let settings = chat_settings(IntakeSettings::from_env(), &ca);
            let generator = ReplyGenerator::from_settings(&settings);
            let mut session = SessionState::new(settings.api_key.clone());
            let input = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            cli::run_repl(input, &mut stdout, &mut session, &generator).await?;
        }
    }
    Ok(())
}
