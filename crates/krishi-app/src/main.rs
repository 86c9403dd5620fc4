//! Krishi Sahayi application binary - composition root.
//!
//! Ties the workspace crates into a single terminal app:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Start a chat session (resolver + deferred-reply worker)
//! 4. Run the interactive prompt: catalog commands and free-text chat

mod cli;
mod render;

use std::io::Write as _;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use krishi_chat::{ChatSession, SessionConfig};
use krishi_core::config::KrishiConfig;
use krishi_core::types::AttachmentRef;

use cli::CliArgs;

/// Print every log entry the prompt has not shown yet.
fn print_new_messages(session: &ChatSession, printed: &mut usize) {
    let log = session.messages();
    for message in &log[*printed..] {
        println!("{}", render::format_message(message));
    }
    *printed = log.len();
}

/// Submit an utterance, wait out the simulated latency, and print the reply.
async fn exchange(
    session: &ChatSession,
    printed: &mut usize,
    utterance: &str,
    attachment: Option<AttachmentRef>,
) {
    match session.submit(utterance, attachment) {
        Ok(_) => {
            print_new_messages(session, printed);
            println!("  … assistant is typing");
            session.settled().await;
            print_new_messages(session, printed);
        }
        Err(e) => {
            tracing::error!(error = %e, "Submission rejected");
            println!("Could not send that: {}", e);
        }
    }
}

fn prompt() {
    print!("you> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let config = KrishiConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Krishi Sahayi v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Chat session.
    let session_config = if args.instant {
        SessionConfig::immediate()
    } else {
        SessionConfig::from(&config.chat)
    };
    let session = ChatSession::new(session_config)?;
    tracing::info!(session_id = %session.id(), "Chat session ready");

    println!("Welcome to Krishi Sahayi 🌱");
    println!(
        "Your farming companion. Get instant help with plant diseases, weather\n\
         forecasts, crop advice, and market prices. Type /help for commands.\n"
    );
    println!("{}", render::quick_action_menu());

    let mut printed = 0usize;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt();
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        match command {
            "/quit" | "/exit" => break,
            "/help" => print!("{}", render::help_text()),
            "/weather" => print!("{}", render::weather_report()),
            "/prices" => print!("{}", render::price_board(rest)),
            "/advisory" => print!("{}", render::advisory_report()),
            "/schemes" => print!("{}", render::scheme_list(rest)),
            "/diseases" => print!("{}", render::disease_reference()),
            "/actions" => print!("{}", render::quick_action_menu()),
            "/quick" => match krishi_chat::actions::action_by_id(rest) {
                Some(action) => exchange(&session, &mut printed, action.message, None).await,
                None => println!("Unknown quick action '{}'. Try /actions.", rest),
            },
            "/scan" => {
                if rest.is_empty() {
                    println!("Usage: /scan <image-ref>");
                } else {
                    // Mirrors the image picker: fixed caption plus the handle.
                    exchange(
                        &session,
                        &mut printed,
                        "Image uploaded for analysis",
                        Some(AttachmentRef::new(rest)),
                    )
                    .await;
                }
            }
            "/history" => {
                for message in session.messages() {
                    println!("{}", render::format_message(&message));
                }
            }
            _ if command.starts_with('/') => {
                println!("Unknown command '{}'. Type /help.", command);
            }
            _ => exchange(&session, &mut printed, line, None).await,
        }

        prompt();
    }

    session.close();
    tracing::info!("Goodbye");
    Ok(())
}
