// Nexus campus assistant entry point
// Terminal chat over a rule-based reply selector

mod actors;
mod brain;
mod cli;
mod config;
mod error;
mod models;
mod render;
mod telemetry;

#[cfg(test)]
mod tests;

use actors::session::SessionHandle;
use brain::{templates, IntentClassifier};
use clap::Parser;
use cli::Args;
use config::ChatConfig;
use error::AppError;
use render::Style;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP_TEXT: &str = "Commands: /help, /transcript (JSON dump), /quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    telemetry::init_tracing(args.log_format)?;

    let config = ChatConfig::from_args(&args)?;
    let style = if args.plain { Style::Plain } else { Style::Ansi };

    info!("--- Chat Configuration ---");
    info!("Assistant: {}", config.assistant_name);
    info!(
        "Typing delay: {}-{} ms",
        config.typing_delay_min_ms, config.typing_delay_max_ms
    );
    info!("--------------------------");

    if let Some(utterance) = args.once.as_deref() {
        return run_once(utterance, args.json, style);
    }

    run_repl(&config, style).await?;
    Ok(())
}

/// Classifies a single utterance and prints the reply, no session or delay.
fn run_once(utterance: &str, json: bool, style: Style) -> anyhow::Result<()> {
    let result = IntentClassifier::new().classify(utterance);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render::render_content(result.response, style));
    }
    Ok(())
}

async fn run_repl(config: &ChatConfig, style: Style) -> Result<(), AppError> {
    let session = SessionHandle::new(config);
    let transcript = session.transcript().await?;

    println!(
        "{}\n",
        render::render_message(transcript.welcome(), &config.assistant_name, style)
    );
    print_suggestions(&session.suggestions().await?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{}", HELP_TEXT);
                continue;
            }
            "/transcript" => {
                let transcript = session.transcript().await?;
                println!("{}", serde_json::to_string_pretty(&transcript)?);
                continue;
            }
            _ => {}
        }

        let text = pick_suggestion(&session, input).await?;
        println!("{} is typing...", config.assistant_name);

        match session.send(text).await {
            Ok(turn) => {
                println!(
                    "\n{}\n",
                    render::render_message(&turn.reply, &config.assistant_name, style)
                );
            }
            Err(AppError::Validation(reason)) => warn!("Ignored message: {}", reason),
            Err(e) => return Err(e),
        }
    }

    session.shutdown().await?;
    Ok(())
}

/// While chips are on offer, a bare number selects one; otherwise the input is sent as typed.
async fn pick_suggestion(session: &SessionHandle, input: &str) -> Result<String, AppError> {
    if let Ok(position) = input.parse::<usize>() {
        if !session.suggestions().await?.is_empty() {
            if let Some(chip) = templates::suggestion(position) {
                return Ok(chip.to_string());
            }
        }
    }
    Ok(input.to_string())
}

fn print_suggestions(chips: &[&str]) {
    if chips.is_empty() {
        return;
    }
    println!("Try one of these (type its number):");
    for (i, chip) in chips.iter().enumerate() {
        println!("  {}. {}", i + 1, chip);
    }
    println!("{}\n", HELP_TEXT);
}
