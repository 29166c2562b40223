//! Main chat loop orchestration.
//!
//! Each input line becomes exactly one lifecycle event on a locally owned
//! [`Session`], handled to completion before the next line is read. After
//! every event the loop renders any pending farewell.

use std::time::Duration;

use console::{Term, style};
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use deskmate_core::session::controller::SessionController;
use deskmate_types::chat::Session;
use deskmate_types::language::Language;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Ask for whatever identity input was not given on the command line.
///
/// Without a terminal the contact stays empty and the language defaults.
fn resolve_identity(
    contact: Option<String>,
    language: Option<String>,
) -> anyhow::Result<(String, Language)> {
    let interactive = Term::stdout().is_term();

    let language = match language {
        Some(name) => name.parse::<Language>()?,
        None if interactive => {
            let names: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
            let index = Select::new()
                .with_prompt("Language")
                .items(&names)
                .default(0)
                .interact()?;
            Language::ALL[index]
        }
        None => Language::default(),
    };

    let contact = match contact {
        Some(contact) => contact,
        None if interactive => Input::<String>::new()
            .with_prompt("Email or phone (optional)")
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    Ok((contact, language))
}

/// Render every pending farewell, oldest first.
///
/// A failure is printed and leaves the farewell pending; the next pass
/// retries it.
async fn render_farewells(controller: &SessionController, session: &mut Session) {
    while !session.pending_farewells.is_empty() {
        let spinner = thinking_spinner();
        let result = controller.take_farewell(session).await;
        spinner.finish_and_clear();

        match result {
            Ok(Some(farewell)) => {
                println!();
                println!("  {}", style(farewell).cyan().bold());
                println!();
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("\n  {} {e}", style("!").red().bold());
                eprintln!(
                    "  {}",
                    style("The goodbye message will be retried after your next input.").dim()
                );
                break;
            }
        }
    }
}

fn print_history(session: &Session) {
    println!();
    if session.turn_history.is_empty() {
        println!("  {}", style("No conversation yet.").dim());
    }
    for turn in session.history_newest_first() {
        println!("  {} {}", style("You").green().bold(), turn.query);
        println!(
            "  {} {}",
            style(session.persona_label()).cyan().bold(),
            turn.response
        );
        println!();
    }
}

/// Run the interactive support chat.
pub async fn run_chat_loop(
    state: &AppState,
    contact: Option<String>,
    language: Option<String>,
) -> anyhow::Result<()> {
    let (contact, language) = resolve_identity(contact, language)?;
    let controller = state.controller.as_ref();
    let mut session = Session::with_identity(contact, language);

    print_welcome_banner(
        &session.contact_identifier,
        session.language.name(),
        &state.provider_name,
        &state.model,
    );
    info!(language = %session.language, "terminal chat started");

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Goodbye.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Goodbye.").dim());
                    break;
                }
                ChatCommand::Clear => {
                    controller.clear(&mut session);
                    println!("\n  {}\n", style("History cleared.").dim());
                }
                ChatCommand::End => {
                    controller.end(&mut session);
                    render_farewells(controller, &mut session).await;
                    println!(
                        "  {}\n",
                        style("Session ended. Set /contact and /lang to start over.").dim()
                    );
                }
                ChatCommand::Contact(contact) => {
                    println!("\n  {} {}\n", style("Contact set:").bold(), contact);
                    session.contact_identifier = contact;
                }
                ChatCommand::Language(name) => match name.parse::<Language>() {
                    Ok(language) => {
                        session.language = language;
                        println!("\n  {} {}\n", style("Language set:").bold(), language);
                    }
                    Err(e) => println!("\n  {} {e}\n", style("?").yellow().bold()),
                },
                ChatCommand::History => print_history(&session),
                ChatCommand::Unknown(what) => println!(
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(what).dim()
                ),
            }
            render_farewells(controller, &mut session).await;
            continue;
        }

        session.pending_query = text;
        let spinner = thinking_spinner();
        let result = controller.submit(&mut session).await;
        spinner.finish_and_clear();

        match result {
            Ok(Some(turn)) => {
                println!();
                println!(
                    "  {} {}",
                    style(session.persona_label()).cyan().bold(),
                    turn.response
                );
                println!();
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("\n  {} {e}", style("!").red().bold());
                eprintln!(
                    "  {}",
                    style("Nothing was added to the conversation. Try again, or /exit to quit.")
                        .dim()
                );
            }
        }
        render_farewells(controller, &mut session).await;
    }

    chat_input.flush();
    Ok(())
}
