//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat.
///
/// Shows who the customer is, the language, and which Completion Service
/// model answers.
pub fn print_welcome_banner(contact: &str, language: &str, provider: &str, model: &str) {
    let contact = if contact.is_empty() {
        "(not set)"
    } else {
        contact
    };

    println!();
    println!("  💬 {}", style("Deskmate Support").cyan().bold());
    println!(
        "  {}",
        style("Ask about an order, a refund, a return, or anything else.").dim()
    );
    println!();
    println!("  {}  {}", style("Contact:").bold(), style(contact).dim());
    println!("  {}  {}", style("Language:").bold(), style(language).dim());
    println!(
        "  {}  {}",
        style("Model:").bold(),
        style(format!("{provider}/{model}")).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /end to finish, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
