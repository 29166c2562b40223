//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and map onto session lifecycle events or local
//! controls. Anything else typed at the prompt is a query.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear event: empty the conversation history.
    Clear,
    /// End event: close the session and show the farewell.
    End,
    /// Set the contact identifier.
    Contact(String),
    /// Set the conversation language.
    Language(String),
    /// Show conversation history, most recent first.
    History,
    /// Leave the chat.
    Exit,
    /// Unknown command or missing argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts
        .next()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/clear" | "/cls" => ChatCommand::Clear,
        "/end" => ChatCommand::End,
        "/history" => ChatCommand::History,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        "/contact" => match arg {
            Some(contact) => ChatCommand::Contact(contact),
            None => ChatCommand::Unknown("/contact requires an email or phone".to_string()),
        },
        "/lang" | "/language" => match arg {
            Some(language) => ChatCommand::Language(language),
            None => ChatCommand::Unknown("/lang requires a language name".to_string()),
        },
        other => ChatCommand::Unknown(other.to_string()),
    };
    Some(command)
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}        {}", style("/help").cyan(), "Show this help message");
    println!("  {}       {}", style("/clear").cyan(), "Clear the conversation history");
    println!("  {}         {}", style("/end").cyan(), "End the session and say goodbye");
    println!("  {} {}", style("/contact ID").cyan(), "Set your email or phone");
    println!("  {}  {}", style("/lang NAME").cyan(), "Set the language (English, Telugu, Hindi)");
    println!("  {}     {}", style("/history").cyan(), "Show the conversation, newest first");
    println!("  {}        {}", style("/exit").cyan(), "Leave the chat");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lifecycle_commands() {
        assert_eq!(parse("/clear"), Some(ChatCommand::Clear));
        assert_eq!(parse("/cls"), Some(ChatCommand::Clear));
        assert_eq!(parse("/end"), Some(ChatCommand::End));
        assert_eq!(parse("  /END  "), Some(ChatCommand::End));
    }

    #[test]
    fn test_parse_help_and_exit() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_contact_and_language() {
        assert_eq!(
            parse("/contact john@example.com"),
            Some(ChatCommand::Contact("john@example.com".to_string()))
        );
        assert_eq!(
            parse("/lang Telugu"),
            Some(ChatCommand::Language("Telugu".to_string()))
        );
        assert!(matches!(parse("/contact"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/lang   "), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("where is my order?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
