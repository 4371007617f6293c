//! Command parsing for the command line

use crate::words::IterationMode;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a word: :add <word>
    Add(String),
    /// Delete a word, or the current one: :delete [word]
    Delete(Option<String>),
    /// Change iteration mode: :mode <random|sequential|alphabetical>
    Mode(IterationMode),
    /// Show the translation: :reveal
    Reveal,
    /// Quit the application: :q or :quit
    Quit,
    /// Show help: :help or :h
    Help,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument present but not understood
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        // Blank words are rejected later, without a message
        "add" | "a" => ParseResult::Ok(Command::Add(args.to_string())),
        "delete" | "del" | "remove" | "rm" | "d" => {
            let word = (!args.is_empty()).then(|| args.to_string());
            ParseResult::Ok(Command::Delete(word))
        }
        "mode" | "m" => {
            if args.is_empty() {
                ParseResult::MissingArgument("mode".to_string())
            } else {
                match IterationMode::parse(args) {
                    Some(mode) => ParseResult::Ok(Command::Mode(mode)),
                    None => ParseResult::InvalidArgument(args.to_string()),
                }
            }
        }
        "reveal" | "r" | "show" => ParseResult::Ok(Command::Reveal),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}
