//! Navigation commands
//!
//! The presentation layer never touches session state directly. It sends one
//! of these and gets a fresh [`Page`](crate::Page) back.
//! - `@back` / `@b` — previous page
//! - `@forward` / `@f` — next page
//! - `@reload` / `@r` — fetch the current page again
//! - a number — follow the entry with that number
//! - anything else — open it as an address

use burrow_protocol::Target;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Resolve and open typed address text
    Open(String),
    /// Open an already structured target
    Visit(Target),
    /// Follow the n-th entry of the current page, counting from 1
    Select(usize),
    Back,
    Forward,
    Reload,
}

impl Command {
    /// Parse a line of user input. Anything unrecognized is an address.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        if let Some(name) = input.strip_prefix('@') {
            match name.to_lowercase().as_str() {
                "back" | "b" => return Command::Back,
                "forward" | "fwd" | "f" => return Command::Forward,
                "reload" | "r" => return Command::Reload,
                _ => {}
            }
        }

        match input.parse::<usize>() {
            Ok(number) if number > 0 => Command::Select(number),
            _ => Command::Open(input.to_string()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Open(_) => "open",
            Command::Visit(_) => "visit",
            Command::Select(_) => "select",
            Command::Back => "back",
            Command::Forward => "forward",
            Command::Reload => "reload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_commands() {
        assert_eq!(Command::parse("@back"), Command::Back);
        assert_eq!(Command::parse("@B"), Command::Back);
        assert_eq!(Command::parse("@forward"), Command::Forward);
        assert_eq!(Command::parse("  @f "), Command::Forward);
        assert_eq!(Command::parse("@reload"), Command::Reload);
    }

    #[test]
    fn test_parse_select() {
        assert_eq!(Command::parse("3"), Command::Select(3));
        // Zero is not an entry number
        assert_eq!(Command::parse("0"), Command::Open("0".to_string()));
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            Command::parse("gopher://sdf.org:70/1/users"),
            Command::Open("gopher://sdf.org:70/1/users".to_string())
        );
        assert_eq!(
            Command::parse("@unknown"),
            Command::Open("@unknown".to_string())
        );
        assert_eq!(Command::parse(""), Command::Open(String::new()));
    }
}
