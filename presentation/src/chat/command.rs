//! Chat input parsing.
//!
//! Free text goes to all three providers by default; prefixes route it
//! elsewhere. Bare keywords are session commands.

use tribunal_domain::Provider;

/// One parsed line of chat input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Route the prompt to one provider.
    Single(Provider, String),
    /// Ask all three providers and judge.
    All(String),
    /// Show the command menu.
    Menu,
    /// Archive the session, optionally under a name.
    Save(Option<String>),
    /// Clear the live history (undoable once).
    Clear,
    /// Restore the last cleared history.
    Undo,
    /// Show the most recent exchange.
    Last,
    /// Leave the chat.
    Exit,
}

impl ReplCommand {
    /// Parse one input line. `None` for blank input.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match line.to_lowercase().as_str() {
            "menu" | "help" => return Some(Self::Menu),
            "exit" | "quit" => return Some(Self::Exit),
            "clear" => return Some(Self::Clear),
            "undo" => return Some(Self::Undo),
            "last" => return Some(Self::Last),
            "save" => return Some(Self::Save(None)),
            _ => {}
        }

        if let Some((prefix, rest)) = line.split_once(':') {
            let rest = rest.trim();
            match prefix.trim().to_lowercase().as_str() {
                "save" => {
                    let name = (!rest.is_empty()).then(|| rest.to_string());
                    return Some(Self::Save(name));
                }
                "all" if !rest.is_empty() => return Some(Self::All(rest.to_string())),
                "claude" if !rest.is_empty() => {
                    return Some(Self::Single(Provider::Claude, rest.to_string()));
                }
                "gemini" if !rest.is_empty() => {
                    return Some(Self::Single(Provider::Gemini, rest.to_string()));
                }
                "openai" if !rest.is_empty() => {
                    return Some(Self::Single(Provider::OpenAi, rest.to_string()));
                }
                _ => {}
            }
        }

        Some(Self::All(line.to_string()))
    }
}
