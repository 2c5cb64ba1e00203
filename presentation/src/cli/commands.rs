//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tribunal
#[derive(Parser, Debug)]
#[command(name = "tribunal")]
#[command(author, version, about = "Multi-provider chat with judged consensus")]
#[command(long_about = r#"
Tribunal talks to Claude, Gemini, and OpenAI from one prompt.

Two ways to ask:
  single   Route a prompt to one provider, with recent history as context
  all      Ask all three providers, then a judge model picks the best answer

Without a prompt argument, an interactive chat session starts.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tribunal.toml     Project-level config
3. ~/.config/tribunal/config.toml   Global config

API keys are read from CLAUDE_API_KEY, GEMINI_API_KEY, and OPENAI_API_KEY.

Example:
  tribunal "What's the best way to handle errors in Rust?"
  tribunal --agent gemini "Summarize the borrow checker"
  tribunal
"#)]
pub struct Cli {
    /// One-shot prompt (omit to start interactive chat)
    pub prompt: Option<String>,

    /// Send the one-shot prompt to a single provider instead of all three
    #[arg(short, long, value_name = "PROVIDER")]
    pub agent: Option<String>,

    /// Start interactive chat mode even when a prompt is given
    #[arg(short, long)]
    pub chat: bool,

    /// One-shot mode: print only the winning answer text
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
