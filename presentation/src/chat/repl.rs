//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::chat::command::ReplCommand;
use crate::output::console::ConsoleFormatter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tribunal_application::{
    RunAllAndJudgeUseCase, RunSingleUseCase, SessionManager, UndoError,
};
use tribunal_domain::Provider;

/// Number of past topics shown in the welcome banner.
const BANNER_TOPICS: usize = 3;

/// Interactive chat REPL
pub struct ChatRepl {
    run_all: RunAllAndJudgeUseCase,
    run_single: RunSingleUseCase,
    session: SessionManager,
}

impl ChatRepl {
    pub fn new(
        run_all: RunAllAndJudgeUseCase,
        run_single: RunSingleUseCase,
        session: SessionManager,
    ) -> Self {
        Self {
            run_all,
            run_single,
            session,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load input history
        let history_path = dirs::data_dir().map(|p| p.join("tribunal").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        let topics = self.session.recent_topics(BANNER_TOPICS);
        println!("{}", ConsoleFormatter::banner(&self.session.session_id(), &topics));

        loop {
            let prompt = format!("[{}] You: ", self.session.duration());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let Some(command) = Self::parse_input(&line, &mut rl) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());
                    if self.dispatch(command, &mut rl).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    self.exit_flow(&mut rl);
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Parse one line of input, resolving bare menu numbers to commands.
    ///
    /// Number choices 1-4 need a prompt, so they trigger a follow-up read.
    fn parse_input(line: &str, rl: &mut DefaultEditor) -> Option<ReplCommand> {
        let provider = match line.trim() {
            "1" => Some(Provider::Claude),
            "2" => Some(Provider::Gemini),
            "3" => Some(Provider::OpenAi),
            "4" => None,
            "5" => return Some(ReplCommand::Last),
            "6" => return Some(ReplCommand::Clear),
            "7" => return Some(ReplCommand::Undo),
            "8" => return Some(ReplCommand::Exit),
            _ => return ReplCommand::parse_line(line),
        };

        let prompt = rl.readline("Your question: ").ok()?;
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        Some(match provider {
            Some(p) => ReplCommand::Single(p, prompt.to_string()),
            None => ReplCommand::All(prompt.to_string()),
        })
    }

    /// Handle one parsed command. Returns true if the loop should exit.
    async fn dispatch(&mut self, command: ReplCommand, rl: &mut DefaultEditor) -> bool {
        match command {
            ReplCommand::Single(provider, prompt) => {
                self.ask_single(provider, &prompt).await;
                false
            }
            ReplCommand::All(prompt) => {
                self.ask_all(&prompt).await;
                false
            }
            ReplCommand::Menu => {
                println!("{}", ConsoleFormatter::menu());
                false
            }
            ReplCommand::Last => {
                self.show_last();
                false
            }
            ReplCommand::Save(name) => {
                self.save(name.as_deref());
                false
            }
            ReplCommand::Clear => {
                match self.session.clear() {
                    Ok(()) => println!(
                        "{}",
                        ConsoleFormatter::success("History cleared. Type `undo` to restore.")
                    ),
                    Err(e) => println!(
                        "{}",
                        ConsoleFormatter::failure(&format!("Could not clear history: {}", e))
                    ),
                }
                false
            }
            ReplCommand::Undo => {
                match self.session.undo() {
                    Ok(count) => println!(
                        "{}",
                        ConsoleFormatter::success(&format!("Restored {} entries", count))
                    ),
                    Err(UndoError::NothingToRestore) => println!(
                        "{}",
                        ConsoleFormatter::failure("No cleared session to restore")
                    ),
                    Err(e) => println!(
                        "{}",
                        ConsoleFormatter::failure(&format!("Could not restore history: {}", e))
                    ),
                }
                false
            }
            ReplCommand::Exit => {
                self.exit_flow(rl);
                true
            }
        }
    }

    async fn ask_single(&self, provider: Provider, prompt: &str) {
        println!();
        let outcome = self.run_single.execute(provider, prompt).await;
        println!("{}", ConsoleFormatter::format_reply(provider, &outcome.reply));
        if !outcome.persisted {
            println!(
                "{}",
                ConsoleFormatter::failure("Could not write history; this exchange may not persist")
            );
        }
    }

    async fn ask_all(&self, prompt: &str) {
        println!();
        let outcome = self.run_all.execute(prompt).await;
        println!("{}", ConsoleFormatter::format_answers(&outcome.answers));
        println!("{}", ConsoleFormatter::format_judge(&outcome.judge));
        if !outcome.persisted {
            println!(
                "{}",
                ConsoleFormatter::failure("Could not write history; this exchange may not persist")
            );
        }
    }

    fn show_last(&self) {
        match self.session.last_entry() {
            Ok(Some(entry)) => println!("\n{}\n", ConsoleFormatter::format_entry(&entry)),
            Ok(None) => println!("No exchanges yet."),
            Err(e) => println!(
                "{}",
                ConsoleFormatter::failure(&format!("Could not read history: {}", e))
            ),
        }
    }

    fn save(&self, name: Option<&str>) {
        match self.session.save(name) {
            Ok(saved_name) => println!(
                "{}",
                ConsoleFormatter::success(&format!("Session saved as {}", saved_name))
            ),
            Err(e) => println!(
                "{}",
                ConsoleFormatter::failure(&format!("Could not save session: {}", e))
            ),
        }
    }

    /// Offer a final save on the way out.
    fn exit_flow(&self, rl: &mut DefaultEditor) {
        let answer = rl
            .readline("Save current session before exiting? (y/n) ")
            .unwrap_or_else(|_| "n".to_string());
        if answer.trim().to_lowercase().starts_with('y') {
            let name = rl
                .readline("Session name (blank for timestamp): ")
                .unwrap_or_default();
            let name = name.trim();
            self.save((!name.is_empty()).then_some(name));
        }
        println!("Bye!");
    }
}
