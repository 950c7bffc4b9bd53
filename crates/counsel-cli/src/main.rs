use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::{EnvFilter, fmt};

use counsel_core::persona::{PersonaKey, catalog, persona_for};
use counsel_core::session::{ChatSession, Turn};
use counsel_interaction::credentials::default_chain;
use counsel_interaction::openai::OpenAiChatClient;
use counsel_interaction::secret::SecretStore;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    personas: Vec<&'static str>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/persona".to_string(),
                "/personas".to_string(),
                "/history".to_string(),
            ],
            personas: PersonaKey::ALL.map(|key| key.name()).to_vec(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // Complete the persona argument after "/persona "
        if let Some(partial) = line.strip_prefix("/persona ") {
            let start = line.len() - partial.len();
            let candidates: Vec<Pair> = self
                .personas
                .iter()
                .filter(|name| name.starts_with(partial))
                .map(|name| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return Ok((start, candidates));
        }

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            return Ok((0, candidates));
        }

        Ok((0, vec![]))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if let Some(partial) = line.strip_prefix("/persona ") {
            return self
                .personas
                .iter()
                .find(|name| name.starts_with(partial) && name.len() > partial.len())
                .map(|name| name[partial.len()..].to_string());
        }

        if line.starts_with('/') && !line.contains(' ') {
            return self
                .commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string());
        }

        None
    }
}

impl Validator for CliHelper {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the optional model override from the secret file. Any problem with
/// the file simply leaves the default model in place.
fn model_override() -> Option<String> {
    SecretStore::new()
        .ok()
        .and_then(|store| store.load().ok())
        .and_then(|config| config.openai)
        .and_then(|openai| openai.model_name)
}

fn print_personas(current: PersonaKey) {
    for persona in catalog() {
        let marker = if persona.key == current { "*" } else { " " };
        println!(
            "{} {} {}",
            marker,
            format!("{:<11}", persona.key.name()).bright_cyan(),
            persona.instruction.bright_black()
        );
    }
    println!();
}

fn print_transcript(session: &ChatSession) {
    if session.transcript().is_empty() {
        println!("{}", "No conversation yet.".bright_black());
        println!();
        return;
    }

    for turn in session.transcript().turns() {
        match turn {
            Turn::User { text, .. } => {
                println!("{}", format!("> {}", text.trim()).green());
            }
            Turn::Assistant { text, persona, .. } => {
                println!("{}", format!("[{}]", persona_for(*persona).label).bright_magenta());
                for line in text.lines() {
                    println!("{}", line.bright_blue());
                }
            }
        }
        println!();
    }
}

fn print_reply(label: &str, reply: &str) {
    println!("{}", format!("[{}]", label).bright_magenta());
    for line in reply.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

/// The main entry point for the Counsel REPL.
///
/// Sets up a rustyline-based loop that:
/// 1. Wires the session to the OpenAI client and the credential chain
/// 2. Provides command completion for /persona, /personas, and /history
/// 3. Submits each plain line to the currently selected expert
/// 4. Displays colored output for user, expert, and system messages
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    // ===== Session Wiring =====
    let chain = default_chain()?;
    let provider = Arc::new(OpenAiChatClient::new());
    let mut session = ChatSession::new(PersonaKey::Legal, provider, chain);
    if let Some(model) = model_override() {
        session = session.with_model(model);
    }

    // ===== REPL Setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Counsel ===".bright_magenta().bold());
    println!(
        "{}",
        "Ask the selected expert anything. '/persona <name>' switches expert, '/personas' lists them,"
            .bright_black()
    );
    println!(
        "{}",
        "'/history' replays the conversation, and 'quit' exits.".bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let prompt = format!("{} >> ", session.persona());
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // An empty submission never reaches the provider
                if trimmed.is_empty() {
                    println!("{}", "Please enter a question.".yellow());
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                let mut parts = trimmed.split_whitespace();
                match parts.next().unwrap_or_default() {
                    "/personas" => {
                        print_personas(session.persona());
                    }
                    "/persona" => match parts.next() {
                        Some(name) => match name.parse::<PersonaKey>() {
                            Ok(key) => {
                                session.select_persona(key);
                                println!(
                                    "{}",
                                    format!(
                                        "Now consulting the {} expert.",
                                        persona_for(key).label
                                    )
                                    .bright_yellow()
                                );
                            }
                            Err(err) => {
                                println!("{}", err.to_string().red());
                                println!(
                                    "{}",
                                    format!(
                                        "Available personas: {}",
                                        PersonaKey::ALL.map(|key| key.name()).join(", ")
                                    )
                                    .bright_black()
                                );
                            }
                        },
                        None => {
                            println!(
                                "{}",
                                format!(
                                    "Current expert: {}. Usage: /persona <name>",
                                    session.persona()
                                )
                                .bright_black()
                            );
                        }
                    },
                    "/history" => {
                        print_transcript(&session);
                    }
                    command if command.starts_with('/') => {
                        println!("{}", "Unknown command".bright_black());
                    }
                    _ => {
                        let persona = session.persona();
                        let label = persona_for(persona).label;
                        println!("{}", format!("Consulting the {} expert...", label).bright_black());

                        match session.submit(trimmed, persona).await {
                            Ok(reply) => print_reply(label, &reply),
                            Err(err) if err.is_validation() => {
                                println!("{}", err.to_string().yellow());
                            }
                            Err(err) if err.is_configuration() => {
                                println!("{}", err.to_string().bright_yellow());
                            }
                            Err(err) => {
                                eprintln!("{}", format!("Error: {}", err).red());
                                println!(
                                    "{}",
                                    "Nothing was recorded; you can submit again.".bright_black()
                                );
                            }
                        }
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
