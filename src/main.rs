use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;

use multilang_translator::api::ApiClient;
use multilang_translator::catalog::Catalog;
use multilang_translator::config::Config;
use multilang_translator::detect::WhatlangDetector;
use multilang_translator::presenter::{Clipboard, Notice, Presenter, Severity, Speech, SystemClipboard};
use multilang_translator::session::{Session, TranslationState};

/// Clipboard that degrades to an error notice when the OS clipboard is
/// unavailable (e.g. headless terminals).
enum MainClipboard {
    System(SystemClipboard),
    Unavailable,
}

impl Clipboard for MainClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        match self {
            MainClipboard::System(clipboard) => clipboard.write(text),
            MainClipboard::Unavailable => anyhow::bail!("no clipboard available"),
        }
    }
}

/// Terminal stand-in for the OS speech synthesizer.
struct LoggingSpeech;

impl Speech for LoggingSpeech {
    fn speak(&mut self, text: &str, lang_tag: &str) {
        info!("Speaking ({}): {}", lang_tag, text);
    }
}

fn show_notice(notice: &Notice) {
    let label = match notice.severity {
        Severity::Success => "ok",
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    println!("[{}] {}", label, notice.message);
}

fn show_languages(session: &Session) {
    for entry in Catalog::get().all() {
        let mark = if session.targets().contains(entry.code) { "x" } else { " " };
        println!("  [{}] {} {} ({})", mark, entry.icon, entry.name, entry.code);
    }
}

fn show_results(session: &Session) {
    let Some(results) = session.results() else {
        println!("No translations yet.");
        return;
    };
    for (code, text) in results {
        match Catalog::get().get_by_code(code) {
            Some(entry) => println!("{} {}: {}", entry.icon, entry.name, text),
            None => println!("{}: {}", code, text),
        }
    }
}

fn show_detected(session: &Session) {
    match session.detected() {
        Some(entry) => println!("Detected Language: {} {}", entry.icon, entry.name),
        None => println!("Detected Language: Unknown"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("multilang_translator=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;
    let api = ApiClient::new(&config.api_url, config.request_timeout)?;

    let detector = WhatlangDetector;
    let mut session = Session::new();

    let clipboard = match SystemClipboard::new() {
        Ok(clipboard) => MainClipboard::System(clipboard),
        Err(e) => {
            info!("Clipboard unavailable: {:#}", e);
            MainClipboard::Unavailable
        }
    };
    let mut presenter = Presenter::new(clipboard, LoggingSpeech);

    println!("Multi-Language Translator ({})", config.api_url);
    println!("Type text to translate. Commands: /langs, /toggle <code>, /translate, /copy <code>, /read <code>, /quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches('\n');

        match line.split_once(' ').map_or((line, ""), |(cmd, rest)| (cmd, rest.trim())) {
            ("/quit", _) => break,
            ("/langs", _) => show_languages(&session),
            ("/toggle", code) => {
                if Catalog::get().get_by_code(code).is_none() {
                    show_notice(&Notice::warning(format!("Unknown language code: {}", code)));
                    continue;
                }
                let want = !session.targets().contains(code);
                if let Err(e) = session.toggle_target(code, want) {
                    // The checkbox stays unchecked; the guard refused it.
                    show_notice(&Notice::warning(e.to_string()));
                } else {
                    show_languages(&session);
                }
            }
            ("/translate", _) => {
                if let Some(notice) = session.submit(&api).await {
                    show_notice(&notice);
                }
                if matches!(session.state(), TranslationState::Loaded(_)) {
                    show_detected(&session);
                }
                show_results(&session);
            }
            ("/copy", code) => {
                match session.results().and_then(|r| r.get(code)) {
                    Some(text) => {
                        let text = text.clone();
                        show_notice(&presenter.copy(&text));
                    }
                    None => show_notice(&Notice::warning(format!("No translation for {}", code))),
                }
            }
            ("/read", code) => {
                match session.results().and_then(|r| r.get(code)) {
                    Some(text) => {
                        let text = text.clone();
                        presenter.read_aloud(&text, code);
                    }
                    None => show_notice(&Notice::warning(format!("No translation for {}", code))),
                }
            }
            _ => {
                session.set_text(&detector, line);
                show_detected(&session);
            }
        }
    }

    Ok(())
}
