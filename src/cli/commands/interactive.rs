//! Interactive mode: translate each line as it is entered.

use anyhow::Result;
use inquire::{InquireError, Text};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::warn;

use crate::config::{Config, ConfigStore};
use crate::error::TzhError;
use crate::translation::{
    Languages, TranslationClient, TranslationRequest, Transport, language_name,
};
use crate::ui::{Spinner, Style};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run_interactive(languages: Languages) -> Result<()> {
    let config = ConfigStore::new()?.load()?;
    let client = TranslationClient::from_config(&config)?;
    let mut stdout = io::stdout();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        print_header(&config, &languages);
        run_session(&client, &config, &languages, prompt_lines(), &mut stdout).await?;
        println!("{}", Style::success("Goodbye!"));
    } else {
        let lines = stdin
            .lock()
            .lines()
            .map(|line| line.map_err(|e| TzhError::io("Failed to read from stdin", e).into()));
        run_session(&client, &config, &languages, lines, &mut stdout).await?;
    }

    Ok(())
}

/// Translates every non-blank line from `lines`, writing results to `out`.
///
/// A failed translation is reported on stderr and the session continues.
/// Returns the number of failed lines.
pub async fn run_session<T: Transport>(
    client: &TranslationClient<T>,
    config: &Config,
    languages: &Languages,
    lines: impl Iterator<Item = Result<String>>,
    out: &mut impl Write,
) -> Result<usize> {
    let mut failures = 0;

    for line in lines {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let spinner = Spinner::new("Translating...");
        let result = client
            .translate(&TranslationRequest::new(text, config, languages))
            .await;
        spinner.stop();

        match result {
            Ok(translation) => {
                writeln!(out, "{}", Style::translation(&translation.translated_text))?;
                out.flush()?;
            }
            Err(e) => {
                warn!(error = %e, "interactive translation failed");
                eprintln!("{} {e}", Style::error("Translation failed:"));
                failures += 1;
            }
        }
    }

    Ok(failures)
}

/// Lines typed at the prompt; ends on Ctrl+C or Esc.
fn prompt_lines() -> impl Iterator<Item = Result<String>> {
    std::iter::from_fn(|| {
        match Text::new("tzh>")
            .with_help_message("Type text to translate, Ctrl+C to quit")
            .prompt()
        {
            Ok(line) => Some(Ok(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => None,
            Err(e) => Some(Err(e.into())),
        }
    })
}

fn print_header(config: &Config, languages: &Languages) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("tzh"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "  {} {}",
        Style::label("model: "),
        Style::value(&config.model)
    );
    println!(
        "  {} {}",
        Style::label("to:    "),
        Style::value(language_name(&languages.target))
    );
    let source = languages
        .source
        .as_deref()
        .map_or_else(|| "auto-detect".into(), language_name);
    println!("  {} {}", Style::label("from:  "), Style::value(source));
    println!();
}
