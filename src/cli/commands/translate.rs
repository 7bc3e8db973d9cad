use anyhow::Result;
use std::io::{self, Write};

use crate::config::{Config, ConfigStore};
use crate::error::TzhError;
use crate::input::InputReader;
use crate::output::{self, OutputFormat};
use crate::translation::{
    Languages, TranslationClient, TranslationRequest, Transport, is_single_word,
};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub stream: bool,
    pub format: OutputFormat,
    pub languages: Languages,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    // Config comes first so a missing config never costs a stdin read or a request.
    let config = ConfigStore::new()?.load()?;

    let source_text = InputReader::read(&options.text)?;
    if source_text.trim().is_empty() {
        return Err(TzhError::EmptyInput.into());
    }

    let client = TranslationClient::from_config(&config)?;
    let job = TranslationJob::new(&config, &options.languages, options.format, &source_text);

    let mut stdout = io::stdout();
    if options.stream {
        job.translate_lines(&client, &source_text, &mut stdout).await?;
    } else {
        job.translate_whole(&client, &source_text, &mut stdout).await?;
    }

    Ok(())
}

/// Settings shared by every request of one `tzh t` run.
pub struct TranslationJob<'a> {
    pub config: &'a Config,
    pub languages: &'a Languages,
    pub format: OutputFormat,
    /// Set from the whole input; multi-line input always gets the translator prompt.
    pub word_mode: bool,
}

impl<'a> TranslationJob<'a> {
    pub fn new(
        config: &'a Config,
        languages: &'a Languages,
        format: OutputFormat,
        input: &str,
    ) -> Self {
        Self {
            config,
            languages,
            format,
            word_mode: is_single_word(input),
        }
    }
}

impl TranslationJob<'_> {
    /// Translates `text` in one request.
    pub async fn translate_whole<T: Transport>(
        &self,
        client: &TranslationClient<T>,
        text: &str,
        out: &mut impl Write,
    ) -> Result<(), TzhError> {
        self.translate_one(client, text.trim(), out).await
    }

    /// Translates `text` one line at a time, printing each result before
    /// sending the next request. Blank lines are echoed without a request.
    pub async fn translate_lines<T: Transport>(
        &self,
        client: &TranslationClient<T>,
        text: &str,
        out: &mut impl Write,
    ) -> Result<(), TzhError> {
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                output::write_blank(out).map_err(write_error)?;
                continue;
            }
            self.translate_one(client, line, out).await?;
        }
        Ok(())
    }

    async fn translate_one<T: Transport>(
        &self,
        client: &TranslationClient<T>,
        text: &str,
        out: &mut impl Write,
    ) -> Result<(), TzhError> {
        let request = TranslationRequest::new(text, self.config, self.languages)
            .with_word_mode(self.word_mode);

        let spinner =
            (self.format == OutputFormat::Decorated).then(|| Spinner::new("Translating..."));
        let result = client.translate(&request).await;
        if let Some(spinner) = spinner {
            spinner.stop();
        }

        output::write_translation(
            out,
            self.format,
            text,
            &result?.translated_text,
            &self.languages.target,
        )
        .map_err(write_error)
    }
}

fn write_error(e: io::Error) -> TzhError {
    TzhError::io("Failed to write output", e)
}
