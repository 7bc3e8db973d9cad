use clap::{Parser, Subcommand};

use crate::translation::DEFAULT_TARGET_LANGUAGE;

#[derive(Parser, Debug)]
#[command(name = "tzh")]
#[command(about = "AI-powered translation CLI tool")]
#[command(version)]
pub struct Args {
    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress status messages and the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save the API endpoint, model and key
    #[command(visible_alias = "c")]
    Configure {
        /// API endpoint URL (e.g. https://api.deepseek.com/v1)
        #[arg(long)]
        endpoint: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// API key
        #[arg(long)]
        api_key: Option<String>,

        /// Sampling temperature (0.0 to 2.0)
        #[arg(long)]
        temperature: Option<f32>,

        /// Completion token cap (0 for no cap)
        #[arg(long)]
        max_tokens: Option<u32>,

        /// HTTP timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Translate text (reads stdin when no text is given)
    #[command(visible_alias = "t")]
    Translate {
        /// Text to translate; multiple words are joined with spaces
        text: Vec<String>,

        /// Translate line by line, printing each line as it completes
        #[arg(short = 's', long)]
        stream: bool,

        /// Print only the translated text
        #[arg(short = 'p', long)]
        plain: bool,

        /// Target language code (e.g. zh, en, ja)
        #[arg(short = 't', long = "to", default_value = DEFAULT_TARGET_LANGUAGE)]
        to: String,

        /// Source language code (auto-detected if omitted)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,
    },
    /// Show the saved configuration
    #[command(visible_alias = "s")]
    Status,
    /// Translate each line as you type it
    #[command(visible_alias = "i")]
    Interactive {
        /// Target language code (e.g. zh, en, ja)
        #[arg(short = 't', long = "to", default_value = DEFAULT_TARGET_LANGUAGE)]
        to: String,

        /// Source language code (auto-detected if omitted)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,
    },
    /// List known language codes
    #[command(visible_alias = "l")]
    Languages,
}
