use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tzh::cli::commands::{configure, interactive, status, translate};
use tzh::cli::{Args, Command};
use tzh::config::ConfigUpdate;
use tzh::error::TzhError;
use tzh::output::{self, OutputConfig, OutputFormat};
use tzh::translation::{Languages, print_languages};
use tzh::ui::Style;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    init_logging(args.verbose);
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run(args.command).await {
        let code = err
            .downcast_ref::<TzhError>()
            .map_or(exitcode::SOFTWARE, TzhError::exit_code);
        eprintln!("{} {err}", Style::error("error:"));
        std::process::exit(code);
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Configure {
            endpoint,
            model,
            api_key,
            temperature,
            max_tokens,
            timeout,
        } => {
            configure::run_configure(ConfigUpdate {
                endpoint,
                model,
                api_key,
                temperature,
                max_tokens,
                timeout,
            })?;
        }
        Command::Translate {
            text,
            stream,
            plain,
            to,
            from,
        } => {
            let options = translate::TranslateOptions {
                text,
                stream,
                format: OutputFormat::from_plain_flag(plain),
                languages: Languages {
                    target: to,
                    source: from,
                },
            };
            translate::run_translate(options).await?;
        }
        Command::Status => {
            status::run_status()?;
        }
        Command::Interactive { to, from } => {
            interactive::run_interactive(Languages {
                target: to,
                source: from,
            })
            .await?;
        }
        Command::Languages => {
            print_languages();
        }
    }

    Ok(())
}

/// Logs go to stderr; `TZH_LOG` sets the filter, `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tzh=debug")
    } else {
        EnvFilter::try_from_env("TZH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
