use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;

mod commands;
mod interactive;

use serena_cli::config;

/// Serena: personalized wellness reports from short questionnaires.
#[derive(Debug, Parser)]
#[command(name = "serena", version)]
struct Cli {
    /// Config file. Defaults to `serena/config.json` in the user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a questionnaire in the terminal and read your report (default).
    Interactive,

    /// Generate a report from a saved answers file.
    ///
    /// The file holds one questionnaire as JSON, tagged by topic, e.g.
    /// `{"topic": "sleep", "name": "Ana", "sleepHours": "7-8 horas"}`.
    /// Missing answers take their defaults.
    Generate {
        #[arg(long)]
        answers: PathBuf,

        /// Also save the report as PDF.
        #[arg(long)]
        pdf: bool,

        /// Also save the report as DOCX.
        #[arg(long)]
        docx: bool,

        /// Directory for exported files. Overrides the configured one.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List the topics and their questions.
    Topics,

    /// Print the prompt an answers file produces, without calling the model.
    Prompt {
        #[arg(long)]
        answers: PathBuf,
    },

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the effective config, with the API key redacted.
    Show,

    /// Write a config file.
    Init {
        #[arg(long, value_enum, default_value_t = Provider::Gemini)]
        provider: Provider,

        /// AWS region, required for Bedrock.
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Provider {
    Gemini,
    Bedrock,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so report text on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => interactive::run(&config_path).await,
        Command::Generate {
            answers,
            pdf,
            docx,
            out,
        } => commands::generate(&config_path, &answers, pdf, docx, out).await,
        Command::Topics => commands::topics(),
        Command::Prompt { answers } => commands::prompt(&answers),
        Command::Config { command } => match command {
            ConfigCommand::Show => commands::config_show(&config_path),
            ConfigCommand::Init {
                provider,
                region,
                model,
                output_dir,
                force,
            } => {
                let provider = match provider {
                    Provider::Gemini => config::ProviderConfig::Gemini,
                    Provider::Bedrock => config::ProviderConfig::Bedrock {
                        region: region
                            .ok_or_else(|| eyre::eyre!("--region is required for bedrock"))?,
                    },
                };
                commands::config_init(&config_path, provider, model, output_dir, force)
            }
        },
    }
}
