use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use money_mirror::Config;
use money_mirror::prompts::{FilePromptSource, PromptSource, load_prompt_document};
use money_mirror::quiz::{Answer, QuizEngine};
use money_mirror::web::types::ScoreResponse;
use money_mirror::web::serve;

#[derive(Parser)]
#[command(
    name = "money-mirror",
    version,
    about = "Money-script quiz scoring and tarot-card image service"
)]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true, env = "LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP service.
    Serve {
        /// Override HOST.
        #[arg(long)]
        host: Option<String>,

        /// Override PORT.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Score twelve answers (1-5, or '-' for unanswered) and print the result.
    Score {
        #[arg(required = true, allow_hyphen_values = true)]
        answers: Vec<String>,
    },

    /// Parse a prompt document and report which profiles lack a card prompt.
    Prompts {
        /// Read this file instead of the configured source.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("money_mirror=info,tower_http=info"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

fn parse_answer(raw: &str) -> anyhow::Result<Answer> {
    if raw == "-" {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|e| anyhow::anyhow!("invalid answer '{}': {}", raw, e))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = Config::from_env()?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let (state, addr, server) = serve(&config).await?;
            println!("Money Mirror listening on http://{}", addr);

            tokio::signal::ctrl_c().await?;
            state.shutdown().await;
            server.await?;
        }
        Commands::Score { answers } => {
            let answers = answers
                .iter()
                .map(|a| parse_answer(a))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let engine = QuizEngine::builtin()?;
            for (slot, script) in engine.unanswered(&answers) {
                tracing::warn!(
                    question = slot + 1,
                    script = %script,
                    "Unanswered question scores zero"
                );
            }

            let outcome = engine.process(&answers)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&ScoreResponse::from(outcome))?
            );
        }
        Commands::Prompts { file } => {
            let source: Arc<dyn PromptSource> = match file {
                Some(path) => Arc::new(FilePromptSource::new(path)),
                None => {
                    let config = Config::from_env()?;
                    config.prompts.source(config.images.request_timeout)
                }
            };

            let document = load_prompt_document(source.as_ref()).await?;
            let missing = document.missing_codes();

            println!("Source:          {}", source.location());
            println!("Master prompt:   {} chars", document.master_prompt.chars().count());
            println!("Negative prompt: {} chars", document.negative_prompt.chars().count());
            println!("Card prompts:    {}", document.card_prompts.len());
            if missing.is_empty() {
                println!("All 16 profiles have a card prompt.");
            } else {
                let codes: Vec<String> = missing.iter().map(|c| c.to_string()).collect();
                println!("Missing:         {}", codes.join(", "));
            }
        }
    }

    Ok(())
}
