mod display;

use anyhow::Result;
use clap::{Parser, Subcommand};
use display::ConsoleArea;
use rag_frontend::*;
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal front-end for the document question-answering server.
#[derive(Parser)]
#[command(name = "rag-console", version)]
struct Cli {
    /// Server base URL, overrides RAG_API_URL
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a PDF or text document
    Upload { path: Option<PathBuf> },
    /// Ask a question about the uploaded documents
    Ask { question: Option<String> },
    /// Check that the server is up
    Health,
}

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = FrontendConfig::from_env()?;
    if let Some(url) = cli.url {
        config = config.with_base_url(url)?;
    }

    log::info!("Using server at {}", config.base_url);
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&config.base_url));

    match cli.command {
        Command::Upload { path } => {
            let files = SelectedFiles::new();
            if let Some(path) = path {
                files.select(vec![FileHandle::from_path(&path).await?]);
            }

            let action = UploadAction::new(
                Arc::new(files),
                Arc::new(ConsoleArea::new("uploadStatus")),
                backend,
                &config,
            );
            action.execute().await
        }
        Command::Ask { question } => {
            let action = QueryAction::new(
                Arc::new(InputField::new(question.unwrap_or_default())),
                Arc::new(ConsoleArea::new("answerBox")),
                backend,
                &config,
            );
            action.execute().await
        }
        Command::Health => {
            let action = HealthAction::new(Arc::new(ConsoleArea::new("healthStatus")), backend, &config);
            action.execute().await
        }
    }
}
