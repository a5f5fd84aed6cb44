use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ollama_embedder::config::{DEFAULT_CONFIG_PATH, OllamaConfig};
use ollama_embedder::embedder::mock::MockEmbedder;
use ollama_embedder::{Document, EmbeddingGenerator, OllamaEmbedder};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ollama-embed", version, about = "Embed text through an Ollama server")]
struct Cli {
    /// JSON config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the server base URL
    #[arg(long)]
    url: Option<String>,

    /// Override the model name
    #[arg(long)]
    model: Option<String>,

    /// Ask for a specific vector size (rejected by the Ollama embedder)
    #[arg(long)]
    dimensions: Option<usize>,

    /// Use the deterministic hash embedder instead of a server
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed a single string and print the vector
    Text { text: String },
    /// Embed each file as a document and print one JSON document per line
    Files {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the resolved configuration and declared vector size
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // 1. Load config, flags win
    let mut config = OllamaConfig::load(&cli.config)?;
    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    config.validate()?;

    // 2. Init embedder
    let embedder: Box<dyn EmbeddingGenerator> = if cli.mock {
        info!("Using mock embedder");
        Box::new(MockEmbedder::default())
    } else {
        info!("Using Ollama at {} with model {}", config.url, config.model);
        Box::new(OllamaEmbedder::new(&config).context("failed to create embedder")?)
    };

    // 3. Run command
    match cli.command {
        Command::Text { text } => {
            let vector = embedder
                .embed_text(&text, cli.dimensions)
                .context("embedding failed")?;
            println!("{}", serde_json::to_string(&vector)?);
        }
        Command::Files { paths } => {
            let mut documents = paths
                .iter()
                .map(|path| -> Result<Document> {
                    let content = std::fs::read_to_string(path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    Ok(Document::new(content).with_source("files", path.display().to_string()))
                })
                .collect::<Result<Vec<_>>>()?;

            embedder
                .embed_documents(&mut documents, cli.dimensions)
                .context("embedding failed")?;
            info!("Embedded {} documents", documents.len());

            for document in &documents {
                println!("{}", serde_json::to_string(document)?);
            }
        }
        Command::Info => {
            let info = json!({
                "url": config.url,
                "model": config.model,
                "mock": cli.mock,
                "embedding_length": embedder.embedding_length(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
