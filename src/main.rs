use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use confstore::Store;

/// confstore - inspect and convert application settings files
#[derive(Parser)]
#[command(name = "confstore")]
#[command(version)]
#[command(about = "Inspect and convert application settings files", long_about = None)]
struct Cli {
    /// Application name whose configuration directory is used
    #[arg(short, long)]
    app: String,

    /// Use <ROOT>/<APP> instead of the platform configuration directory
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the application configuration directory
    Dir,
    /// Print the absolute path of a settings file
    Path {
        /// File path relative to the configuration directory
        file: PathBuf,
    },
    /// Print a settings file as JSON, creating an empty one if it does not exist
    Show {
        /// File path relative to the configuration directory
        file: PathBuf,
    },
    /// Re-encode a settings file into another format
    Convert {
        /// Existing file to read
        from: PathBuf,
        /// File to write; its extension selects the output format
        to: PathBuf,
    },
    /// List the registered file extensions
    Formats,
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable. Override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ensure!(!cli.app.is_empty(), "application name must not be empty");

    let store = match cli.root {
        Some(root) => Store::with_base_dir(cli.app, root),
        None => Store::new(cli.app),
    };
    debug!("using configuration directory {:?}", store.app_dir().ok());

    match cli.command {
        Command::Dir => {
            let dir = store
                .app_dir()
                .context("Failed to resolve configuration directory")?;
            println!("{}", dir.display());
        }
        Command::Path { file } => {
            let path = store.path(&file).context("Failed to resolve path")?;
            println!("{}", path.display());
        }
        Command::Show { file } => {
            let table: Map<String, Value> = store
                .load(&file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Command::Convert { from, to } => {
            let source = store.path(&from)?;
            if !source.exists() {
                bail!("{} does not exist", source.display());
            }
            let value: Value = store
                .load(&from)
                .with_context(|| format!("Failed to load {}", from.display()))?;
            store
                .save(&to, &value)
                .with_context(|| format!("Failed to save {}", to.display()))?;
            println!("{} -> {}", from.display(), to.display());
        }
        Command::Formats => {
            for ext in store.formats().extensions() {
                println!("{ext}");
            }
        }
    }

    Ok(())
}
