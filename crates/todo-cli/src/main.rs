mod logging;
mod output;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use tracing::debug;

use todo_core::{Backend, Config, FileStorage, MemoryStorage, Storage, TodoId, TodoService};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Add, list and delete short todos", long_about = None)]
struct Cli {
    /// Storage backend (memory todos are gone when the command exits)
    #[arg(long, global = true)]
    backend: Option<Backend>,

    /// Todo file used by the file backend
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new todo
    Add {
        /// Title of the todo
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        title: String,
    },
    /// List all todos
    List,
    /// Delete a todo by ID
    Delete {
        /// ID of the todo to delete
        #[arg(allow_negative_numbers = true)]
        id: TodoId,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let config = load_config(&cli)?;
    logging::init(&config.log.level);

    let service = TodoService::new(open_storage(&config)?);
    let mut stdout = io::stdout().lock();
    run(&service, cli.command, &mut stdout)
}

/// Options that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["--title", "-t", "--backend", "--file", "--config"];

/// Rewrites the single-dash long forms `-title` and `-title=<TITLE>` to
/// `--title` so clap does not read them as `-t` followed by `itle`.
///
/// Option values and everything after `--` pass through unchanged.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut is_value = false;
    let mut passthrough = false;

    for arg in args {
        if passthrough || is_value {
            is_value = false;
            normalized.push(arg);
            continue;
        }

        let arg = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                arg
            }
            Some("-title") => OsString::from("--title"),
            Some(s) if s.starts_with("-title=") => OsString::from(format!("-{s}")),
            _ => arg,
        };
        is_value = arg.to_str().is_some_and(|s| VALUE_FLAGS.contains(&s));
        normalized.push(arg);
    }

    normalized
}

/// Loads configuration and layers command-line flags on top.
fn load_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("Error loading config from {}", path.display()))?,
        None => Config::load().wrap_err("Error loading config")?,
    };

    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }
    if let Some(file) = &cli.file {
        config.storage.file = Some(file.clone());
    }

    Ok(config)
}

/// Builds the storage backend named by the configuration.
fn open_storage(config: &Config) -> color_eyre::Result<Box<dyn Storage>> {
    match config.storage.backend {
        Backend::Memory => {
            debug!("using in-memory storage");
            Ok(Box::new(MemoryStorage::new()))
        }
        Backend::File => {
            let path = config.storage.file_path();
            debug!(path = %path.display(), "using file storage");
            let storage = FileStorage::open(&path)
                .wrap_err_with(|| format!("Error opening todo file {}", path.display()))?;
            Ok(Box::new(storage))
        }
    }
}

/// Executes one command against the service, writing results to `out`.
fn run<S: Storage>(
    service: &TodoService<S>,
    command: Commands,
    out: &mut impl Write,
) -> color_eyre::Result<()> {
    match command {
        Commands::Add { title } => {
            let todo = service.add_todo(&title).wrap_err("Error adding todo")?;
            writeln!(out, "{}", output::added(&todo))?;
        }
        Commands::List => {
            let todos = service.list_todos().wrap_err("Error listing todos")?;
            write!(out, "{}", output::listing(&todos))?;
        }
        Commands::Delete { id } => {
            service.delete_todo(id).wrap_err("Error deleting todo")?;
            writeln!(out, "{}", output::deleted(id))?;
        }
    }
    Ok(())
}
