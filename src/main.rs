mod cli;
mod config;
mod error;
mod models;
mod prompt;
mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::prompt::Prompter;
use crate::store::Store;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Keep to-do entries with names, descriptions and tasks", long_about = None)]
struct Cli {
    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialise the todo database and table
    Init,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Work with todo entries
    Todo {
        #[command(subcommand)]
        command: TodoCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize tasklist.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum TodoCommands {
    /// See a list of all todos you've added
    List,
    /// Create a new todo
    New,
    /// Get a todo
    Get {
        /// Id of the todo
        id: i64,
    },
    /// Update a todo's name and description
    Update {
        /// Id of the todo
        id: i64,
    },
    /// Add a task to the todo
    AddTask {
        /// Id of the todo
        id: i64,
        /// Task text to append
        task: String,
    },
    /// Remove a task from the todo
    RemoveTask {
        /// Id of the todo
        id: i64,
        /// Task text to remove (all exact matches)
        task: String,
    },
    /// Delete a todo
    Delete {
        /// Id of the todo
        id: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Diagnostics go to stderr; stdout is reserved for todo contents.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> error::Result<()> {
    match cli.command {
        // Config management works without touching the database.
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::init::config_init(path),
        },
        command => {
            let database = config::database_path(cli.database, cli.config)?;
            let store = Store::open(&database)?;

            match command {
                Commands::Config { .. } => unreachable!("handled above"),
                Commands::Init => cli::init::run(&store, &database),
                Commands::Todo { command } => match command {
                    TodoCommands::List => cli::todo::list(&store),
                    TodoCommands::New => cli::todo::new(&store, &mut Prompter::stdio()),
                    TodoCommands::Get { id } => cli::todo::get(&store, id),
                    TodoCommands::Update { id } => {
                        cli::todo::update(&store, &mut Prompter::stdio(), id)
                    }
                    TodoCommands::AddTask { id, task } => cli::todo::add_task(&store, id, &task),
                    TodoCommands::RemoveTask { id, task } => {
                        cli::todo::remove_task(&store, id, &task)
                    }
                    TodoCommands::Delete { id } => cli::todo::delete(&store, id),
                },
            }
        }
    }
}
