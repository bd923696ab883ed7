use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use minidb::shell::{DEFAULT_HISTORY_FILE, DEFAULT_PROMPT};
use minidb::{parse, Shell, ShellConfig};

#[derive(Parser)]
#[command(author, version, about = "MiniDB CLI - An interactive SQL shell")]
struct Cli {
    /// Database to create and use at startup
    #[arg(short, long)]
    database: Option<String>,

    /// File used to persist the shell history
    #[arg(long, default_value = DEFAULT_HISTORY_FILE)]
    history_file: String,

    /// Shell prompt
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Execute a single SQL statement
    Query {
        /// SQL statement to execute
        query: String,
    },

    /// Print the syntax tree of a SQL statement
    Parse {
        /// SQL statement to parse
        query: String,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            database: self.database.clone(),
            history_file: self.history_file.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

fn run_shell(config: &ShellConfig) -> Result<()> {
    let mut shell = Shell::new(config).context("Failed to start session")?;

    println!("Welcome to MiniDB. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(&config.history_file) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline(&config.prompt);
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => {
                        print_help();
                    }
                    _ => match shell.exec(line) {
                        Ok(message) => print!("{}", message),
                        Err(err) => println!("Error: {}", err),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(&config.history_file) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  CREATE DATABASE <name>        - Create a new database");
    println!("  DROP DATABASE <name>          - Drop a database");
    println!("  CREATE TABLE <name> (...)     - Create a table in the current database");
    println!();
    println!("Parsed but not executed:");
    println!("  SELECT, INSERT, UPDATE, DELETE");
    println!();
    println!("Meta commands:");
    println!("  \\use <database>               - Switch the current database");
    println!("  \\l                            - List databases");
    println!("  \\dt                           - List tables in the current database");
    println!();
    println!("Other commands:");
    println!("  help                          - Display this help message");
    println!("  exit                          - Exit the CLI");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.shell_config();

    match &cli.command {
        Some(Commands::Shell) | None => {
            run_shell(&config)?;
        }
        Some(Commands::Query { query }) => {
            let mut shell = Shell::new(&config).context("Failed to start session")?;
            let message = shell
                .exec(query)
                .with_context(|| format!("Failed to execute query: {}", query))?;
            print!("{}", message);
        }
        Some(Commands::Parse { query, json }) => {
            let statement = parse(query).with_context(|| format!("Failed to parse: {}", query))?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
            } else {
                println!("{:#?}", statement);
            }
        }
    }

    Ok(())
}
