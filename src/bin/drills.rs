use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use testing_drills::p2_asserting_exceptions::enter_the_pub;
use testing_drills::p4_parameterizing::log_in;
use testing_drills::p5_fixtures::{fight_mutants, save_text_in_file, MutantGenerator};
use testing_drills::p6_mocking::{
    is_todo_completed, login, Credentials, HttpCredentialChecker, HttpTodoSource,
};
use testing_drills::p8_property_based::{check_person_age, Person};
use testing_drills::{logging, DrillError, DrillsConfig};
use tracing::{error, info};

/// Runs the testing drills from the command line
#[derive(Parser)]
#[command(name = "drills")]
#[command(about = "Run the toy functions behind each testing drill")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Try to enter the pub
    Pub { age: u32 },
    /// Check credentials against the built-in allowlist
    Login { username: String, password: String },
    /// Generate an army and print the last survivor
    Fight {
        #[arg(short, long)]
        size: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write text to a file, replacing its content
    Write { path: PathBuf, text: String },
    /// Print whether a person can vote
    Vote { name: String, age: u32 },
    /// Check credentials against the configured login endpoint
    RemoteLogin { username: String, password: String },
    /// Fetch a todo and report whether it is completed
    Todo { id: u64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<(), DrillError> {
    let config = DrillsConfig::load(cli.config.as_deref())?;
    info!(?config, "configuration loaded");

    match cli.command {
        Commands::Pub { age } => {
            enter_the_pub(age)?;
            println!("{}", "Welcome in!".green());
        }
        Commands::Login { username, password } => {
            print_status(log_in(&username, &password));
        }
        Commands::Fight { size, seed } => {
            let size = size.unwrap_or(config.army_size);
            let mut generator = match seed {
                Some(seed) => MutantGenerator::seeded(seed),
                None => MutantGenerator::from_entropy(),
            };
            let army = generator.army(size);
            match fight_mutants(&army) {
                Some(survivor) => println!("{} {}", "Last survivor:".bold(), survivor),
                None => println!("{}", "Nobody showed up to fight".yellow()),
            }
        }
        Commands::Write { path, text } => {
            save_text_in_file(&text, &path)?;
            println!("Wrote {} bytes to {}", text.len(), path.display());
        }
        Commands::Vote { name, age } => {
            check_person_age(&Person::new(age, name))?;
        }
        Commands::RemoteLogin { username, password } => {
            let checker = HttpCredentialChecker::from_config(&config);
            let status = login(&checker, &Credentials::new(username, password)).await?;
            print_status(status);
        }
        Commands::Todo { id } => {
            let source = HttpTodoSource::from_config(&config);
            if is_todo_completed(&source, id).await? {
                println!("Todo {} is {}", id, "completed".green());
            } else {
                println!("Todo {} is {}", id, "not completed".yellow());
            }
        }
    }

    Ok(())
}

fn print_status(status: u16) {
    let text = status.to_string();
    if status == 200 {
        println!("{}", text.green().bold());
    } else {
        println!("{}", text.red().bold());
    }
}
