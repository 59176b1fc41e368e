use clap::{Parser, Subcommand};
use colored::Colorize;
use hero_service::{Hero, HeroService, MessageService, NewHero, ReqwestClient};
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hero-cli")]
#[command(about = "Talk to an api/heroes server", long_about = None)]
struct Cli {
    /// Base URL the `api/heroes` paths are resolved against
    #[arg(short, long, env = "HERO_API_URL", default_value = "http://localhost:3000/")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every hero
    List,
    /// Fetch one hero
    Get { id: i32 },
    /// Find heroes whose name matches a term
    Search { term: String },
    /// Create a hero
    Add { name: String },
    /// Rename a hero
    Update { id: i32, name: String },
    /// Delete a hero
    Delete { id: i32 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    #[cfg(target_family = "windows")]
    {
        if colored::control::set_virtual_terminal(true).is_err() {
            eprintln!("failed to print colorfully.")
        };
    }

    let http = Arc::new(ReqwestClient::new(&cli.url)?);
    let messages = Arc::new(MessageService::new());
    let heroes = HeroService::new(http, messages.clone());

    match cli.command {
        Commands::List => print_json(&heroes.get_heroes().await)?,
        Commands::Get { id } => print_json(&heroes.get_hero(id).await)?,
        Commands::Search { term } => print_json(&heroes.search_heroes(&term).await)?,
        Commands::Add { name } => print_json(&heroes.add_hero(NewHero { name }).await)?,
        Commands::Update { id, name } => {
            print_json(&heroes.update_hero(&Hero { id, name }).await)?
        }
        Commands::Delete { id } => print_json(&heroes.delete_hero(id).await)?,
    }

    for message in messages.messages() {
        if message.contains(" failed: ") {
            eprintln!("{}", message.red());
        } else {
            eprintln!("{}", message.green());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
