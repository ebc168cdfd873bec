use anyhow::Result;
use clap::Parser;
use colored::*;

use svy_cli::{
    AppConfig, OutputFormat, display_banner, read_command, render_json, render_text, run_form,
};
use svy_core::Session;

#[derive(Parser)]
#[command(name = "svy")]
#[command(about = "Structured survey collection with in-memory aggregate reporting", long_about = None)]
struct Cli {
    /// Output format for the results view (text or json)
    #[arg(short, long)]
    format: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::from_env()?;
    if let Some(format) = cli.format {
        config.format = OutputFormat::parse(&format)?;
    }
    log::debug!("starting with {config:?}");

    // All session state lives here; the views only borrow it.
    let mut session = Session::new();

    display_banner();

    loop {
        let Some(input) = read_command()? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("{}", "👋 Goodbye!".green());
                break;
            }
            "help" => print_help(),
            "fill" => run_form(&mut session)?,
            "results" => {
                let summary = session.summary();
                let rendered = match config.format {
                    OutputFormat::Text => render_text(summary.as_ref()),
                    OutputFormat::Json => render_json(summary.as_ref())?,
                };
                println!();
                println!("{rendered}");
                println!();
            }
            other => {
                println!(
                    "{} Unknown command '{}'. Type 'help' for the list.",
                    "⚠️".yellow(),
                    other
                );
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("{}", "Available commands:".bold());
    println!("  {} - Fill out the survey form", "fill".green());
    println!("  {} - View aggregate results for this session", "results".green());
    println!("  {} - Show this help message", "help".green());
    println!("  {} - Exit the application", "exit/quit".green());
}
