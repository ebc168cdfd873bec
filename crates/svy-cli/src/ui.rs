//! Terminal UI utilities

use std::io::{self, IsTerminal, Write};

use colored::*;
use crossterm::terminal::size;

use svy_core::Result;

/// Display the startup banner
pub fn display_banner() {
    let terminal_width = size().map(|(w, _)| w as usize).unwrap_or(80);
    let banner_width = std::cmp::min(60, terminal_width.saturating_sub(4));

    let top_border = format!("┌{}┐", "─".repeat(banner_width - 2));
    let bottom_border = format!("└{}┘", "─".repeat(banner_width - 2));
    let empty_line = format!("│{}│", " ".repeat(banner_width - 2));

    println!();
    println!("{}", top_border.blue());
    println!("{}", empty_line.blue());

    let title = "SVY - Survey CLI";
    let title_line = format!(
        "│  {}{}│",
        title.blue().bold(),
        " ".repeat(banner_width.saturating_sub(title.len() + 4))
    );
    println!("{}", title_line);

    println!("{}", empty_line.blue());

    let feature_lines = vec![
        "📋 Structured surveys in your terminal",
        "",
        "Views:",
        "• 📝 fill    - complete the survey form",
        "• 📊 results - aggregate report for this session",
        "",
        "v0.1.0 • responses live in memory for this session",
    ];

    for line in feature_lines {
        if line.is_empty() {
            println!("{}", empty_line.blue());
        } else {
            let content = if line.starts_with("v0.1.0") {
                format!("│  {}{}│", line.dimmed(), " ".repeat(banner_width.saturating_sub(line.chars().count() + 4)))
            } else {
                format!("│  {}{}│", line, " ".repeat(banner_width.saturating_sub(line.chars().count() + 4)))
            };
            println!("{}", content.blue());
        }
    }

    println!("{}", empty_line.blue());
    println!("{}", bottom_border.blue());
    println!();
    println!(
        "{}",
        "💡 Tip: Type 'fill' to start a survey, or 'help' for commands".dimmed()
    );
    println!();
}

/// Read the next navigation command. `None` once stdin is exhausted, so
/// piped sessions terminate cleanly.
pub fn read_command() -> Result<Option<String>> {
    if io::stdin().is_terminal() {
        print!("{} ", "svy>".green().bold());
        io::stdout().flush()?;
    }

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Print `label`, read one line, return it trimmed
pub fn prompt_line(label: &str) -> Result<String> {
    print!("{} ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt that shows the current value; an empty reply keeps it
pub fn prompt_with_current(label: &str, current: &str) -> Result<String> {
    let full = if current.is_empty() {
        format!("{label}:")
    } else {
        format!("{label} [{current}]:")
    };
    let reply = prompt_line(&full)?;
    Ok(if reply.is_empty() { current.to_string() } else { reply })
}
