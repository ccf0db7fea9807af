#![allow(dead_code)]

use colored::Colorize;

use crate::outcome::Outcome;

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.len()).dimmed());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print one row outcome, tag colored by severity
pub fn outcome(outcome: &Outcome) {
    let line = outcome.to_string();
    match outcome {
        Outcome::Created { .. } => println!("  {} {}", "✓".green(), line),
        Outcome::Skipped { .. } => println!("  {} {}", "=".dimmed(), line.dimmed()),
        Outcome::Planned { .. } => println!("  {} {}", "→".cyan(), line),
        Outcome::Rejected { .. } => println!("  {} {}", "✗".yellow(), line),
        Outcome::Failed { .. } => println!("  {} {}", "✗".red(), line),
    }
}
