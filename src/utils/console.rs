//! Console reporting for the build commands.
//!
//! Everything the user is meant to read goes through here; failures are
//! reported as text and never turned into exit codes.

use colored::Colorize;

pub const RULE_WIDTH: usize = 70;

pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("  {}", title.bold());
    println!("{}\n", "=".repeat(RULE_WIDTH));
}

pub fn print_success(message: &str) {
    println!("{} {}", "✅".green(), message);
}

pub fn print_error(message: &str) {
    println!("{} {}", "❌".red(), message.red());
}

pub fn print_info(message: &str) {
    println!("{}  {}", "ℹ️".cyan(), message);
}

pub fn print_warning(message: &str) {
    println!("{}  {}", "⚠️".yellow(), message.yellow());
}

pub fn print_rule() {
    println!("{}", "─".repeat(RULE_WIDTH));
}

pub fn kilobytes(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}
