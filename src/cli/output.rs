//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: hints
//! - Bold: headers
//! - Dimmed: rules

use console::style;

use crate::core::sink::Sink;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ 2 deploy keys provisioned`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ missing parameter: export-script`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a plain progress line.
pub fn info(msg: &str) {
    println!("{}", msg);
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a header, a rule, then `body` verbatim.
pub fn block(title: &str, body: &str) {
    header(title);
    rule();
    print!("{}", body);
    if !body.is_empty() && !body.ends_with('\n') {
        println!();
    }
}

/// Sink that prints lifecycle progress to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Sink for Terminal {
    fn info(&mut self, message: &str) {
        info(message);
    }

    fn block(&mut self, title: &str, body: &str) {
        block(title, body);
    }
}
