//! Styled terminal output helpers shared by the commands.

use console::style;

/// Prints a bold section heading.
pub fn print_heading(text: &str) {
    println!("{}", style(text).bold());
}

/// Prints an indented key/value line with a dimmed key.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {value}", style(key).dim());
}

/// Prints a success message with a leading check mark.
pub fn print_success(text: &str) {
    println!("{} {text}", style("✓").green());
}

/// Prints a blank line between sections.
pub fn print_spacer() {
    println!();
}
