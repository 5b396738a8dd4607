// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the catid CLI.
//!
//! Color support detection and colored status messages on stderr.

use std::env;
use std::io::{self, BufRead, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Reads one identifier per non-blank line.
///
/// # Errors
///
/// Returns an error if the reader fails or yields invalid UTF-8.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Prints command output to stdout, ending with exactly one newline.
pub fn print_output(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Prints a status message with a colored prefix.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let input = "M31\n\n  \nNGC 7000\r\nSh2-155";
        let lines = read_lines(input.as_bytes()).unwrap();
        assert_eq!(lines, vec!["M31", "NGC 7000", "Sh2-155"]);
    }

    #[test]
    fn test_read_lines_keeps_inner_spacing() {
        let lines = read_lines("  VD B 1  \n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["  VD B 1  "]);
    }
}
