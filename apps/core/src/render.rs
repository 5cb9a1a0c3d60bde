//! Terminal rendering of chat messages.
//!
//! Replies carry light `**bold**` markup. A line wrapped entirely in `**`
//! becomes a heading, inline spans become bold, everything else is plain.

use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Message, Role};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

// NOTE: expect() is acceptable here, the pattern is a literal
static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid regex: bold span"));

/// How replies are styled in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// ANSI escape codes
    Ansi,
    /// Markers stripped, no escape codes
    Plain,
}

/// Renders one line of message text.
pub fn render_line(line: &str, style: Style) -> String {
    let (open, close) = match style {
        Style::Ansi => (BOLD, RESET),
        Style::Plain => ("", ""),
    };

    if line.starts_with("**") && line.ends_with("**") {
        return format!("{}{}{}", open, line.replace("**", ""), close);
    }

    BOLD_SPAN
        .replace_all(line, |caps: &regex::Captures| {
            format!("{}{}{}", open, &caps[1], close)
        })
        .into_owned()
}

/// Renders a whole message body, line by line.
pub fn render_content(content: &str, style: Style) -> String {
    content
        .split('\n')
        .map(|line| render_line(line, style))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a message with speaker header and local `HH:MM` timestamp.
pub fn render_message(message: &Message, assistant_name: &str, style: Style) -> String {
    let speaker = match message.role {
        Role::User => "You",
        Role::Assistant => assistant_name,
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");

    let header = match style {
        Style::Ansi => format!("{}{}{} {}{}{}", BOLD, speaker, RESET, DIM, time, RESET),
        Style::Plain => format!("{} {}", speaker, time),
    };
    format!("{}\n{}", header, render_content(&message.content, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_line() {
        assert_eq!(render_line("**Lost Items:**", Style::Plain), "Lost Items:");
        assert_eq!(
            render_line("**Lost Items:**", Style::Ansi),
            "\x1b[1mLost Items:\x1b[0m"
        );
    }

    #[test]
    fn test_inline_spans() {
        let line = "1. **Chai Point** (0.5 km) - near **gate 2**";
        assert_eq!(
            render_line(line, Style::Plain),
            "1. Chai Point (0.5 km) - near gate 2"
        );
        assert_eq!(
            render_line(line, Style::Ansi),
            "1. \x1b[1mChai Point\x1b[0m (0.5 km) - near \x1b[1mgate 2\x1b[0m"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render_line("Tea, Biscuits", Style::Ansi), "Tea, Biscuits");
        assert_eq!(render_line("", Style::Ansi), "");
    }

    #[test]
    fn test_short_marker_lines_are_headings() {
        assert_eq!(render_line("***", Style::Plain), "*");
        assert_eq!(render_line("**", Style::Plain), "");
        assert_eq!(render_line("***", Style::Ansi), "\x1b[1m*\x1b[0m");
    }

    #[test]
    fn test_render_message_header() {
        let message = Message::user("hi");
        let rendered = render_message(&message, "Nexus", Style::Plain);
        let mut lines = rendered.lines();
        assert!(lines.next().unwrap().starts_with("You "));
        assert_eq!(lines.next(), Some("hi"));

        let reply = Message::assistant("**Breakfast** (7:30-9:30 AM)");
        let rendered = render_message(&reply, "Nexus", Style::Plain);
        assert!(rendered.starts_with("Nexus "));
        assert!(rendered.ends_with("Breakfast (7:30-9:30 AM)"));
    }
}
