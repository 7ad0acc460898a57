//! Terminal styling, TOML highlighting and JSON output.

use std::process::ExitCode;

use serde::Serialize;
use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Indents every line of `content` by two spaces.
pub fn indent_content(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shortens text to at most `max` characters, appending an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// TOML syntax highlighter for terminal output.
pub struct Highlighter {
    /// Syntax definitions, including TOML from the two-face extras.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content, ending with a color reset.
    pub fn highlight_toml(&self, content: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_toml() {
        let output = Highlighter::new().highlight_toml("[ranking]\nexploit = 0.7\n");
        assert!(output.contains("\x1b["));
        assert!(output.ends_with(colors::RESET));
    }

    #[test]
    fn header_is_bold_cyan() {
        let h = header("Ranking");
        assert!(h.starts_with(colors::BOLD));
        assert!(h.contains(colors::CYAN));
        assert!(h.contains("Ranking"));
    }

    #[test]
    fn truncate_respects_characters() {
        assert_eq!(truncate("Königsberg", 20), "Königsberg");
        assert_eq!(truncate("Königsberg", 5), "Köni…");
        assert_eq!(truncate("ab cd", 4), "ab…");
    }

    #[test]
    fn indent_prefixes_lines() {
        assert_eq!(indent_content("a\nb"), "  a\n  b");
    }
}
