use std::path::Path;

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};

use crate::config::DEFAULT_SYNTAX_THEME;

/// Syntax highlighting for the content pane.
///
/// Only the rows being drawn are highlighted, and the parser state starts
/// fresh at the first visible row, so constructs that open above the
/// viewport (block comments, multi-line strings) may be colored as plain
/// code until they close.
pub struct Highlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    /// Load the bundled syntaxes and the named theme, falling back to the
    /// default theme for unknown names.
    pub fn new(theme_name: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_nonewlines(),
            theme: load_theme(theme_name),
        }
    }

    fn syntax_for(&self, path: Option<&Path>) -> &SyntaxReference {
        path.and_then(|p| p.extension())
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.syntax_set.find_syntax_by_extension(ext))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    /// Name of the syntax that would be used for `path`.
    pub fn syntax_name(&self, path: Option<&Path>) -> &str {
        &self.syntax_for(path).name
    }

    /// Highlight consecutive lines of a file into styled spans.
    ///
    /// A line that fails to highlight is returned unstyled.
    pub fn highlight<'a>(
        &self,
        path: Option<&Path>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Vec<Vec<Span<'static>>> {
        let mut highlighter = HighlightLines::new(self.syntax_for(path), &self.theme);
        lines
            .into_iter()
            .map(|line| match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => ranges
                    .into_iter()
                    .map(|(style, text)| {
                        let fg = syntect_color_to_ratatui(style.foreground);
                        Span::styled(text.to_string(), Style::default().fg(fg))
                    })
                    .collect(),
                Err(_) => vec![Span::raw(line.to_string())],
            })
            .collect()
    }
}

/// Load a theme from the built-in theme set by name, with fallback.
fn load_theme(theme_name: &str) -> Theme {
    let mut ts = ThemeSet::load_defaults();
    match ts.themes.remove(theme_name) {
        Some(theme) => theme,
        None => ts
            .themes
            .remove(DEFAULT_SYNTAX_THEME)
            .unwrap_or_default(),
    }
}

/// Convert syntect color to ratatui Color.
fn syntect_color_to_ratatui(c: syntect::highlighting::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}
