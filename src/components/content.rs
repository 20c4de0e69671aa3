use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::components::directory::HEADER_ROWS;
use crate::highlight::Highlighter;
use crate::pane::content::ContentWindow;
use crate::theme::ThemeColors;

const MIN_LINE_NUMBER_WIDTH: usize = 4;

/// Number of text rows that fit in a pane whose inner area is `inner_height` tall.
pub fn text_height(inner_height: u16) -> usize {
    inner_height.saturating_sub(HEADER_ROWS) as usize
}

/// Replace tabs with spaces up to the next multiple of `tab_width`.
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + tab_width);
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = tab_width - column % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

/// Cut styled spans down to `max` characters, ending with `...` when
/// anything was dropped.
pub fn clip_spans(spans: Vec<Span<'static>>, max: usize, ellipsis_style: Style) -> Vec<Span<'static>> {
    let total: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if total <= max {
        return spans;
    }
    let keep = max.saturating_sub(3);
    let mut remaining = keep;
    let mut out = Vec::with_capacity(spans.len() + 1);
    for span in spans {
        if remaining == 0 {
            break;
        }
        let len = span.content.chars().count();
        if len <= remaining {
            remaining -= len;
            out.push(span);
        } else {
            let cut: String = span.content.chars().take(remaining).collect();
            out.push(Span::styled(cut, span.style));
            remaining = 0;
        }
    }
    out.push(Span::styled(".".repeat(max - keep), ellipsis_style));
    out
}

/// Renders the loaded file: a header, a separator, then the visible lines
/// with optional line numbers and syntax colors.
pub struct ContentWidget<'a> {
    lines: &'a [String],
    source_path: Option<&'a Path>,
    window: ContentWindow,
    theme: &'a ThemeColors,
    line_numbers: bool,
    tab_width: usize,
    highlighter: Option<&'a Highlighter>,
    block: Option<Block<'a>>,
}

impl<'a> ContentWidget<'a> {
    pub fn new(
        lines: &'a [String],
        source_path: Option<&'a Path>,
        window: ContentWindow,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            lines,
            source_path,
            window,
            theme,
            line_numbers: true,
            tab_width: 4,
            highlighter: None,
            block: None,
        }
    }

    pub fn line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = on;
        self
    }

    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = width.max(1);
        self
    }

    pub fn highlighter(mut self, highlighter: Option<&'a Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block.into();
        self
    }

    fn number_width(&self) -> usize {
        self.lines
            .len()
            .to_string()
            .len()
            .max(MIN_LINE_NUMBER_WIDTH)
    }

    fn styled_lines(&self, start: usize, count: usize) -> Vec<Vec<Span<'static>>> {
        let expanded: Vec<String> = self.lines[start..start + count]
            .iter()
            .map(|l| expand_tabs(l, self.tab_width))
            .collect();
        match self.highlighter {
            Some(hl) => hl.highlight(self.source_path, expanded.iter().map(String::as_str)),
            None => {
                let style = Style::default().fg(self.theme.content_fg);
                expanded
                    .into_iter()
                    .map(|text| vec![Span::styled(text, style)])
                    .collect()
            }
        }
    }
}

impl<'a> Widget for ContentWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2) as usize;
        let header_style = Style::default()
            .fg(self.theme.header_fg)
            .add_modifier(Modifier::BOLD);
        let header = if self.line_numbers { "Line" } else { "Text" };
        buf.set_stringn(x, inner.y, header, width, header_style);

        if inner.height < HEADER_ROWS {
            return;
        }
        buf.set_string(
            inner.x,
            inner.y + 1,
            "─".repeat(inner.width as usize),
            Style::default().fg(self.theme.border_fg),
        );

        let rows = text_height(inner.height);
        if rows == 0 {
            return;
        }
        let first_row = inner.y + HEADER_ROWS;
        let dim = Style::default().fg(self.theme.dim_fg);

        let (start, count) = match self.window {
            ContentWindow::NoFile => {
                buf.set_stringn(x, first_row, "No file loaded", width, dim);
                return;
            }
            ContentWindow::EmptyFile => {
                buf.set_stringn(x, first_row, "(Empty file)", width, dim);
                return;
            }
            ContentWindow::Lines { start, count } => {
                let count = count.min(rows).min(self.lines.len().saturating_sub(start));
                (start, count)
            }
        };

        let number_width = self.number_width();
        let gutter = if self.line_numbers { number_width + 1 } else { 0 };
        let text_width = width.saturating_sub(gutter);
        let number_style = Style::default().fg(self.theme.line_nr_fg);

        for (row, spans) in self.styled_lines(start, count).into_iter().enumerate() {
            let mut line_spans = Vec::with_capacity(spans.len() + 2);
            if self.line_numbers {
                line_spans.push(Span::styled(
                    format!("{:>number_width$} ", start + row + 1),
                    number_style,
                ));
            }
            line_spans.extend(clip_spans(spans, text_width, dim));
            let y = first_row + row as u16;
            buf.set_line(x, y, &Line::from(line_spans), width as u16);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SYNTAX_THEME;
    use crate::theme;
    use ratatui::widgets::Borders;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    fn lines(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn test_no_file_placeholder() {
        let tc = theme::dark_theme();
        let widget = ContentWidget::new(&[], None, ContentWindow::NoFile, &tc)
            .block(Block::default().borders(Borders::ALL));
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(row(&buf, 3, 30).contains("No file loaded"));
    }

    #[test]
    fn test_empty_file_placeholder() {
        let tc = theme::dark_theme();
        let path = Path::new("/tmp/empty.txt");
        let widget = ContentWidget::new(&[], Some(path), ContentWindow::EmptyFile, &tc);
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(row(&buf, 2, 30).contains("(Empty file)"));
    }

    #[test]
    fn test_lines_with_numbers() {
        let tc = theme::dark_theme();
        let text = lines(3);
        let window = ContentWindow::Lines { start: 0, count: 3 };
        let widget = ContentWidget::new(&text, None, window, &tc);
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(row(&buf, 0, 30).contains("Line"));
        assert!(row(&buf, 2, 30).contains("   1 line 1"));
        assert!(row(&buf, 4, 30).contains("   3 line 3"));
    }

    #[test]
    fn test_window_start_offsets_numbers() {
        let tc = theme::dark_theme();
        let text = lines(10);
        let window = ContentWindow::Lines { start: 7, count: 3 };
        let widget = ContentWidget::new(&text, None, window, &tc);
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(row(&buf, 2, 30).contains("   8 line 8"));
        assert!(row(&buf, 4, 30).contains("  10 line 10"));
    }

    #[test]
    fn test_without_line_numbers() {
        let tc = theme::dark_theme();
        let text = lines(1);
        let window = ContentWindow::Lines { start: 0, count: 1 };
        let widget = ContentWidget::new(&text, None, window, &tc).line_numbers(false);
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(row(&buf, 2, 20).trim_end(), " line 1");
    }

    #[test]
    fn test_long_line_truncated_for_display_only() {
        let tc = theme::dark_theme();
        let text = vec!["abcdefghijklmnopqrstuvwxyz".to_string()];
        let window = ContentWindow::Lines { start: 0, count: 1 };
        let widget = ContentWidget::new(&text, None, window, &tc).line_numbers(false);
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(row(&buf, 2, 12), " abcdefg... ");
        assert_eq!(text[0].len(), 26);
    }

    #[test]
    fn test_tabs_expanded() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        assert_eq!(expand_tabs("abcd\te", 4), "abcd    e");
        assert_eq!(expand_tabs("none", 4), "none");
    }

    #[test]
    fn test_clip_spans_across_boundaries() {
        let spans = vec![Span::raw("hello"), Span::raw(" "), Span::raw("world")];
        let clipped = clip_spans(spans, 8, Style::default());
        let text: String = clipped.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "hello...");
    }

    #[test]
    fn test_clip_spans_fits() {
        let spans = vec![Span::raw("short")];
        let clipped = clip_spans(spans, 8, Style::default());
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].content, "short");
    }

    #[test]
    fn test_highlighted_text_matches_source() {
        let tc = theme::dark_theme();
        let hl = Highlighter::new(DEFAULT_SYNTAX_THEME);
        let text = vec!["fn main() {}".to_string()];
        let path = Path::new("main.rs");
        let window = ContentWindow::Lines { start: 0, count: 1 };
        let widget = ContentWidget::new(&text, Some(path), window, &tc)
            .line_numbers(false)
            .highlighter(Some(&hl));
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert!(row(&buf, 2, 30).contains("fn main() {}"));
    }

    #[test]
    fn test_zero_area_no_panic() {
        let tc = theme::dark_theme();
        let widget = ContentWidget::new(&[], None, ContentWindow::NoFile, &tc);
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
