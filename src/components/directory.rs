use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use crate::components::truncate_end;
use crate::fs::listing::{Entry, EntryKind};
use crate::theme::ThemeColors;

/// Rows above the listing: column header and separator.
pub const HEADER_ROWS: u16 = 2;
/// Width of the right-aligned size column.
const SIZE_COLUMN: usize = 10;

/// Number of entry rows that fit in a pane whose inner area is `inner_height` tall.
pub fn list_height(inner_height: u16) -> usize {
    inner_height.saturating_sub(HEADER_ROWS) as usize
}

/// Renders the directory listing: a `Name`/`Size` header, a separator, then
/// one row per visible entry.
pub struct DirectoryWidget<'a> {
    entries: &'a [Entry],
    selected: usize,
    window: (usize, usize),
    theme: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> DirectoryWidget<'a> {
    /// `window` is the `(start, count)` pair from `DirectoryPane::visible_window`.
    pub fn new(
        entries: &'a [Entry],
        selected: usize,
        window: (usize, usize),
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            entries,
            selected,
            window,
            theme,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block.into();
        self
    }

    fn row_text(entry: &Entry, width: usize) -> String {
        let (label, size) = match entry.kind {
            EntryKind::Directory => (format!("[{}]", entry.name), "<DIR>".to_string()),
            EntryKind::File { .. } => (entry.name.clone(), entry.size().to_string()),
        };
        let size_width = SIZE_COLUMN;
        let name_width = width.saturating_sub(size_width + 1);
        if name_width == 0 {
            return truncate_end(&label, width);
        }
        format!(
            "{:<name_width$} {:>size_width$}",
            truncate_end(&label, name_width),
            size
        )
    }

    fn header_text(width: usize) -> String {
        let size_width = SIZE_COLUMN;
        let name_width = width.saturating_sub(size_width + 1);
        if name_width == 0 {
            return truncate_end("Name", width);
        }
        format!("{:<name_width$} {:>size_width$}", "Name", "Size")
    }

    fn entry_style(&self, entry: &Entry, is_selected: bool) -> Style {
        if is_selected {
            return Style::default()
                .bg(self.theme.selected_bg)
                .fg(self.theme.selected_fg)
                .add_modifier(Modifier::BOLD);
        }
        match entry.kind {
            EntryKind::Directory => Style::default()
                .fg(self.theme.dir_fg)
                .add_modifier(Modifier::BOLD),
            EntryKind::File { .. } => Style::default().fg(self.theme.file_fg),
        }
    }
}

impl<'a> Widget for DirectoryWidget<'a> {
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

        // One column of padding on each side
        let x = inner.x + 1;
        let width = inner.width.saturating_sub(2) as usize;

        let header_style = Style::default()
            .fg(self.theme.header_fg)
            .add_modifier(Modifier::BOLD);
        buf.set_stringn(x, inner.y, Self::header_text(width), width, header_style);

        if inner.height < HEADER_ROWS {
            return;
        }
        buf.set_string(
            inner.x,
            inner.y + 1,
            "─".repeat(inner.width as usize),
            Style::default().fg(self.theme.border_fg),
        );

        let rows = list_height(inner.height);
        let (start, count) = self.window;
        let visible = self.entries.iter().enumerate().skip(start).take(count.min(rows));

        for (row, (idx, entry)) in visible.enumerate() {
            let y = inner.y + HEADER_ROWS + row as u16;
            let is_selected = idx == self.selected;
            let style = self.entry_style(entry, is_selected);
            if is_selected {
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            }
            buf.set_stringn(x, y, Self::row_text(entry, width), width, style);
        }
    }
}
