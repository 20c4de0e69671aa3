use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, Focus};
use crate::components::content::{self, ContentWidget};
use crate::components::directory::{self, DirectoryWidget};
use crate::components::status_bar::StatusBarWidget;
use crate::components::{truncate_end, truncate_start};
use crate::theme::ThemeColors;

/// Border block for a pane, emphasized when the pane has focus.
fn pane_block<'a>(title: String, focused: bool, theme: &ThemeColors) -> Block<'a> {
    let border_style = if focused {
        Style::default()
            .fg(theme.border_focused_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_fg)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

/// Room left for a title inside a border of the given outer width.
fn title_budget(area: Rect) -> usize {
    area.width.saturating_sub(4) as usize
}

/// Render the application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let show_bar = app.options.help_bar || app.status_message.is_some();
    let (main_area, bar_area) = if show_bar {
        let [main, bar] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        (main, Some(bar))
    } else {
        (area, None)
    };

    let [dir_area, content_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(main_area);

    render_directory(app, frame, dir_area);
    render_content(app, frame, content_area);

    if let Some(bar) = bar_area {
        let theme = &app.options.theme;
        let mut widget = StatusBarWidget::new(theme);
        if let Some((msg, _)) = &app.status_message {
            widget = widget.status_message(msg);
        }
        frame.render_widget(widget, bar);
    }
}

fn render_directory(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = &app.options.theme;
    let path = app.directory.current_path().display().to_string();
    let title = format!(" {} ", truncate_start(&path, title_budget(area).saturating_sub(2)));
    let block = pane_block(title, app.focus == Focus::Directory, theme);

    let height = directory::list_height(block.inner(area).height);
    let window = app.directory.visible_window(height);

    let widget = DirectoryWidget::new(
        app.directory.entries(),
        app.directory.selected(),
        window,
        theme,
    )
    .block(block);
    frame.render_widget(widget, area);
}

fn render_content(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = &app.options.theme;
    let source = app.content.source_path();
    let mut name = source
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if let (Some(hl), false) = (&app.highlighter, name.is_empty()) {
        name = format!("{} ({})", name, hl.syntax_name(source));
    }
    let title = if name.is_empty() {
        String::new()
    } else {
        format!(" {} ", truncate_end(&name, title_budget(area).saturating_sub(2)))
    };
    let block = pane_block(title, app.focus == Focus::Content, theme);

    let height = content::text_height(block.inner(area).height);
    let window = app.content.visible_window(height);

    let widget = ContentWidget::new(
        app.content.lines(),
        app.content.source_path(),
        window,
        theme,
    )
    .line_numbers(app.options.line_numbers)
    .tab_width(app.options.tab_width)
    .highlighter(app.highlighter.as_ref())
    .block(block);
    frame.render_widget(widget, area);
}
