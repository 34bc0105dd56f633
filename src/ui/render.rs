use crate::app::{App, OutputKind, OutputLine};
use crate::ui::input::InputLine;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Slice of `total` output rows visible in a pane `height` rows tall,
/// `scroll` rows up from the bottom. `scroll` is clamped to the top.
pub fn visible_range(total: usize, height: usize, scroll: usize) -> Range<usize> {
    let max_scroll = total.saturating_sub(height);
    let end = total - scroll.min(max_scroll);
    end.saturating_sub(height)..end
}

pub fn render_header(app: &App, theme: &Theme) -> Paragraph<'static> {
    let store = app.store();
    let spans = vec![
        Span::styled(
            " monco ",
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.mode().label(), Style::default().fg(theme.accent)),
        Span::styled(
            format!(" entries: {}/{}", store.len(), store.max_entries()),
            Style::default().fg(theme.dimmed),
        ),
    ];
    Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface))
}

/// Splits `text` into rows at most `width` columns wide, breaking between
/// graphemes. An empty line still takes one row.
pub fn wrap_rows(text: &str, width: usize) -> Vec<&str> {
    if width == 0 || text.width() <= width {
        return vec![text];
    }
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > width && offset > start {
            rows.push(&text[start..offset]);
            start = offset;
            used = 0;
        }
        used += grapheme_width;
    }
    rows.push(&text[start..]);
    rows
}

/// Output lines broken into the rows they occupy in a pane `width` wide
pub fn output_rows(lines: &[OutputLine], width: usize) -> Vec<(OutputKind, &str)> {
    lines
        .iter()
        .flat_map(|line| {
            wrap_rows(&line.text, width)
                .into_iter()
                .map(move |row| (line.kind, row))
        })
        .collect()
}

pub fn render_output<'a>(rows: &[(OutputKind, &'a str)], theme: &Theme) -> Paragraph<'a> {
    let lines: Vec<Line> = rows
        .iter()
        .map(|&(kind, text)| {
            Line::from(Span::styled(
                text,
                Style::default().fg(theme.output_color(kind)),
            ))
        })
        .collect();
    Paragraph::new(lines).style(Style::default().bg(theme.background))
}

pub fn render_prompt<'a>(prompt: &'a str, input: &'a InputLine, theme: &Theme) -> Paragraph<'a> {
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(theme.accent)),
        Span::styled(input.text(), Style::default().fg(theme.text)),
    ]);
    Paragraph::new(line).style(Style::default().bg(theme.surface))
}

/// Draws the whole screen: header, output pane, prompt line.
///
/// Returns the scroll offset actually shown, after clamping.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    input: &InputLine,
    scroll: usize,
    theme: &Theme,
) -> usize {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(render_header(app, theme), chunks[0]);

    let rows = output_rows(app.output(), chunks[1].width as usize);
    let range = visible_range(rows.len(), chunks[1].height as usize, scroll);
    let shown = rows.len() - range.end;
    frame.render_widget(render_output(&rows[range], theme), chunks[1]);

    let prompt = app.prompt();
    frame.render_widget(render_prompt(prompt, input, theme), chunks[2]);
    frame.set_cursor_position(cursor_position(chunks[2], prompt, input));
    shown
}

fn cursor_position(area: Rect, prompt: &str, input: &InputLine) -> (u16, u16) {
    let column = prompt.width() + input.cursor_column();
    let max_x = area.x + area.width.saturating_sub(1);
    let x = (area.x as usize + column).min(max_x as usize) as u16;
    (x, area.y)
}
