use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::util::unicode;

use super::app::{App, Mode};

/// Render the whole screen: filter bar, list, add box, status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // filter chips + separator
            Constraint::Min(1),    // list
            Constraint::Length(1), // add box
            Constraint::Length(1), // status row
        ])
        .split(frame.area());

    // Paint the background once
    let bg = Paragraph::new("").style(Style::default().bg(app.theme.background));
    frame.render_widget(bg, frame.area());

    render_filter_bar(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_input_row(frame, app, chunks[2]);
    render_status_row(frame, app, chunks[3]);
}

// ---------------------------------------------------------------------------
// Filter chips
// ---------------------------------------------------------------------------

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // chips
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg_style = Style::default().bg(app.theme.background);
    let mut spans: Vec<Span> = vec![Span::styled(" ", bg_style)];
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(app.theme.background));

    for (i, filter) in Filter::ALL.iter().enumerate() {
        let is_current = *filter == app.filter;
        let style = if is_current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(app.theme.background)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        if i + 1 < Filter::ALL.len() {
            spans.push(sep.clone());
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(bg_style),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(app.theme.dim).bg(app.theme.background)),
        chunks[1],
    );
}

// ---------------------------------------------------------------------------
// Item list
// ---------------------------------------------------------------------------

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    // Snapshot the visible rows so the borrow of `app.items` ends before
    // the cursor/scroll bookkeeping below
    let rows: Vec<(String, String, bool)> = app
        .visible_items()
        .iter()
        .map(|i| (i.id.clone(), i.text.clone(), i.completed))
        .collect();

    if rows.is_empty() {
        let hint = match app.filter {
            Filter::All => " Nothing here yet. Press a to add an item.",
            Filter::Active => " No active items",
            Filter::Completed => " No completed items",
        };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and scroll to the view
    let cursor = app.cursor.min(rows.len() - 1);
    let height = area.height as usize;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if height > 0 && cursor >= app.scroll_offset + height {
        app.scroll_offset = cursor + 1 - height;
    }
    let scroll = app.scroll_offset;

    let mut lines: Vec<Line> = Vec::new();
    for (idx, (id, text, completed)) in rows.iter().enumerate().skip(scroll).take(height) {
        let is_cursor = idx == cursor;
        let row_bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let mut spans: Vec<Span> = Vec::new();

        // Cursor bar in column 0
        if is_cursor {
            spans.push(Span::styled(
                "\u{258E}",
                Style::default().fg(app.theme.selection_border).bg(row_bg),
            ));
        } else {
            spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        }

        // Checkbox
        let checkbox = if *completed { "[x] " } else { "[ ] " };
        let checkbox_fg = if *completed {
            app.theme.green
        } else {
            app.theme.text
        };
        spans.push(Span::styled(
            checkbox,
            Style::default().fg(checkbox_fg).bg(row_bg),
        ));

        // Text, or the in-progress draft when this row is being edited
        let text_width = (area.width as usize).saturating_sub(5);
        let editing_here = app.mode == Mode::Edit
            && app.edit.as_ref().is_some_and(|e| e.item_id == *id);
        if editing_here {
            if let Some(edit) = &app.edit {
                spans.push(Span::styled(
                    edit.draft.clone(),
                    Style::default().fg(app.theme.text_bright).bg(row_bg),
                ));
                spans.push(Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(row_bg),
                ));
            }
        } else {
            let mut style = Style::default().fg(app.theme.text).bg(row_bg);
            if *completed {
                style = Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT);
            } else if is_cursor {
                style = Style::default().fg(app.theme.text_bright).bg(row_bg);
            }
            spans.push(Span::styled(
                unicode::truncate_to_width(text, text_width),
                style,
            ));
        }

        // Pad the row so the selection background reaches the edge
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if used < area.width as usize {
            spans.push(Span::styled(
                " ".repeat(area.width as usize - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        area,
    );
}

// ---------------------------------------------------------------------------
// Add box
// ---------------------------------------------------------------------------

fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = if app.mode == Mode::Input {
        let mut spans = vec![
            Span::styled(" + ", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(
                app.input_buffer.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
        ];
        let hint = "Enter add  Esc done";
        pad_with_hint(&mut spans, hint, area.width as usize, app, bg);
        Line::from(spans)
    } else {
        Line::from(Span::styled(
            " + add an item (a)",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

// ---------------------------------------------------------------------------
// Status row
// ---------------------------------------------------------------------------

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let remaining = app.remaining();
    let noun = if remaining == 1 { "item" } else { "items" };

    let mut spans = vec![Span::styled(
        format!(" {} {} left", remaining, noun),
        Style::default().fg(app.theme.text).bg(bg),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!("  {}", msg),
            Style::default().fg(app.theme.red).bg(bg),
        ));
    }

    let hint = match app.mode {
        Mode::Navigate => "space toggle  e edit  d delete  C clear done  q quit",
        Mode::Input => "",
        Mode::Edit => "Enter save  Esc cancel",
    };
    pad_with_hint(&mut spans, hint, area.width as usize, app, bg);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Right-align a dimmed hint after the existing spans, padding the gap
fn pad_with_hint(
    spans: &mut Vec<Span>,
    hint: &str,
    width: usize,
    app: &App,
    bg: ratatui::style::Color,
) {
    let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let hint_width = unicode::display_width(hint);
    if !hint.is_empty() && content_width + hint_width + 1 < width {
        let padding = width - content_width - hint_width - 1;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
