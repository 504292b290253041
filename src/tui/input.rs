use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Filter;
use crate::ops::list_ops;
use crate::util::unicode;

use super::app::{App, Mode, RowEdit};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

// ---------------------------------------------------------------------------
// Navigate mode
// ---------------------------------------------------------------------------

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_items().len();
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_items().len().saturating_sub(1);
        }

        // Filter chips
        KeyCode::Tab | KeyCode::Char('l') => set_filter(app, app.filter.next()),
        KeyCode::BackTab | KeyCode::Char('h') => set_filter(app, app.filter.prev()),
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Active),
        KeyCode::Char('3') => set_filter(app, Filter::Completed),

        // Item operations
        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_cursor_item(app),
        KeyCode::Char('d') | KeyCode::Delete => delete_cursor_item(app),
        KeyCode::Char('C') => clear_completed_action(app),
        KeyCode::Char('e') | KeyCode::Enter => enter_row_edit(app),
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Input;
        }
        _ => {}
    }
}

/// Switch filter: the cursor restarts at the top of the new view
fn set_filter(app: &mut App, filter: Filter) {
    app.filter = filter;
    app.cursor = 0;
    app.scroll_offset = 0;
}

fn toggle_cursor_item(app: &mut App) {
    let Some(id) = app.cursor_item_id() else {
        return;
    };
    if list_ops::toggle(&mut app.items, &id) {
        app.persist();
    }
    // Under active/completed the item just left the view
    app.clamp_cursor();
}

fn delete_cursor_item(app: &mut App) {
    let Some(id) = app.cursor_item_id() else {
        return;
    };
    if list_ops::remove(&mut app.items, &id) {
        app.persist();
    }
    app.clamp_cursor();
}

fn clear_completed_action(app: &mut App) {
    if list_ops::clear_completed(&mut app.items) {
        app.persist();
    }
    app.drop_stale_edit();
    app.clamp_cursor();
}

// ---------------------------------------------------------------------------
// Row editing (Viewing → Editing → Viewing)
// ---------------------------------------------------------------------------

/// Seed a draft from the cursor item's committed text and enter Edit mode
fn enter_row_edit(app: &mut App) {
    let Some(id) = app.cursor_item_id() else {
        return;
    };
    let Some(item) = list_ops::find(&app.items, &id) else {
        return;
    };
    app.edit = Some(RowEdit::seed(item));
    app.mode = Mode::Edit;
}

/// Commit path: apply the draft if it is non-empty and differs from the
/// committed text, otherwise discard silently. Either way, back to Viewing.
fn commit_row_edit(app: &mut App) {
    app.mode = Mode::Navigate;
    let Some(edit) = app.edit.take() else {
        return;
    };
    if list_ops::edit(&mut app.items, &edit.item_id, &edit.draft) {
        app.persist();
    }
}

/// Cancel path: throw the draft away without touching the item
fn cancel_row_edit(app: &mut App) {
    app.edit = None;
    app.mode = Mode::Navigate;
}

fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => commit_row_edit(app),
        KeyCode::Esc => cancel_row_edit(app),
        _ => {
            if let Some(edit) = &mut app.edit {
                line_edit_key(&mut edit.draft, &mut edit.cursor, key);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Input (add box) mode
// ---------------------------------------------------------------------------

fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Commit the add and keep the box focused for rapid entry.
        // A blank buffer is a no-op.
        KeyCode::Enter => {
            if let Some(id) = list_ops::add(&mut app.items, &app.input_buffer) {
                app.input_buffer.clear();
                app.input_cursor = 0;
                app.persist();
                // Follow the new item if the current filter shows it
                if let Some(pos) = app.visible_items().iter().position(|i| i.id == id) {
                    app.cursor = pos;
                }
            }
        }
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }
        _ => line_edit_key(&mut app.input_buffer, &mut app.input_cursor, key),
    }
}

// ---------------------------------------------------------------------------
// Shared single-line editing
// ---------------------------------------------------------------------------

/// Apply a key to a single-line buffer with a byte-offset cursor.
/// Movement is grapheme-aware.
fn line_edit_key(buffer: &mut String, cursor: &mut usize, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                *cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                *cursor = next;
            }
        }
        (_, KeyCode::Home) => *cursor = 0,
        (_, KeyCode::End) => *cursor = buffer.len(),
        (_, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                buffer.drain(prev..*cursor);
                *cursor = prev;
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        _ => {}
    }
}
