use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store;
use crate::model::{Filter, Item};
use crate::ops::list_ops;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the list
    Navigate,
    /// Typing into the add box
    Input,
    /// Editing one row's text inline
    Edit,
}

/// Transient per-row edit state. Exists only while a row is being edited;
/// the draft is independent of the committed text until commit or cancel.
#[derive(Debug, Clone)]
pub struct RowEdit {
    /// Id of the item being edited
    pub item_id: String,
    /// In-progress text
    pub draft: String,
    /// Cursor byte offset into the draft
    pub cursor: usize,
    /// Committed text at edit start, for the cancel path
    pub original: String,
}

impl RowEdit {
    /// Seed a draft from an item's committed text, cursor at the end
    pub fn seed(item: &Item) -> Self {
        RowEdit {
            item_id: item.id.clone(),
            draft: item.text.clone(),
            cursor: item.text.len(),
            original: item.text.clone(),
        }
    }
}

/// Main application state
pub struct App {
    /// The collection — single source of truth, mirrored to the store on change
    pub items: Vec<Item>,
    /// Active filter (transient, never persisted)
    pub filter: Filter,
    /// Where the collection is persisted
    pub store_path: PathBuf,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Add box contents
    pub input_buffer: String,
    /// Cursor byte offset into the add box
    pub input_cursor: usize,
    /// Inline edit state (Some while a row is in edit mode)
    pub edit: Option<RowEdit>,
    /// One-line message for the status row (e.g. a failed save)
    pub status_message: Option<String>,
}

impl App {
    pub fn new(items: Vec<Item>, store_path: PathBuf) -> Self {
        App {
            items,
            filter: Filter::All,
            store_path,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            cursor: 0,
            scroll_offset: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            edit: None,
            status_message: None,
        }
    }

    /// The items visible under the active filter, in list order
    pub fn visible_items(&self) -> Vec<&Item> {
        list_ops::visible(&self.items, self.filter)
    }

    /// Id of the item under the cursor, if any
    pub fn cursor_item_id(&self) -> Option<String> {
        self.visible_items().get(self.cursor).map(|i| i.id.clone())
    }

    /// Count of items not yet completed
    pub fn remaining(&self) -> usize {
        list_ops::remaining_count(&self.items)
    }

    /// Keep the cursor inside the visible list after a mutation or filter change
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        if len == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Mirror the collection to the store. A failed save becomes a
    /// status-row message instead of tearing down the terminal.
    pub fn persist(&mut self) {
        if let Err(e) = store::save(&self.store_path, &self.items) {
            self.status_message = Some(format!("save failed: {}", e));
        }
    }

    /// Drop the edit state if its item no longer exists
    /// (e.g. removed by `clear_completed` while a row was mid-edit).
    pub fn drop_stale_edit(&mut self) {
        if let Some(edit) = &self.edit
            && list_ops::find(&self.items, &edit.item_id).is_none()
        {
            self.edit = None;
            if self.mode == Mode::Edit {
                self.mode = Mode::Navigate;
            }
        }
    }
}

/// Run the TUI application
pub fn run(store_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let items = store::load(&store_path);
    let mut app = App::new(items, store_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
