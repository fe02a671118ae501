use std::io;
use std::path::{Path, PathBuf};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::io::store::{load_todos, save_todos};
use crate::model::TodoList;
use crate::ops::todo_ops;

use super::event::{CrosstermEvents, EventSource};
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Top-level list navigation
    Navigate,
    /// Composing a new todo in `App::add_buffer`
    Add,
    /// Waiting for a second `d` to delete the selected todo
    ConfirmDelete,
}

/// Main application state
pub struct App {
    pub todos: TodoList,
    /// Index of the selected todo (0 when the list is empty)
    pub selected: usize,
    /// First list row visible on screen
    pub scroll_offset: usize,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Text typed so far in Add mode
    pub add_buffer: String,
    /// One-line message on the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Where every mutation is persisted
    pub store_path: PathBuf,
}

impl App {
    pub fn new(todos: TodoList, store_path: PathBuf) -> Self {
        App {
            todos,
            selected: 0,
            scroll_offset: 0,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::default(),
            add_buffer: String::new(),
            status_message: None,
            store_path,
        }
    }

    /// Re-clamp the selection into the list bounds.
    pub fn clamp_selection(&mut self) {
        self.selected = todo_ops::clamp_selection(self.selected, self.todos.len());
    }

    /// Adjust the scroll offset so the selected row is among `height` visible rows.
    pub fn scroll_into_view(&mut self, height: usize) {
        let height = height.max(1);
        let max_scroll = self.todos.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected + 1 - height;
        }
    }

    /// Persist the whole list. A failed write is reported on the status row
    /// and the session carries on with the in-memory list.
    pub fn save(&mut self) -> bool {
        match save_todos(&self.store_path, &self.todos) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                self.status_message = Some(format!("save failed: {}", e));
                false
            }
        }
    }
}

/// Restore the terminal to cooked mode on the main screen.
fn restore_terminal() {
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        crossterm::cursor::Show
    );
    let _ = disable_raw_mode();
}

/// Holds the terminal in raw mode on the alternate screen until dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Run the TUI against the store at `store_path`
pub fn run(store_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Load before touching the terminal so a corrupt store fails cleanly
    let todos = load_todos(store_path)?;
    let mut app = App::new(todos, store_path.to_path_buf());

    let _guard = TerminalGuard::acquire()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    run_event_loop(&mut terminal, &mut app, &mut CrosstermEvents)?;

    info!("quit with {} todos", app.todos.len());
    Ok(())
}

/// Draw, block for one event, dispatch it; until the app asks to quit.
pub fn run_event_loop<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut E,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match events.next_event()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
            Event::Paste(text) => input::handle_paste(app, &text),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
