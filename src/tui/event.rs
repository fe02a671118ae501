use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// Blocking source of terminal events
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal. No polling, no timeout.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        let ev = event::read()?;
        if let Event::Key(key) = &ev {
            log::debug!("key event: {:?} with modifiers {:?}", key.code, key.modifiers);
        }
        Ok(ev)
    }
}

/// A fixed queue of events; errors with `UnexpectedEof` once drained.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        ScriptedEvents {
            events: events.into_iter().collect(),
        }
    }

    /// Queue a plain key press.
    pub fn key(mut self, code: KeyCode) -> Self {
        self.events
            .push_back(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        self
    }

    /// Queue a key press with modifiers.
    pub fn key_with(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.events.push_back(Event::Key(KeyEvent::new(code, modifiers)));
        self
    }

    /// Queue one key press per character of `text`.
    pub fn typed(mut self, text: &str) -> Self {
        for c in text.chars() {
            self = self.key(KeyCode::Char(c));
        }
        self
    }

    /// Queue a bracketed paste.
    pub fn paste(mut self, text: &str) -> Self {
        self.events.push_back(Event::Paste(text.to_string()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "event script exhausted"))
    }
}
