mod draw;
mod people;
mod terminal;

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use log::{debug, info};
use picker::catalog::{ensure_unique_slugs, load_candidates};
use picker::prelude::*;
use picker::wakeup;
use picker::DEFAULT_DEBOUNCE_MS;
use simplelog::{Config, LevelFilter, WriteLogger};

use terminal::TerminalGuard;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error("Invalid debounce delay {0:?}, expected milliseconds")]
    InvalidDelay(String),
}

/// What the event loop should do after an event.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The host side of one mounted selector.
struct Demo {
    selector: Selector,
    focused: bool,
    last_pick: Arc<Mutex<Option<Candidate>>>,
}

impl Demo {
    fn focus(&mut self) {
        self.focused = true;
        self.selector.on_focus();
    }

    fn edit(&mut self, f: impl FnOnce(&mut String)) {
        if !self.focused {
            self.focus();
        }
        let mut text = self.selector.text();
        let before = text.clone();
        f(&mut text);
        if text != before {
            self.selector.on_text_change(text);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Esc => Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Tab => {
                self.focus();
                Flow::Continue
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit(|text| text.push(c));
                Flow::Continue
            }
            KeyCode::Backspace => {
                self.edit(|text| {
                    text.pop();
                });
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if mouse.row == draw::INPUT_ROW {
            self.focus();
            return;
        }

        let view = self.selector.view();
        let key = draw::dropdown_line(&view, mouse.row)
            .and_then(|line| view.dropdown.as_ref()?.row_at(line))
            .map(|row| row.key.clone());
        match key {
            Some(key) => {
                self.selector.activate(&key);
            }
            None => {
                debug!("Click at row {} outside the selector", mouse.row);
                self.focused = false;
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn status(&self) -> String {
        let last_pick = self.last_pick.lock().map(|guard| guard.clone()).unwrap_or(None);
        match last_pick {
            Some(person) => format!("Selected: {} ({})", person.name, person.slug),
            None => "Selected: none".to_string(),
        }
    }
}

async fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let candidates = match args.next() {
        Some(path) => load_candidates(&path)?,
        None => people::default_people(),
    };
    ensure_unique_slugs(&candidates)?;
    let delay_ms = match args.next() {
        Some(ms) => ms.parse::<u64>().map_err(|_| DemoError::InvalidDelay(ms))?,
        None => DEFAULT_DEBOUNCE_MS,
    };
    info!("Starting with {} candidates, delay {}ms", candidates.len(), delay_ms);

    let last_pick = Arc::new(Mutex::new(None));
    let last_pick_clone = Arc::clone(&last_pick);
    let (wakeup_tx, mut wakeup_rx) = wakeup::channel();

    let selector = Selector::builder(candidates)
        .config(SelectorConfig::new().with_debounce_ms(delay_ms))
        .wakeup(wakeup_tx)
        .on_selection_change(move |picked: Option<&Candidate>| {
            info!("Selection changed: {:?}", picked.map(|p| &p.slug));
            if let Ok(mut guard) = last_pick_clone.lock() {
                *guard = picked.cloned();
            }
        })
        .build()?;

    let mut demo = Demo {
        selector,
        focused: false,
        last_pick,
    };

    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    draw::draw(terminal.out(), &demo.selector.view(), demo.focused, &demo.status())?;

    loop {
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if demo.handle_event(event) == Flow::Quit {
                        break;
                    }
                }
                Some(Err(e)) => {
                    demo.selector.dispose();
                    return Err(e.into());
                }
                None => break,
            },
            Some(()) = wakeup_rx.recv() => {
                wakeup_rx.drain();
            }
        }

        demo.selector.clear_dirty();
        draw::draw(terminal.out(), &demo.selector.view(), demo.focused, &demo.status())?;
    }

    demo.selector.dispose();
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("picker-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
