use crate::state::{FormCursor, FormPhase, Page, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

/// Apply one key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            state.toggle_log();
            return true;
        }
        _ => {}
    }

    // An open alert swallows everything until dismissed
    if state.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.dismiss_alert();
        }
        return true;
    }

    if let KeyCode::F(number) = key.code {
        if let Some(page) = Page::from_number(number) {
            state.navigate(page);
        }
        return true;
    }

    match state.current_page() {
        Page::Home => handle_home(state, key),
        Page::About => handle_about(state, key),
        Page::Apply => handle_apply(state, key),
    }
}

/// Keys shared by pages without text input.
///
fn handle_browsing(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char(c) => {
            if let Some(page) = c.to_digit(10).and_then(|d| Page::from_number(d as u8)) {
                state.navigate(page);
            }
        }
        _ => {}
    }
    true
}

fn handle_home(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            state.navigate(Page::About);
            true
        }
        _ => handle_browsing(state, key),
    }
}

fn handle_about(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            state.navigate(Page::Apply);
            true
        }
        KeyCode::Esc | KeyCode::Backspace => {
            state.navigate(Page::Home);
            true
        }
        _ => handle_browsing(state, key),
    }
}

fn handle_apply(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Esc {
        state.navigate(Page::About);
        return true;
    }
    if state.form().phase() == FormPhase::Submitted {
        return handle_browsing(state, key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => submit(state),
        (KeyCode::Tab, _) | (KeyCode::Down, _) => state.form_mut().next_cursor(),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => state.form_mut().prev_cursor(),
        (KeyCode::Enter, _) => {
            if state.form().cursor() == FormCursor::Submit {
                submit(state);
            } else {
                state.form_mut().next_cursor();
            }
        }
        (KeyCode::Backspace, _) => state.form_mut().backspace(),
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.form_mut().input(c)
        }
        _ => {}
    }
    true
}

fn submit(state: &mut State) {
    match state.submit_application() {
        Ok(attempt) => debug!("Submit pressed: {:?}", attempt),
        Err(e) => error!("Failed to submit application: {}", e),
    }
}
