//! Event handler for the TUI
//!
//! Routes keyboard events to chart navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_chart(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_chart(),
        KeyCode::Char(c @ '1'..='3') => {
            if let Some(position) = c.to_digit(10) {
                app.select_chart(position as usize);
            }
        }
        _ => {}
    }
}
