use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;

/// Longest wait for input when nothing is pending
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const MIN_POLL_TIMEOUT: Duration = Duration::from_millis(1);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Deliver an offset the throttle held back
        let pending = self.surface.poll();
        self.apply_scroll(pending);

        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Wake up in time to flush a throttled offset
    pub fn poll_timeout(&self) -> Duration {
        if self.surface.has_pending() {
            self.surface
                .throttle()
                .interval()
                .clamp(MIN_POLL_TIMEOUT, EVENT_POLL_TIMEOUT)
        } else {
            EVENT_POLL_TIMEOUT
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let row = self.row_units();

        let event = match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('d') if ctrl => self.surface.page_down(),
            KeyCode::Char('u') if ctrl => self.surface.page_up(),
            KeyCode::Char('j') | KeyCode::Down => self.surface.scroll_by(row),
            KeyCode::Char('k') | KeyCode::Up => self.surface.scroll_by(-row),
            KeyCode::PageDown | KeyCode::Char(' ') => self.surface.page_down(),
            KeyCode::PageUp => self.surface.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.surface.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.surface.jump_to_bottom(),
            _ => return,
        };

        self.apply_scroll(event);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
