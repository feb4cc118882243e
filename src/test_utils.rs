//! Shared test utilities for parallax
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::content::default_body;
    use crate::header::{
        CollapsingHeaderView, HeaderAnimation, HeaderConfig, HeaderImage, RowMetrics,
    };
    use ratatui::{
        Terminal,
        backend::TestBackend,
        buffer::Buffer,
        crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    };

    /// Default 250-unit header titled "Parallax" over the built-in body
    pub fn test_view() -> CollapsingHeaderView {
        let config = HeaderConfig::new(HeaderImage::default(), "Parallax");
        let animation = HeaderAnimation::for_height(config.height).unwrap();
        CollapsingHeaderView::new(config, default_body(), animation, RowMetrics::default())
    }

    /// App with the throttle disabled so every scroll reaches the view
    pub fn test_app() -> App {
        let mut config = Config::default();
        config.scroll.throttle_ms = 0;
        App::new(test_view(), &config)
    }

    /// Test app drawn once on a `width` x `height` terminal, so the
    /// scroll surface knows its bounds
    pub fn sized_app(width: u16, height: u16) -> App {
        let mut app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        app
    }

    /// Symbols of one buffer row joined into a string
    pub fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
