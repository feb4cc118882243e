use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

const SCROLL_HINTS: &[(&str, &str)] = &[
    ("j/k", "Scroll"),
    ("PgUp/PgDn", "Page"),
    ("g/G", "Top/Bottom"),
    ("q", "Quit"),
];

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.surface.max_offset() > 0.0 {
        SCROLL_HINTS.to_vec()
    } else {
        hints!["q" => "Quit"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

/// Right-hand readout of the header frame, or the config warning when set
fn status_span(app: &App) -> Span<'static> {
    if let Some(warning) = &app.warning {
        return Span::styled(
            format!("{} ", warning),
            Style::default().fg(theme::help_line::WARNING),
        );
    }

    let frame = app.view.frame();
    Span::styled(
        format!(
            "offset {:.0} \u{2022} shift {:.1} \u{2022} title {:.0}% ",
            frame.scroll_offset,
            frame.header_translate_y,
            frame.title_opacity * 100.0
        ),
        Style::default().fg(theme::help_line::STATUS),
    )
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let status = status_span(app);
    let status_width = status.width() as u16;

    let [hints_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);

    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
