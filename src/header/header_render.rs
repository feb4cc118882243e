use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::theme;

use super::header_config::HeaderImage;
use super::header_layout::{BODY_PADDING_COLS, BodyLine};
use super::header_view::CollapsingHeaderView;

const RULE_SYMBOL: &str = "─";

impl Widget for &CollapsingHeaderView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let layout = self.layout(area.width);
        let frame = self.frame();
        let metrics = self.metrics();

        let scroll_row = metrics.scroll_row(frame.scroll_offset);
        let image_shift = metrics.signed_rows(frame.header_translate_y);
        let title_shift = metrics.signed_rows(frame.title_translate_y);
        let header_rows = layout.header_rows as usize;

        let sampler = ImageSampler::new(&self.config().image, area.width, layout.header_rows);
        let title_top = (layout.header_rows as i32 - layout.title_lines.len() as i32) / 2;

        for dy in 0..area.height {
            let y = area.y + dy;
            let row = scroll_row + dy as usize;

            if row < header_rows {
                let header_row = row as i32;
                render_image_row(&sampler, header_row - image_shift, area, y, buf);

                let title_index = header_row - title_shift - title_top;
                if frame.title_visible() && title_index >= 0 {
                    if let Some(line) = layout.title_lines.get(title_index as usize) {
                        render_title_line(line, frame.title_opacity, area, y, buf);
                    }
                }
            } else {
                render_body_row(layout.body.get(row - header_rows), area, y, buf);
            }
        }
    }
}

/// Samples the header image so that it covers the whole header region
struct ImageSampler<'a> {
    image: &'a HeaderImage,
    width: u16,
    height: u16,
    art_width: usize,
    scale: f64,
    crop_x: f64,
    crop_y: f64,
}

impl<'a> ImageSampler<'a> {
    fn new(image: &'a HeaderImage, width: u16, height: u16) -> Self {
        let (art_width, art_height) = match image {
            HeaderImage::Art(lines) => (
                lines.iter().map(|line| line.chars().count()).max().unwrap_or(0),
                lines.len(),
            ),
            HeaderImage::Gradient { .. } => (0, 0),
        };

        let (scale, crop_x, crop_y) = if art_width == 0 || art_height == 0 {
            (1.0, 0.0, 0.0)
        } else {
            let scale = (width as f64 / art_width as f64).max(height as f64 / art_height as f64);
            (
                scale,
                (art_width as f64 * scale - width as f64) / 2.0,
                (art_height as f64 * scale - height as f64) / 2.0,
            )
        };

        Self {
            image,
            width,
            height,
            art_width,
            scale,
            crop_x,
            crop_y,
        }
    }

    /// Symbol, foreground and background for one image cell, before dimming.
    /// Rows outside the image show the empty surface.
    fn sample(&self, x: u16, image_row: i32) -> (char, Color, Color) {
        if image_row < 0 || image_row >= self.height as i32 || x >= self.width {
            return (' ', theme::header::EMPTY, theme::header::EMPTY);
        }

        let progress = if self.height > 1 {
            image_row as f64 / (self.height - 1) as f64
        } else {
            0.0
        };

        match self.image {
            HeaderImage::Gradient { top, bottom } => {
                let color = theme::mix(*top, *bottom, progress);
                (' ', color, color)
            }
            HeaderImage::Art(lines) => {
                let background = theme::mix(
                    theme::header::GRADIENT_TOP,
                    theme::header::GRADIENT_BOTTOM,
                    progress,
                );
                let symbol = if self.art_width == 0 {
                    ' '
                } else {
                    let src_x = ((x as f64 + 0.5 + self.crop_x) / self.scale).floor() as usize;
                    let src_y =
                        ((image_row as f64 + 0.5 + self.crop_y) / self.scale).floor() as usize;
                    lines
                        .get(src_y)
                        .and_then(|line| line.chars().nth(src_x))
                        .unwrap_or(' ')
                };
                (symbol, theme::header::ART_FG, background)
            }
        }
    }
}

fn render_image_row(sampler: &ImageSampler, image_row: i32, area: Rect, y: u16, buf: &mut Buffer) {
    for dx in 0..area.width {
        let (symbol, fg, bg) = sampler.sample(dx, image_row);
        let cell = &mut buf[(area.x + dx, y)];
        cell.reset();
        cell.set_char(symbol)
            .set_fg(theme::dim(fg))
            .set_bg(theme::dim(bg));
    }
}

fn render_title_line(line: &str, opacity: f64, area: Rect, y: u16, buf: &mut Buffer) {
    let line_width = line.chars().count() as u16;
    let start = area.width.saturating_sub(line_width) / 2;

    for (i, symbol) in line.chars().enumerate() {
        let dx = start + i as u16;
        if dx >= area.width {
            break;
        }
        let cell = &mut buf[(area.x + dx, y)];
        let fg = theme::blend(theme::header::TITLE, cell.bg, opacity);
        cell.set_char(symbol)
            .set_fg(fg)
            .set_style(Style::default().add_modifier(Modifier::BOLD));
    }
}

fn render_body_row(line: Option<&BodyLine>, area: Rect, y: u16, buf: &mut Buffer) {
    let row = Rect::new(area.x, y, area.width, 1);
    for dx in 0..area.width {
        buf[(area.x + dx, y)].reset();
    }
    buf.set_style(row, Style::default().bg(theme::body::BACKGROUND));

    let inner_width = area.width.saturating_sub(BODY_PADDING_COLS * 2) as usize;
    let x = area.x + BODY_PADDING_COLS.min(area.width);

    match line {
        Some(BodyLine::Text(text)) => {
            buf.set_stringn(
                x,
                y,
                text,
                inner_width,
                Style::default().fg(theme::body::TEXT),
            );
        }
        Some(BodyLine::Rule) => {
            buf.set_stringn(
                x,
                y,
                RULE_SYMBOL.repeat(inner_width),
                inner_width,
                Style::default().fg(theme::body::RULE),
            );
        }
        Some(BodyLine::Blank) | None => {}
    }
}

#[cfg(test)]
#[path = "header_render_tests.rs"]
mod header_render_tests;
