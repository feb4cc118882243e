//! Body content placed below the collapsing header

use std::fs;
use std::path::Path;

use crate::error::ParallaxError;

/// Filler text shown when no body file is given
pub const DEFAULT_BODY: &str = "Lorem, ipsum dolor sit amet consectetur adipisicing elit. \
Facere, quas blanditiis. Eos veniam aperiam accusamus reiciendis sunt ut, temporibus \
voluptas. Blanditiis voluptatum, eligendi libero repudiandae ullam molestias iste laborum \
nesciunt doloremque officiis quod culpa natus voluptate quia? Accusantium recusandae cumque \
voluptatem sunt alias dicta inventore ab ullam, fugiat voluptates deserunt atque. Eius amet \
sapiente dolor expedita dolores ratione velit maiores doloribus eum corporis sit quos maxime, \
delectus cumque esse aperiam id ipsum. Optio sit rerum tempore odio dolorum minus fugit \
labore, amet recusandae? Delectus optio saepe ad accusantium sed ullam dignissimos cum \
excepturi dolores quo. A dicta repellendus consequatur distinctio porro, cupiditate sit \
consequuntur repellat facilis possimus aspernatur? Qui non eaque ex nobis, itaque autem totam \
ratione veniam! Porro vero quod ipsam reiciendis fuga vel minus ducimus iste voluptatum, \
molestiae odio. Sunt delectus fugit est ut eos consequatur alias ullam, commodi velit iure \
natus inventore maxime! Amet fugit odit aliquid iusto distinctio eos corrupti, nemo fugiat \
repellat porro quibusdam hic vero minima error ullam, tempore laboriosam ad ea atque dolorum \
labore quam. Unde laudantium nulla, hic, sed, necessitatibus magnam illo eligendi impedit \
cumque doloremque tempore eos culpa! Rerum ratione illum, accusamus alias voluptates \
obcaecati sed. Consequatur dolore voluptate minus odit!";

const DIVIDER_MARKER: &str = "---";

/// One child element rendered below the header, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentElement {
    Paragraph(String),
    Divider,
}

impl ContentElement {
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentElement::Paragraph(text.into())
    }
}

pub fn default_body() -> Vec<ContentElement> {
    vec![ContentElement::paragraph(DEFAULT_BODY)]
}

/// Split text into elements: blank lines end a paragraph and a line holding
/// only `---` becomes a divider.
pub fn parse_body(text: &str) -> Vec<ContentElement> {
    let mut elements = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut current, &mut elements);
        } else if trimmed == DIVIDER_MARKER {
            flush_paragraph(&mut current, &mut elements);
            elements.push(ContentElement::Divider);
        } else {
            current.push(trimmed);
        }
    }
    flush_paragraph(&mut current, &mut elements);

    elements
}

fn flush_paragraph(current: &mut Vec<&str>, elements: &mut Vec<ContentElement>) {
    if !current.is_empty() {
        elements.push(ContentElement::Paragraph(current.join(" ")));
        current.clear();
    }
}

pub fn load_body(path: &Path) -> Result<Vec<ContentElement>, ParallaxError> {
    let text = fs::read_to_string(path).map_err(|source| ParallaxError::BodyRead {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(debug_assertions)]
    log::debug!("Loaded body from {:?}, {} bytes", path, text.len());

    Ok(parse_body(&text))
}

/// Wrap text to fit within a given width, breaking at word boundaries
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_line.is_empty() {
                current_line = word.to_string();
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(current_line);
                current_line = word.to_string();
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
