use std::fs;
use std::path::Path;

use ratatui::style::Color;

use crate::error::ParallaxError;
use crate::theme;

pub const DEFAULT_HEADER_HEIGHT: f64 = 250.0;
pub const DEFAULT_TITLE: &str = "Terminal Parallax";

/// Reject header heights no layout can use
pub fn validate_height(height: f64) -> Result<f64, ParallaxError> {
    if height.is_finite() && height >= 0.0 {
        Ok(height)
    } else {
        Err(ParallaxError::InvalidHeight(height))
    }
}

/// Background drawn to cover the header region
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderImage {
    Gradient { top: Color, bottom: Color },
    /// Text art, one entry per row, drawn over the default gradient
    Art(Vec<String>),
}

impl Default for HeaderImage {
    fn default() -> Self {
        HeaderImage::Gradient {
            top: theme::header::GRADIENT_TOP,
            bottom: theme::header::GRADIENT_BOTTOM,
        }
    }
}

impl HeaderImage {
    pub fn from_file(path: &Path) -> Result<Self, ParallaxError> {
        let text = fs::read_to_string(path).map_err(|source| ParallaxError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;

        let lines: Vec<String> = text.lines().map(|line| line.trim_end().to_string()).collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(ParallaxError::EmptyImage(path.to_path_buf()));
        }

        #[cfg(debug_assertions)]
        log::debug!("Loaded header art from {:?}, {} rows", path, lines.len());

        Ok(HeaderImage::Art(lines))
    }
}

/// Immutable header inputs supplied by the hosting screen
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderConfig {
    pub image: HeaderImage,
    pub title: String,
    /// Header height in layout units
    pub height: f64,
}

impl HeaderConfig {
    pub fn new(image: HeaderImage, title: impl Into<String>) -> Self {
        Self {
            image,
            title: title.into(),
            height: DEFAULT_HEADER_HEIGHT,
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_uses_default_height() {
        let config = HeaderConfig::new(HeaderImage::default(), "Title");
        assert_eq!(config.height, DEFAULT_HEADER_HEIGHT);
        assert_eq!(config.title, "Title");
    }

    #[test]
    fn test_value_equality() {
        let a = HeaderConfig::new(HeaderImage::default(), "Same");
        let b = HeaderConfig::new(HeaderImage::default(), "Same");
        assert_eq!(a, b);
        assert_ne!(a, b.with_height(100.0));
    }

    #[test]
    fn test_validate_height_accepts_zero_and_up() {
        assert_eq!(validate_height(0.0).unwrap(), 0.0);
        assert_eq!(validate_height(DEFAULT_HEADER_HEIGHT).unwrap(), 250.0);
    }

    #[test]
    fn test_validate_height_rejects_negative_and_non_finite() {
        for height in [-10.0, f64::NAN, f64::INFINITY] {
            let err = validate_height(height).unwrap_err();
            assert!(matches!(err, ParallaxError::InvalidHeight(_)));
            assert!(err.to_string().starts_with("Invalid header height"));
        }
    }

    #[test]
    fn test_art_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  /\\  \n /  \\ \n/____\\").unwrap();

        let image = HeaderImage::from_file(file.path()).unwrap();
        assert_eq!(
            image,
            HeaderImage::Art(vec![
                "  /\\".to_string(),
                " /  \\".to_string(),
                "/____\\".to_string(),
            ])
        );
    }

    #[test]
    fn test_blank_art_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n\n").unwrap();

        let err = HeaderImage::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ParallaxError::EmptyImage(_)));
    }

    #[test]
    fn test_missing_art_file() {
        let err = HeaderImage::from_file(Path::new("/no/such/art.txt")).unwrap_err();
        assert!(matches!(err, ParallaxError::ImageRead { .. }));
        assert!(err.to_string().contains("Failed to read header image"));
    }
}
