//! Collapsing header view
//!
//! A fixed-height header (image, dim layer, title) above the body content, all
//! inside one scroll surface. The header image drifts at half the scroll speed
//! and the title fades out before the header leaves the viewport.

mod header_animation;
mod header_config;
mod header_layout;
mod header_render;
mod header_view;

pub use header_animation::{HeaderAnimation, HeaderFrame};
pub use header_config::{
    DEFAULT_HEADER_HEIGHT, DEFAULT_TITLE, HeaderConfig, HeaderImage, validate_height,
};
pub use header_layout::{BodyLine, ContentLayout, DEFAULT_UNITS_PER_ROW, RowMetrics};
pub use header_view::CollapsingHeaderView;
