//! Footer help line
//!
//! Key hints on the left, live header readout (or a config warning) on the right.

pub mod help_line_render;
