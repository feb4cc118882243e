mod app_events;
mod app_render;
mod app_state;
mod mouse_events;
mod mouse_scroll;


// Re-export public types
pub use app_state::App;
pub use mouse_scroll::ScrollDirection;
