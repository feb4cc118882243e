//! Tests for ScrollSurface

use super::*;
use std::time::Duration;

fn unthrottled(content: f64, viewport: f64) -> ScrollSurface {
    let mut surface = ScrollSurface::new(ScrollThrottle::new(Duration::ZERO));
    surface.update_bounds(content, viewport);
    surface
}

#[test]
fn test_new_surface() {
    let surface = ScrollSurface::default();
    assert_eq!(surface.offset(), 0.0);
    assert_eq!(surface.max_offset(), 0.0);
    assert!(!surface.has_pending());
}

#[test]
fn test_max_offset_small_content() {
    // Content fits in viewport
    let surface = unthrottled(200.0, 500.0);
    assert_eq!(surface.max_offset(), 0.0);
}

#[test]
fn test_max_offset_large_content() {
    let surface = unthrottled(1000.0, 400.0);
    assert_eq!(surface.max_offset(), 600.0);
    assert_eq!(surface.content_height(), 1000.0);
    assert_eq!(surface.viewport_height(), 400.0);
}

#[test]
fn test_scroll_by_reports_event() {
    let mut surface = unthrottled(1000.0, 400.0);

    assert_eq!(surface.scroll_by(25.0), Some(ScrollEvent { offset: 25.0 }));
    assert_eq!(surface.scroll_by(25.0), Some(ScrollEvent { offset: 50.0 }));
    assert_eq!(surface.offset(), 50.0);
}

#[test]
fn test_no_bounce_at_top() {
    let mut surface = unthrottled(1000.0, 400.0);
    surface.scroll_by(30.0);

    assert_eq!(surface.scroll_by(-100.0), Some(ScrollEvent { offset: 0.0 }));
    assert_eq!(surface.offset(), 0.0);
}

#[test]
fn test_fling_stops_at_end() {
    let mut surface = unthrottled(1000.0, 400.0);

    assert_eq!(
        surface.scroll_by(10_000.0),
        Some(ScrollEvent { offset: 600.0 })
    );
}

#[test]
fn test_unchanged_offset_reports_nothing() {
    let mut surface = unthrottled(1000.0, 400.0);

    assert_eq!(surface.scroll_by(-25.0), None);
    surface.jump_to_bottom();
    assert_eq!(surface.scroll_by(25.0), None);
}

#[test]
fn test_nan_target_is_ignored() {
    let mut surface = unthrottled(1000.0, 400.0);
    surface.scroll_by(50.0);

    assert_eq!(surface.scroll_to(f64::NAN), None);
    assert_eq!(surface.offset(), 50.0);
}

#[test]
fn test_page_down_and_up() {
    let mut surface = unthrottled(1000.0, 400.0);

    surface.page_down();
    assert_eq!(surface.offset(), 200.0); // Half of the viewport

    surface.page_down();
    assert_eq!(surface.offset(), 400.0);

    surface.page_up();
    assert_eq!(surface.offset(), 200.0);
}

#[test]
fn test_jump_to_top_and_bottom() {
    let mut surface = unthrottled(1000.0, 400.0);

    surface.jump_to_bottom();
    assert_eq!(surface.offset(), 600.0);

    surface.jump_to_top();
    assert_eq!(surface.offset(), 0.0);
}

#[test]
fn test_update_bounds_clamps_offset() {
    let mut surface = unthrottled(1000.0, 400.0);
    surface.jump_to_bottom();

    // Content shrinks under the current offset
    let event = surface.update_bounds(700.0, 400.0);
    assert_eq!(event, Some(ScrollEvent { offset: 300.0 }));
    assert_eq!(surface.offset(), 300.0);
}

#[test]
fn test_update_bounds_without_change_reports_nothing() {
    let mut surface = unthrottled(1000.0, 400.0);
    surface.scroll_by(100.0);

    assert_eq!(surface.update_bounds(1200.0, 400.0), None);
    assert_eq!(surface.offset(), 100.0);
}

#[test]
fn test_throttled_offsets_flush_on_poll() {
    let start = Instant::now();
    let mut surface = ScrollSurface::new(ScrollThrottle::new(Duration::from_millis(20)));
    surface.update_bounds(1000.0, 400.0);

    assert_eq!(
        surface.scroll_by_at(25.0, start),
        Some(ScrollEvent { offset: 25.0 })
    );
    assert_eq!(surface.scroll_by_at(25.0, start + Duration::from_millis(5)), None);
    assert_eq!(surface.scroll_by_at(25.0, start + Duration::from_millis(8)), None);

    // The surface itself already moved
    assert_eq!(surface.offset(), 75.0);
    assert!(surface.has_pending());

    assert_eq!(surface.poll_at(start + Duration::from_millis(10)), None);
    assert_eq!(
        surface.poll_at(start + Duration::from_millis(20)),
        Some(ScrollEvent { offset: 75.0 })
    );
    assert!(!surface.has_pending());
}
