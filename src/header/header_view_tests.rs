//! Tests for CollapsingHeaderView

use super::*;
use crate::header::HeaderImage;
use crate::test_utils::test_helpers::test_view;

#[test]
fn test_new_view_starts_expanded() {
    let view = test_view();
    let frame = view.frame();

    assert_eq!(view.tracker().current(), 0.0);
    assert_eq!(frame.header_translate_y, 0.0);
    assert_eq!(frame.title_opacity, 1.0);
}

#[test]
fn test_on_scroll_updates_tracker_and_frame() {
    let mut view = test_view();

    view.on_scroll(ScrollEvent { offset: 125.0 });

    assert_eq!(view.tracker().current(), 125.0);
    assert_eq!(view.tracker().update_count(), 1);
    assert_eq!(view.frame().header_translate_y, 62.5);
    assert_eq!(view.frame().title_translate_y, 62.5);
}

#[test]
fn test_on_scroll_beyond_header() {
    let mut view = test_view();

    view.on_scroll(ScrollEvent { offset: 300.0 });

    assert_eq!(view.frame().header_translate_y, 125.0);
    assert_eq!(view.frame().title_opacity, 0.0);
}

#[test]
fn test_scrolling_back_restores_frame() {
    let mut view = test_view();
    let initial = view.frame();

    view.on_scroll(ScrollEvent { offset: 180.0 });
    view.on_scroll(ScrollEvent { offset: 0.0 });

    assert_eq!(view.frame(), initial);
}

#[test]
fn test_same_offset_twice_is_identical() {
    let mut view = test_view();

    view.on_scroll(ScrollEvent { offset: 135.0 });
    let first = view.frame();
    view.on_scroll(ScrollEvent { offset: 135.0 });

    assert_eq!(view.frame(), first);
    assert!((first.title_opacity - 0.45).abs() < 1e-9);
}

#[test]
fn test_children_keep_order() {
    let children = vec![
        ContentElement::paragraph("a"),
        ContentElement::Divider,
        ContentElement::paragraph("b"),
    ];
    let view = CollapsingHeaderView::new(
        HeaderConfig::new(HeaderImage::default(), "T"),
        children.clone(),
        HeaderAnimation::for_height(250.0).unwrap(),
        RowMetrics::default(),
    );

    assert_eq!(view.children(), children.as_slice());
    assert_eq!(view.config().title, "T");
}

#[test]
fn test_content_height_covers_header_and_body() {
    let view = CollapsingHeaderView::new(
        HeaderConfig::new(HeaderImage::default(), "T"),
        vec![ContentElement::paragraph("short")],
        HeaderAnimation::for_height(250.0).unwrap(),
        RowMetrics::default(),
    );

    // 10 header rows + padding, one text row, padding
    assert_eq!(view.content_rows(40), 13);
    assert_eq!(view.content_height(40), 325.0);
}
