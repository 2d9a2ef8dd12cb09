//! Integration tests for the capture API
//!
//! These tests drive whole capture sessions through the public API and make
//! assertions about the generated JavaScript.

use limner::{
    CaptureConfig, CaptureError, Html5Canvas, PaintCapture, PaintSurface,
    color::Color,
    geometry::{Bounds, Point, Size},
    paint::{PaintState, PaintStyle},
    path::Path,
};

fn new_capture(prefix: &str) -> PaintCapture<Html5Canvas> {
    PaintCapture::new(Html5Canvas::new(), CaptureConfig::new(prefix))
}

fn bounds(x: f32, y: f32, w: f32, h: f32) -> Bounds {
    Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
}

fn fill(r: u8, g: u8, b: u8) -> PaintState {
    PaintState::default().with_fill(PaintStyle::Solid(Color::rgb(r, g, b)))
}

#[test]
fn test_red_triangle_session() {
    let mut capture = new_capture("logo");
    capture.begin_element("shape1", bounds(0.0, 0.0, 10.0, 10.0));
    capture.on_style_update(fill(255, 0, 0)).expect("element is open");
    capture
        .on_draw_path(
            &Path::new()
                .move_to(0.0, 0.0)
                .line_to(10.0, 0.0)
                .line_to(10.0, 10.0),
        )
        .expect("element is open");

    let code = capture.code();
    assert!(code.contains("c.fillStyle = 'rgb(255, 0, 0)';"));
    assert!(code.contains("c.beginPath();"));
    assert!(code.contains("c.lineTo(10.0, 0.0);"));
    assert!(code.contains("c.lineTo(10.0, 10.0);"));
    assert!(code.contains("c.closePath();"));
    assert!(code.contains("c.fill();"));
    assert!(!code.contains("c.stroke();"));
    assert!(!code.contains("strokeStyle"));
}

#[test]
fn test_element_order_matches_begin_order() {
    let mut capture = new_capture("logo");
    capture.begin_element("a", bounds(0.0, 0.0, 1.0, 1.0));
    capture.begin_element("b", bounds(0.0, 0.0, 1.0, 1.0));

    let code = capture.code();
    let a_function = code.find("// 'a'").expect("function for a");
    let b_function = code.find("// 'b'").expect("function for b");
    assert!(a_function < b_function);

    let a_entry = code.find("'a': { id: 'a'").expect("table entry for a");
    let b_entry = code.find("'b': { id: 'b'").expect("table entry for b");
    assert!(a_entry < b_entry);
}

#[test]
fn test_generated_program_structure() {
    let mut capture = new_capture("my icon");
    capture.begin_element("shape1", bounds(2.5, 3.5, 20.0, 30.0));
    capture.on_style_update(fill(0, 0, 0)).expect("element is open");
    capture
        .on_draw_path(&Path::new().move_to(2.5, 3.5).line_to(22.5, 33.5))
        .expect("element is open");

    let code = capture.code();

    // Prefix sanitized into an identifier fragment.
    assert!(code.starts_with("// This file has been generated by limner\n"));
    assert!(code.contains("function my_icon_draw_000(c) // 'shape1'"));
    assert!(code.contains("var my_icon_elements = {"));
    assert!(code.contains("function my_icon_draw(context, id, x, y, width, height)"));

    // Bounds serialized to one decimal place.
    assert!(code.contains("bounds: { x: 2.5, y: 3.5, width: 20.0, height: 30.0 }"));

    // Unknown ids dispatch to nothing, and scaling only happens when the
    // caller passes a target size.
    assert!(code.contains("if (element !== undefined) {"));
    assert!(code.contains("if (width !== undefined && height !== undefined)"));
}

#[test]
fn test_style_is_not_restated_across_draws() {
    let mut capture = new_capture("logo");
    capture.begin_element("shape1", bounds(0.0, 0.0, 10.0, 10.0));
    capture.on_style_update(fill(7, 8, 9)).expect("element is open");
    capture.on_style_update(fill(7, 8, 9)).expect("element is open");

    let path = Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0);
    capture.on_draw_path(&path).expect("element is open");
    capture.on_draw_path(&path).expect("element is open");

    let code = capture.code();
    assert_eq!(code.matches("c.fillStyle").count(), 1);
    assert_eq!(code.matches("c.beginPath();").count(), 2);
}

#[test]
fn test_invisible_shape_generates_empty_function() {
    let mut capture = new_capture("logo");
    capture.begin_element("ghost", bounds(0.0, 0.0, 10.0, 10.0));
    capture
        .on_style_update(PaintState::default())
        .expect("element is open");
    capture
        .on_draw_path(&Path::new().move_to(0.0, 0.0).line_to(1.0, 1.0))
        .expect("element is open");

    let code = capture.code();
    assert!(code.contains("function logo_draw_000(c) // 'ghost'\n{\n}\n"));
    assert!(!code.contains("beginPath"));
}

#[test]
fn test_derived_bounds_reach_the_lookup_table() {
    let mut capture = new_capture("logo");
    capture.begin_element_from_paths("curve");
    capture.on_style_update(fill(0, 0, 0)).expect("element is open");
    capture
        .on_draw_path(&Path::new().move_to(10.0, 20.0).line_to(30.0, 25.0))
        .expect("element is open");
    capture
        .on_draw_path(&Path::new().move_to(5.0, 40.0).line_to(15.0, 45.0))
        .expect("element is open");

    let code = capture.code();
    assert!(code.contains("bounds: { x: 5.0, y: 20.0, width: 25.0, height: 25.0 }"));
}

#[test]
fn test_raw_element_stream_session() {
    let mut capture = new_capture("logo");
    capture.begin_element("shape1", bounds(0.0, 0.0, 10.0, 10.0));
    capture.on_style_update(fill(0, 0, 0)).expect("element is open");
    capture
        .draw_raw_path_elements([(0, 0.0, 0.0), (2, 1.0, 2.0), (3, 3.0, 4.0), (3, 5.0, 6.0)])
        .expect("well-formed stream");

    let code = capture.code();
    assert!(code.contains("c.bezierCurveTo(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);"));
}

#[test]
fn test_events_without_element_are_rejected() {
    let mut capture = new_capture("logo");
    let result = capture.on_draw_path(&Path::new().move_to(0.0, 0.0));
    assert_eq!(result, Err(CaptureError::NoCurrentElement));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = new_capture("one");
    first.begin_element("a", bounds(0.0, 0.0, 1.0, 1.0));
    first.on_style_update(fill(1, 2, 3)).expect("element is open");
    first
        .on_draw_path(&Path::new().move_to(0.0, 0.0))
        .expect("element is open");

    let mut second = new_capture("two");
    second.begin_element("b", bounds(0.0, 0.0, 1.0, 1.0));

    let first_code = first.code();
    let second_code = second.code();

    assert!(first_code.contains("one_draw_000"));
    assert!(!first_code.contains("two_"));
    assert!(second_code.contains("two_draw_000"));
    assert!(!second_code.contains("fillStyle"));
}

#[test]
fn test_into_elements_hands_over_capture_order() {
    let mut capture = new_capture("logo");
    capture.begin_element("first", bounds(0.0, 0.0, 1.0, 1.0));
    capture.begin_element("second", bounds(0.0, 0.0, 1.0, 1.0));

    let elements = capture.into_elements();
    let ids: Vec<_> = elements.iter().map(|element| element.id()).collect();
    assert_eq!(ids, ["first", "second"]);
}
