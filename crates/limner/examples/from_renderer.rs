//! Example: driving a capture session by hand and printing the generated
//! JavaScript.
//!
//! A real integration would issue these events from a vector-graphic
//! renderer; here the shapes are scripted to keep the example
//! self-contained.

use limner::{
    CaptureConfig, Html5Canvas, PaintCapture, PaintSurface,
    color::Color,
    geometry::{Bounds, Point, Size},
    paint::{PaintState, PaintStyle},
    path::Path,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let mut capture = PaintCapture::new(Html5Canvas::new(), CaptureConfig::new("demo"));

    // A filled red triangle.
    capture.begin_element(
        "triangle",
        Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 80.0)),
    );
    capture.on_style_update(
        PaintState::default().with_fill(PaintStyle::Solid(Color::rgb(255, 0, 0))),
    )?;
    capture.on_draw_path(
        &Path::new()
            .move_to(50.0, 0.0)
            .line_to(100.0, 80.0)
            .line_to(0.0, 80.0),
    )?;

    // A stroked wave drawn next to it, semi-transparent. No box is supplied;
    // the capture derives it from the drawn geometry.
    capture.begin_element_from_paths("wave");
    capture.on_style_update(
        PaintState::default().with_stroke(PaintStyle::Solid(Color::rgba(0, 0, 255, 0.5))),
    )?;
    capture.on_draw_path(
        &Path::new()
            .move_to(120.0, 40.0)
            .cubic_to(145.0, 0.0, 195.0, 80.0, 220.0, 40.0),
    )?;

    println!("{}", capture.code());
    Ok(())
}
