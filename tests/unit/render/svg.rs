use super::*;
use crate::{
    composition::model::{Composition, LayerParams},
    foundation::core::Rgb8,
    render::frame::{RenderOptions, render_frame},
};

fn frame() -> Frame {
    let mut comp = Composition::new("Tech <Hive>", Rgb8::new(0, 0, 0));
    comp.description = "a & b".to_owned();
    comp.push_layer(LayerParams {
        segments: 4,
        radius: 100.0,
        noise: 0.0,
        smoothness: 0.0,
        speed: 0.0,
        wobble: 0.0,
        ..LayerParams::default()
    });
    comp.push_layer(LayerParams {
        segments: 1,
        ..LayerParams::default()
    });
    render_frame(&comp, 0.0, None, &RenderOptions::default())
}

#[test]
fn document_has_canvas_background_and_one_path_per_drawable_layer() {
    let svg = frame().to_svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="-250 -250 500 500""#));
    assert!(svg.contains(r##"<rect x="-250" y="-250" width="500" height="500" fill="#000000"/>"##));
    assert_eq!(svg.matches("<path ").count(), 1);
    assert!(svg.contains(r#"id="layer-1""#));
    assert!(svg.contains(r#"fill="none" fill-opacity="0""#));
    assert!(svg.contains(r##"stroke="#38bdf8" stroke-width="2" stroke-opacity="0.8""##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn text_is_escaped() {
    let svg = frame().to_svg();
    assert!(svg.contains("<title>Tech &lt;Hive&gt;</title>"));
    assert!(svg.contains("<desc>a &amp; b</desc>"));
}

#[test]
fn file_names_are_slugged() {
    assert_eq!(export_file_name("Neo-Geometric Start"), "neo-geometric-start.svg");
    assert_eq!(export_file_name("  Tech   Hive "), "tech-hive.svg");
    assert_eq!(export_file_name(""), "logo.svg");
}
