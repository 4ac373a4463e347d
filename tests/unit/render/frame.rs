use super::*;
use crate::composition::model::Composition;
use kurbo::PathEl;

fn comp_with(params: Vec<LayerParams>) -> Composition {
    let mut comp = Composition::new("t", Rgb8::new(1, 2, 3));
    for p in params {
        comp.push_layer(p);
    }
    comp
}

#[test]
fn preserves_paint_order_and_styles() {
    let comp = comp_with(vec![
        LayerParams {
            color: Rgb8::new(255, 0, 0),
            ..LayerParams::default()
        },
        LayerParams {
            color: Rgb8::new(0, 0, 255),
            fill: true,
            opacity: 0.25,
            ..LayerParams::default()
        },
    ]);
    let frame = render_frame(&comp, 0.0, None, &RenderOptions::default());
    assert_eq!(frame.background, Rgb8::new(1, 2, 3));
    assert_eq!(frame.layers.len(), 2);
    assert_eq!(frame.layers[0].layer_id.as_str(), "layer-1");
    assert_eq!(frame.layers[1].style.color, Rgb8::new(0, 0, 255));
    assert_eq!(frame.layers[1].style.fill_opacity(), 0.25);
    assert_eq!(frame.layers[0].style.fill_opacity(), 0.0);
}

#[test]
fn degraded_layer_is_isolated() {
    let comp = comp_with(vec![
        LayerParams {
            segments: 2,
            ..LayerParams::default()
        },
        LayerParams::default(),
        LayerParams {
            radius: f64::INFINITY,
            ..LayerParams::default()
        },
    ]);
    let frame = render_frame(&comp, 1.0, Some(ViewState::RESET_3D), &RenderOptions::default());
    assert!(frame.layers[0].degraded);
    assert!(frame.layers[0].path.elements().is_empty());
    assert!(!frame.layers[1].degraded);
    assert_eq!(frame.layers[1].path.elements().len(), 1 + 5 + 1);
    assert!(frame.layers[2].degraded);
}

#[test]
fn rendering_is_reproducible() {
    let comp = comp_with(vec![LayerParams::default(), LayerParams::default()]);
    let opts = RenderOptions::default();
    let view = Some(ViewState {
        tilt_x: 0.7,
        spin_y: -1.1,
    });
    let a = render_frame(&comp, 2.5, view, &opts);
    let b = render_frame(&comp, 2.5, view, &opts);
    for (la, lb) in a.layers.iter().zip(&b.layers) {
        assert_eq!(la.path, lb.path);
    }
}

#[test]
fn three_d_mode_changes_geometry_by_depth() {
    let comp = comp_with(vec![LayerParams::default(), LayerParams::default()]);
    let opts = RenderOptions::default();
    let view = Some(ViewState::default());
    let frame = render_frame(&comp, 0.0, view, &opts);
    // identical layers at different depths: the front one projects larger
    let first_x = |l: &StyledPath| match l.path.elements()[0] {
        PathEl::MoveTo(p) => p.x,
        _ => panic!("path must start with MoveTo"),
    };
    assert!(first_x(&frame.layers[1]) > first_x(&frame.layers[0]));
}

#[test]
fn options_deserialize_with_defaults() {
    let opts: RenderOptions =
        serde_json::from_str(r#"{"tuning": {"tangentScale": 0.3}}"#).unwrap();
    assert_eq!(opts.tuning.tangent_scale, 0.3);
    assert_eq!(opts.tuning.noise_frequency, 123.45);
    assert_eq!(opts.camera, Camera::default());
}
