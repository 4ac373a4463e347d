use super::*;

const EPS: f64 = 1e-9;

#[test]
fn single_layer_neutral_view_scales_uniformly() {
    let camera = Camera::default();
    let proj = Projection::Exploded {
        view: ViewState::default(),
        camera,
    };
    let pts = vec![Point::new(100.0, 0.0), Point::new(-40.0, 25.0)];
    let out = proj.apply(pts.clone(), 0, 1);
    let scale = 500.0 / 1100.0;
    for (a, b) in pts.iter().zip(&out) {
        assert!((b.x - a.x * scale).abs() < EPS);
        assert!((b.y - a.y * scale).abs() < EPS);
    }
}

#[test]
fn flat_projection_passes_through() {
    let pts = vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
    assert_eq!(Projection::Flat.apply(pts.clone(), 2, 5), pts);
}

#[test]
fn layer_depths_center_the_stack() {
    let camera = Camera::default();
    assert_eq!(camera.layer_depth(0, 1), 0.0);
    assert_eq!(camera.layer_depth(0, 3), -80.0);
    assert_eq!(camera.layer_depth(1, 3), 0.0);
    assert_eq!(camera.layer_depth(2, 3), 80.0);
    assert_eq!(camera.layer_depth(0, 2), -40.0);
}

#[test]
fn rotation_order_is_spin_then_tilt() {
    let view = ViewState {
        tilt_x: std::f64::consts::FRAC_PI_2,
        spin_y: std::f64::consts::FRAC_PI_2,
    };
    // spin: x -> z, then tilt: z -> -y
    let r = rotate(Point3::new(1.0, 0.0, 0.0), &view);
    assert!(r.x.abs() < EPS);
    assert!((r.y + 1.0).abs() < EPS);
    assert!(r.z.abs() < EPS);

    // opposite order would leave the point on the z axis
    let tilt_only = rotate(
        Point3::new(1.0, 0.0, 0.0),
        &ViewState {
            tilt_x: std::f64::consts::FRAC_PI_2,
            spin_y: 0.0,
        },
    );
    assert!((tilt_only.x - 1.0).abs() < EPS);
}

#[test]
fn points_at_or_behind_the_eye_collapse_to_origin() {
    let camera = Camera::default();
    assert_eq!(camera.scale_at(1100.0), 0.0);
    assert_eq!(camera.scale_at(5000.0), 0.0);
    let p = camera.project(Point3::new(30.0, -20.0, 1500.0), &ViewState::default());
    assert_eq!(p, Point::ZERO);
}

#[test]
fn nearer_layers_appear_larger() {
    let camera = Camera::default();
    assert!(camera.scale_at(80.0) > camera.scale_at(0.0));
    assert!(camera.scale_at(-80.0) < camera.scale_at(0.0));
}
