use super::*;

const EPS: f64 = 1e-9;

#[test]
fn returns_exactly_segments_points_deterministically() {
    let tuning = ShapeTuning::default();
    for segments in 3..=20 {
        let a = sample_ring(segments, 87.5, 13.0, &tuning);
        let b = sample_ring(segments, 87.5, 13.0, &tuning);
        assert_eq!(a.len(), segments as usize);
        assert_eq!(a, b);
    }
}

#[test]
fn zero_noise_is_a_regular_polygon() {
    let pts = sample_ring(7, 120.0, 0.0, &ShapeTuning::default());
    for p in &pts {
        assert!((p.to_vec2().length() - 120.0).abs() < EPS);
    }
    assert!((pts[0].x - 120.0).abs() < EPS);
    assert!(pts[0].y.abs() < EPS);
}

#[test]
fn noise_pattern_depends_on_index_only() {
    let tuning = ShapeTuning::default();
    let small = sample_ring(9, 50.0, 10.0, &tuning);
    let large = sample_ring(9, 150.0, 10.0, &tuning);
    for (a, b) in small.iter().zip(&large) {
        let da = a.to_vec2().length() - 50.0;
        let db = b.to_vec2().length() - 150.0;
        assert!((da - db).abs() < EPS);
    }
}

#[test]
fn effective_radius_is_floored() {
    // radius 10 with noise 50 pushes some vertices far below zero before the floor
    let pts = sample_ring(20, 10.0, 50.0, &ShapeTuning::default());
    for p in &pts {
        assert!(p.to_vec2().length() >= MIN_RADIUS - EPS);
    }
    assert!(
        pts.iter()
            .any(|p| (p.to_vec2().length() - MIN_RADIUS).abs() < EPS)
    );
}

#[test]
fn zero_segments_is_empty() {
    assert!(sample_ring(0, 100.0, 0.0, &ShapeTuning::default()).is_empty());
}
