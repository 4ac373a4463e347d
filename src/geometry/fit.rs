use crate::{
    foundation::core::{BezPath, Point},
    foundation::math::ring_index,
    geometry::ShapeTuning,
};

/// Fit a single closed contour through `points`.
///
/// Below `tuning.smooth_threshold` the ring is a polygon (`M`, one `L` per vertex ending back at
/// the start, `Z`). Otherwise each edge becomes a cubic whose control points follow the
/// neighboring vertices, Catmull-Rom style, scaled by `smoothness * tuning.tangent_scale`.
/// Fewer than three points yield an empty path.
pub fn fit_closed_path(points: &[Point], smoothness: f64, tuning: &ShapeTuning) -> BezPath {
    let mut path = BezPath::new();
    let len = points.len();
    if len < 3 {
        return path;
    }

    path.move_to(points[0]);
    if smoothness < tuning.smooth_threshold {
        for p in &points[1..] {
            path.line_to(*p);
        }
        path.line_to(points[0]);
    } else {
        let k = smoothness * tuning.tangent_scale;
        let at = |i: isize| points[ring_index(i, len)];
        for i in 0..len as isize {
            let (prev, cur, next, next_next) = (at(i - 1), at(i), at(i + 1), at(i + 2));
            let cp1 = cur + (next - prev) * k;
            let cp2 = next - (next_next - cur) * k;
            path.curve_to(cp1, cp2, next);
        }
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
