use std::f64::consts::TAU;

use crate::{foundation::core::Point, geometry::ShapeTuning};

/// Smallest effective radius; keeps noisy vertices from collapsing through the origin.
pub const MIN_RADIUS: f64 = 1.0;

/// Base ring of `segments` vertices, index 0 at angle 0, counter-clockwise in y-down space.
///
/// The noise offset of vertex `i` depends on `i` alone, so editing `radius` never reshuffles
/// the pattern.
pub fn sample_ring(segments: u32, radius: f64, noise: f64, tuning: &ShapeTuning) -> Vec<Point> {
    if segments == 0 {
        return Vec::new();
    }
    let step = TAU / f64::from(segments);
    (0..segments)
        .map(|i| {
            let i = f64::from(i);
            let theta = step * i;
            let perturbation = (i * tuning.noise_frequency).sin() * noise;
            let r = (radius + perturbation).max(MIN_RADIUS);
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sampler.rs"]
mod tests;
