use crate::{
    foundation::core::{Point, Vec2},
    foundation::math::deg_to_rad,
};

/// Animation inputs of one layer at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Motion {
    /// Clock value.
    pub time: f64,
    /// Spin multiplier; degrees advanced per time unit is `speed * 0.5`.
    pub speed: f64,
    /// Static rotation in degrees.
    pub rotation_deg: f64,
    /// Radial pulse amplitude.
    pub wobble: f64,
}

impl Motion {
    /// Total rotation in radians; static and animated parts share one term.
    pub fn angle(&self) -> f64 {
        deg_to_rad(self.time * self.speed * 0.5 + self.rotation_deg)
    }

    /// Radial pulse of vertex `index`; the index staggers the phase.
    pub fn pulse(&self, index: usize) -> f64 {
        (self.time * 2.0 + index as f64).sin() * self.wobble
    }
}

/// Rotate and pulse each vertex about the origin.
pub fn animate_ring(points: &[Point], motion: &Motion) -> Vec<Point> {
    let angle = motion.angle();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let v = p.to_vec2();
            let dist = v.length() + motion.pulse(i);
            (Vec2::from_angle(v.atan2() + angle) * dist).to_point()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/motion.rs"]
mod tests;
