use crate::foundation::core::{Point, Point3};

/// Interactive 3D camera orientation, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Rotation about the horizontal axis, applied second.
    pub tilt_x: f64,
    /// Rotation about the vertical axis, applied first.
    pub spin_y: f64,
}

impl ViewState {
    /// Orientation of a freshly created controller.
    pub const INITIAL: Self = Self {
        tilt_x: 0.2,
        spin_y: 0.0,
    };

    /// Orientation applied whenever 3D mode is switched on.
    pub const RESET_3D: Self = Self {
        tilt_x: 0.3,
        spin_y: 0.0,
    };
}

/// Fixed perspective camera and exploded-view spacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Camera {
    /// Focal length of the perspective divide.
    pub fov: f64,
    /// Camera distance along +z.
    pub camera_z: f64,
    /// Depth distance between adjacent layers.
    pub depth_spacing: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 500.0,
            camera_z: 600.0,
            depth_spacing: 80.0,
        }
    }
}

impl Camera {
    /// Synthetic depth of layer `index`; the stack is centered on z = 0.
    pub fn layer_depth(&self, index: usize, layer_count: usize) -> f64 {
        let center = (layer_count as f64 - 1.0) / 2.0;
        (index as f64 - center) * self.depth_spacing
    }

    /// Perspective factor for a rotated depth; 0 at or behind the eye.
    pub fn scale_at(&self, z: f64) -> f64 {
        let depth = self.fov + self.camera_z - z;
        if depth > 0.0 { self.fov / depth } else { 0.0 }
    }

    /// Rotate by the view, then flatten with the perspective divide.
    pub fn project(&self, p: Point3, view: &ViewState) -> Point {
        let r = rotate(p, view);
        let scale = self.scale_at(r.z);
        Point::new(r.x * scale, r.y * scale)
    }
}

/// Rotate about the vertical axis by `spin_y`, then the horizontal axis by `tilt_x`.
pub fn rotate(p: Point3, view: &ViewState) -> Point3 {
    let (sin_y, cos_y) = view.spin_y.sin_cos();
    let x1 = p.x * cos_y - p.z * sin_y;
    let z1 = p.x * sin_y + p.z * cos_y;

    let (sin_x, cos_x) = view.tilt_x.sin_cos();
    let y2 = p.y * cos_x - z1 * sin_x;
    let z2 = p.y * sin_x + z1 * cos_x;

    Point3::new(x1, y2, z2)
}

/// How layer rings reach the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// 2D mode: coordinates pass through unchanged.
    Flat,
    /// 3D mode: exploded depth stack seen through a perspective camera.
    Exploded {
        /// Current orientation.
        view: ViewState,
        /// Camera constants.
        camera: Camera,
    },
}

impl Projection {
    /// Project the ring of layer `index` out of `layer_count`.
    pub fn apply(&self, points: Vec<Point>, index: usize, layer_count: usize) -> Vec<Point> {
        match self {
            Self::Flat => points,
            Self::Exploded { view, camera } => {
                let z = camera.layer_depth(index, layer_count);
                points
                    .into_iter()
                    .map(|p| camera.project(Point3::from_planar(p, z), view))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/projection.rs"]
mod tests;
