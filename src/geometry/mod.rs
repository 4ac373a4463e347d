//! Per-layer geometry pipeline: sample -> animate -> project -> fit.
//!
//! Every function here is pure and total: identical inputs give bit-identical output and no
//! input makes them panic.

pub(crate) mod fit;
pub(crate) mod motion;
pub(crate) mod projection;
pub(crate) mod sampler;

/// Stylistic tuning constants of the sampler and the curve fitter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeTuning {
    /// Per-index frequency of the radial noise pattern (`sin(i * noise_frequency)`).
    pub noise_frequency: f64,
    /// Scale applied to neighbor differences when placing cubic control points.
    pub tangent_scale: f64,
    /// Smoothness below which rings are emitted as straight segments.
    pub smooth_threshold: f64,
}

impl Default for ShapeTuning {
    fn default() -> Self {
        Self {
            noise_frequency: 123.45,
            tangent_scale: 0.2,
            smooth_threshold: 0.1,
        }
    }
}
