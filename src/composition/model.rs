use std::collections::HashSet;

use crate::{
    foundation::core::Rgb8,
    foundation::error::{LogoError, LogoResult},
    foundation::math::clamp_finite,
};

/// Inclusive domains of the numeric layer parameters.
pub mod domain {
    /// Vertex count of the base polygon.
    pub const SEGMENTS: (u32, u32) = (3, 20);
    /// Nominal distance from origin.
    pub const RADIUS: (f64, f64) = (10.0, 220.0);
    /// Radial perturbation amplitude.
    pub const NOISE: (f64, f64) = (0.0, 50.0);
    /// 0 = straight edges, 1 = fully smoothed.
    pub const SMOOTHNESS: (f64, f64) = (0.0, 1.0);
    /// Static angular offset in degrees.
    pub const ROTATION: (f64, f64) = (0.0, 360.0);
    /// Layer opacity.
    pub const OPACITY: (f64, f64) = (0.0, 1.0);
    /// Stroke width.
    pub const STROKE_WIDTH: (f64, f64) = (0.0, 20.0);
    /// Angular velocity multiplier.
    pub const SPEED: (f64, f64) = (-5.0, 5.0);
    /// Radial pulse amplitude.
    pub const WOBBLE: (f64, f64) = (0.0, 20.0);
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Stable layer identity, independent of the layer's position in the composition.
pub struct LayerId(pub String);

impl LayerId {
    /// Wrap a string id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Author-supplied parameters of one layer (everything except its identity).
///
/// This is also the per-layer shape of the generative collaborator's response.
pub struct LayerParams {
    /// Base polygon vertex count.
    pub segments: u32,
    /// Nominal radius.
    pub radius: f64,
    /// Deterministic per-vertex radial perturbation amplitude.
    pub noise: f64,
    /// Curve smoothing factor.
    pub smoothness: f64,
    /// Static rotation in degrees.
    pub rotation: f64,
    /// Stroke/fill opacity.
    pub opacity: f64,
    /// Stroke width.
    pub stroke_width: f64,
    /// Stroke (and fill) color.
    pub color: Rgb8,
    /// Whether the interior is painted.
    pub fill: bool,
    /// Animated spin multiplier.
    pub speed: f64,
    /// Animated radial pulse amplitude.
    pub wobble: f64,
}

impl Default for LayerParams {
    fn default() -> Self {
        Self {
            segments: 5,
            radius: 100.0,
            noise: 10.0,
            smoothness: 0.5,
            rotation: 0.0,
            opacity: 0.8,
            stroke_width: 2.0,
            color: Rgb8::new(0x38, 0xbd, 0xf8),
            fill: false,
            speed: 0.5,
            wobble: 1.0,
        }
    }
}

impl LayerParams {
    /// Template for a layer added from scratch: a plain white pentagon with a slow spin.
    pub fn new_layer() -> Self {
        Self {
            segments: 5,
            radius: 80.0,
            noise: 0.0,
            smoothness: 0.5,
            rotation: 0.0,
            opacity: 1.0,
            stroke_width: 2.0,
            color: Rgb8::new(0xff, 0xff, 0xff),
            fill: false,
            speed: 0.2,
            wobble: 0.0,
        }
    }

    /// Return a copy with every numeric field clamped into its domain.
    ///
    /// Returns `None` when the layer cannot produce geometry: a non-finite numeric field or
    /// fewer than three segments.
    pub fn sanitized(&self) -> Option<Self> {
        if self.segments < domain::SEGMENTS.0 {
            return None;
        }
        let c = |v: f64, (lo, hi): (f64, f64)| clamp_finite(v, lo, hi);
        Some(Self {
            segments: self.segments.min(domain::SEGMENTS.1),
            radius: c(self.radius, domain::RADIUS)?,
            noise: c(self.noise, domain::NOISE)?,
            smoothness: c(self.smoothness, domain::SMOOTHNESS)?,
            rotation: c(self.rotation, domain::ROTATION)?,
            opacity: c(self.opacity, domain::OPACITY)?,
            stroke_width: c(self.stroke_width, domain::STROKE_WIDTH)?,
            color: self.color,
            fill: self.fill,
            speed: c(self.speed, domain::SPEED)?,
            wobble: c(self.wobble, domain::WOBBLE)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One parametric shape: identity plus parameters.
pub struct Layer {
    /// Identity key, unique within a composition.
    pub id: LayerId,
    /// Shape, style and animation parameters.
    #[serde(flatten)]
    pub params: LayerParams,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Ordered layers plus background.
///
/// Layer order is paint order (index 0 is the back) and the stacking order of the exploded 3D
/// view. `name` and `description` are carried opaquely.
pub struct Composition {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Canvas background.
    pub background_color: Rgb8,
    /// Layers, back to front.
    pub layers: Vec<Layer>,
    /// Next `layer-N` suffix to hand out; never decreases.
    #[serde(skip)]
    next_layer: usize,
}

impl Composition {
    /// Empty composition with the given name and background.
    pub fn new(name: impl Into<String>, background_color: Rgb8) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            background_color,
            layers: Vec::new(),
            next_layer: 1,
        }
    }

    /// Composition with the given layers, ids kept as supplied.
    pub fn with_layers(
        name: impl Into<String>,
        description: impl Into<String>,
        background_color: Rgb8,
        layers: Vec<Layer>,
    ) -> Self {
        Self {
            description: description.into(),
            layers,
            ..Self::new(name, background_color)
        }
    }

    /// Check the identity invariants: every id non-empty and unique.
    ///
    /// Numeric parameters are not checked here; rendering degrades per layer instead.
    pub fn validate(&self) -> LogoResult<()> {
        let mut seen = HashSet::with_capacity(self.layers.len());
        for (idx, layer) in self.layers.iter().enumerate() {
            if layer.id.0.trim().is_empty() {
                return Err(LogoError::validation(format!(
                    "layer at index {idx} has an empty id"
                )));
            }
            if !seen.insert(layer.id.as_str()) {
                return Err(LogoError::validation(format!(
                    "duplicate layer id '{}'",
                    layer.id
                )));
            }
        }
        Ok(())
    }

    /// Look up a layer by id.
    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| &l.id == id)
    }

    /// Look up a layer by id for editing.
    pub fn layer_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| &l.id == id)
    }

    /// Position of a layer in paint order.
    pub fn index_of(&self, id: &LayerId) -> Option<usize> {
        self.layers.iter().position(|l| &l.id == id)
    }

    /// Append a layer on top with a freshly assigned id.
    pub fn push_layer(&mut self, params: LayerParams) -> LayerId {
        let id = self.fresh_id();
        self.layers.push(Layer {
            id: id.clone(),
            params,
        });
        id
    }

    /// Append a [`LayerParams::new_layer`] template on top.
    pub fn add_layer(&mut self) -> LayerId {
        self.push_layer(LayerParams::new_layer())
    }

    /// Copy a layer to the top of the stack under a new id.
    pub fn duplicate_layer(&mut self, id: &LayerId) -> LogoResult<LayerId> {
        let params = self
            .layer(id)
            .map(|l| l.params.clone())
            .ok_or_else(|| unknown_layer(id))?;
        Ok(self.push_layer(params))
    }

    /// Remove a layer, returning it.
    pub fn remove_layer(&mut self, id: &LayerId) -> LogoResult<Layer> {
        let idx = self.index_of(id).ok_or_else(|| unknown_layer(id))?;
        Ok(self.layers.remove(idx))
    }

    /// Move a layer to `new_index` in paint order (clamped to the last slot).
    pub fn move_layer(&mut self, id: &LayerId, new_index: usize) -> LogoResult<()> {
        let idx = self.index_of(id).ok_or_else(|| unknown_layer(id))?;
        let layer = self.layers.remove(idx);
        let new_index = new_index.min(self.layers.len());
        self.layers.insert(new_index, layer);
        Ok(())
    }

    /// Next unused `layer-N` id.
    ///
    /// The counter only moves forward, so an id freed by `remove_layer` is never issued again.
    /// After deserialization it resumes above the highest `layer-N` present and the layer count.
    pub(crate) fn fresh_id(&mut self) -> LayerId {
        let highest = self
            .layers
            .iter()
            .filter_map(|l| l.id.as_str().strip_prefix("layer-")?.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        let mut n = self.next_layer.max(highest + 1).max(self.layers.len() + 1);
        loop {
            let candidate = format!("layer-{n}");
            n += 1;
            if !self.layers.iter().any(|l| l.id.0 == candidate) {
                self.next_layer = n;
                return LayerId(candidate);
            }
        }
    }
}

fn unknown_layer(id: &LayerId) -> LogoError {
    LogoError::validation(format!("unknown layer id '{id}'"))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
