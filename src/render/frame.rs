use crate::{
    composition::model::{Composition, LayerId, LayerParams},
    foundation::core::{BezPath, Rgb8},
    geometry::{
        ShapeTuning,
        fit::fit_closed_path,
        motion::{Motion, animate_ring},
        projection::{Camera, Projection, ViewState},
        sampler::sample_ring,
    },
};

/// Geometry configuration shared by every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Sampler/fitter constants.
    pub tuning: ShapeTuning,
    /// 3D camera constants.
    pub camera: Camera,
}

impl RenderOptions {
    /// Projection for the given view; `None` means 2D mode.
    pub fn projection(&self, view: Option<ViewState>) -> Projection {
        match view {
            None => Projection::Flat,
            Some(view) => Projection::Exploded {
                view,
                camera: self.camera,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Paint attributes of one layer.
pub struct PathStyle {
    /// Stroke and fill color.
    pub color: Rgb8,
    /// Stroke width.
    pub stroke_width: f64,
    /// Opacity of stroke and (if painted) fill.
    pub opacity: f64,
    /// Whether the interior is painted.
    pub fill: bool,
}

impl PathStyle {
    /// Fill opacity: the layer opacity when filled, otherwise 0.
    pub fn fill_opacity(&self) -> f64 {
        if self.fill { self.opacity } else { 0.0 }
    }
}

impl From<&LayerParams> for PathStyle {
    fn from(p: &LayerParams) -> Self {
        Self {
            color: p.color,
            stroke_width: p.stroke_width,
            opacity: p.opacity,
            fill: p.fill,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One layer's final path and style.
pub struct StyledPath {
    /// Source layer.
    pub layer_id: LayerId,
    /// Closed contour, or empty when the layer could not produce geometry.
    #[serde(serialize_with = "serialize_path")]
    pub path: BezPath,
    /// Paint attributes.
    pub style: PathStyle,
    /// `true` when invalid parameters reduced this layer to an empty path.
    pub degraded: bool,
}

fn serialize_path<S>(path: &BezPath, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&path.to_svg())
}

#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything needed to paint one instant of a composition.
pub struct Frame {
    /// Composition name.
    pub name: String,
    /// Composition description.
    pub description: String,
    /// Clock value the frame was evaluated at.
    pub time: f64,
    /// Canvas background.
    pub background: Rgb8,
    /// Styled paths in paint order (index 0 is the back).
    pub layers: Vec<StyledPath>,
}

/// Evaluate every layer of `comp` at `time`.
///
/// `view` selects 3D mode. Paths keep composition order; there is no depth sorting. A layer
/// with unusable parameters becomes an empty, `degraded` entry without affecting the others.
#[tracing::instrument(skip(comp, opts), fields(layers = comp.layers.len()))]
pub fn render_frame(
    comp: &Composition,
    time: f64,
    view: Option<ViewState>,
    opts: &RenderOptions,
) -> Frame {
    let projection = opts.projection(view);
    let count = comp.layers.len();

    let layers = comp
        .layers
        .iter()
        .enumerate()
        .map(|(index, layer)| match layer.params.sanitized() {
            Some(params) => StyledPath {
                layer_id: layer.id.clone(),
                path: layer_path(&params, index, count, time, &projection, &opts.tuning),
                style: PathStyle::from(&params),
                degraded: false,
            },
            None => {
                tracing::warn!(layer = %layer.id, "layer parameters unusable, drawing nothing");
                StyledPath {
                    layer_id: layer.id.clone(),
                    path: BezPath::new(),
                    style: PathStyle::from(&layer.params),
                    degraded: true,
                }
            }
        })
        .collect();

    Frame {
        name: comp.name.clone(),
        description: comp.description.clone(),
        time,
        background: comp.background_color,
        layers,
    }
}

/// Run the geometry pipeline for one layer: sample, animate, project, fit.
pub fn layer_path(
    params: &LayerParams,
    index: usize,
    layer_count: usize,
    time: f64,
    projection: &Projection,
    tuning: &ShapeTuning,
) -> BezPath {
    let base = sample_ring(params.segments, params.radius, params.noise, tuning);
    let motion = Motion {
        time,
        speed: params.speed,
        rotation_deg: params.rotation,
        wobble: params.wobble,
    };
    let animated = animate_ring(&base, &motion);
    let projected = projection.apply(animated, index, layer_count);
    fit_closed_path(&projected, params.smoothness, tuning)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
