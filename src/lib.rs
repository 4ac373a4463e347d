//! Paralogo is a parametric, animated vector logo generator.
//!
//! A [`Composition`] is an ordered stack of layers, each described by a handful of numbers
//! (segment count, radius, noise, smoothness, rotation, speed, wobble) plus a stroke/fill style.
//! Every frame is a pure function of the composition, a clock value and an optional 3D view.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: `(segments, radius, noise) -> ring of points` ([`sample_ring`])
//! 2. **Animate**: spin and radial pulse driven by time ([`animate_ring`])
//! 3. **Project** (3D mode only): exploded depth stack, Y-then-X rotation, perspective divide
//!    ([`Projection`])
//! 4. **Fit**: straight or Catmull-Rom style cubic closed contour ([`fit_closed_path`])
//! 5. **Compose**: styled paths in paint order plus background ([`render_frame`], [`Frame`])
//!
//! A [`Controller`] owns the clock and the view orientation; a [`LogoSession`] ties a
//! composition, a controller and [`RenderOptions`] together and exports SVG.
//!
//! Geometry is total: invalid layer parameters degrade that layer to an empty path instead of
//! failing. Errors ([`LogoError`]) only occur at boundaries such as model validation and
//! intake of generated compositions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod foundation;
mod geometry;
mod interaction;
mod render;
mod session;

pub use composition::generated::GeneratedComposition;
pub use composition::model::{Composition, Layer, LayerId, LayerParams, domain};
pub use composition::presets::{default_composition, preset, presets};
pub use foundation::core::{BezPath, PathEl, Point, Point3, Rgb8, Vec2};
pub use foundation::error::{LogoError, LogoResult};
pub use geometry::ShapeTuning;
pub use geometry::fit::fit_closed_path;
pub use geometry::motion::{Motion, animate_ring};
pub use geometry::projection::{Camera, Projection, ViewState, rotate};
pub use geometry::sampler::{MIN_RADIUS, sample_ring};
pub use interaction::controller::{
    AUTO_SPIN_STEP, ControlEvent, Controller, ControllerSnapshot, DRAG_SENSITIVITY,
    MAX_TIME_SCALE, Playback, TIME_STEP,
};
pub use render::frame::{Frame, PathStyle, RenderOptions, StyledPath, layer_path, render_frame};
pub use render::svg::{VIEW_HALF_EXTENT, export_file_name};
pub use session::LogoSession;
