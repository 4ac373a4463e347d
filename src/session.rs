use crate::{
    composition::generated::GeneratedComposition,
    composition::model::Composition,
    foundation::error::LogoResult,
    interaction::controller::{ControlEvent, Controller, ControllerSnapshot},
    render::frame::{Frame, RenderOptions, render_frame},
    render::svg::export_file_name,
};

/// Live editing session: the current composition, its controller and render options.
///
/// A session is the single owner of mutable state. Frames are produced on demand from the
/// latest snapshot and never retained.
pub struct LogoSession {
    composition: Composition,
    controller: Controller,
    options: RenderOptions,
}

impl LogoSession {
    /// Start a session on a validated composition.
    pub fn new(composition: Composition, options: RenderOptions) -> LogoResult<Self> {
        composition.validate()?;
        Ok(Self {
            composition,
            controller: Controller::new(),
            options,
        })
    }

    /// Current composition.
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Current composition, for parameter edits and layer list changes.
    ///
    /// Edits must keep layer ids unique; [`Composition::push_layer`] and
    /// [`Composition::duplicate_layer`] do so.
    pub fn composition_mut(&mut self) -> &mut Composition {
        &mut self.composition
    }

    /// Animation and view state.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Forward an intent to the controller.
    pub fn apply(&mut self, event: ControlEvent) {
        self.controller.apply(event);
    }

    /// Shorthand for `apply(ControlEvent::Tick)`.
    pub fn tick(&mut self) {
        self.controller.tick();
    }

    /// Evaluate the composition at the controller's current time and view.
    pub fn frame(&self) -> Frame {
        render_frame(
            &self.composition,
            self.controller.time(),
            self.controller.view(),
            &self.options,
        )
    }

    /// SVG document of the current frame.
    #[tracing::instrument(skip(self), fields(name = %self.composition.name))]
    pub fn export_svg(&self) -> String {
        self.frame().to_svg()
    }

    /// Suggested file name for [`LogoSession::export_svg`].
    pub fn export_file_name(&self) -> String {
        export_file_name(&self.composition.name)
    }

    /// Replace the composition wholesale. On validation failure nothing changes.
    pub fn replace_composition(&mut self, composition: Composition) -> LogoResult<()> {
        composition.validate()?;
        self.composition = composition;
        Ok(())
    }

    /// Adopt the outcome of a generation request.
    ///
    /// The composition is replaced only if the request succeeded and its payload satisfies the
    /// contract; otherwise the error is returned and the current composition is kept.
    #[tracing::instrument(skip_all)]
    pub fn adopt_generation(
        &mut self,
        outcome: LogoResult<GeneratedComposition>,
    ) -> LogoResult<()> {
        let next = outcome.and_then(GeneratedComposition::into_composition);
        match next {
            Ok(comp) => {
                tracing::info!(
                    name = %comp.name,
                    layers = comp.layers.len(),
                    "adopted generated composition"
                );
                self.composition = comp;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "generation rejected, keeping current composition");
                Err(e)
            }
        }
    }

    /// End the session, returning the composition and final controller state.
    pub fn teardown(self) -> (Composition, ControllerSnapshot) {
        (self.composition, self.controller.teardown())
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
