use crate::{
    composition::model::{Composition, LayerParams, domain},
    foundation::core::Rgb8,
    foundation::error::{LogoError, LogoResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Response shape expected from the generative collaborator.
///
/// Identical to [`Composition`] except that layers carry no identity; ids are assigned on
/// intake by [`GeneratedComposition::into_composition`].
pub struct GeneratedComposition {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Canvas background.
    pub background_color: Rgb8,
    /// Layers, back to front.
    pub layers: Vec<LayerParams>,
}

impl GeneratedComposition {
    /// Parse a raw JSON response body.
    pub fn from_json(text: &str) -> LogoResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(LogoError::generation("empty response"));
        }
        serde_json::from_str(text)
            .map_err(|e| LogoError::generation(format!("response does not match contract: {e}")))
    }

    /// Convert into a [`Composition`], assigning fresh layer ids in order.
    ///
    /// Numeric fields are clamped into their domains (segments included). An empty layer list
    /// is a contract violation.
    pub fn into_composition(self) -> LogoResult<Composition> {
        if self.layers.is_empty() {
            return Err(LogoError::generation("response contains no layers"));
        }

        let mut comp = Composition::new(self.name, self.background_color);
        comp.description = self.description;
        for (idx, params) in self.layers.into_iter().enumerate() {
            let params = LayerParams {
                segments: params.segments.max(domain::SEGMENTS.0),
                ..params
            }
            .sanitized()
            .ok_or_else(|| {
                LogoError::generation(format!("layer {idx} has non-finite parameters"))
            })?;
            comp.push_layer(params);
        }
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/generated.rs"]
mod tests;
