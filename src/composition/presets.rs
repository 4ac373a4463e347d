use crate::{
    composition::model::{Composition, Layer, LayerId, LayerParams},
    foundation::core::Rgb8,
};

/// Starting composition: a smoothed pentagon outline over a filled triangle.
pub fn default_composition() -> Composition {
    let base = LayerParams::default();
    Composition::with_layers(
        "Neo-Geometric Start",
        "A basic parametric starting point.",
        Rgb8::new(0x0f, 0x17, 0x2a),
        vec![
            layer("layer-1", base.clone()),
            layer(
                "layer-2",
                LayerParams {
                    radius: 60.0,
                    color: Rgb8::new(0xc0, 0x84, 0xfc),
                    rotation: 45.0,
                    segments: 3,
                    fill: true,
                    opacity: 0.3,
                    ..base
                },
            ),
        ],
    )
}

/// Built-in named compositions.
pub fn presets() -> Vec<Composition> {
    vec![
        Composition::with_layers(
            "Tech Hive",
            "Hexagonal structures representing connection.",
            Rgb8::new(0, 0, 0),
            vec![
                layer(
                    "p1-1",
                    LayerParams {
                        segments: 6,
                        radius: 120.0,
                        noise: 0.0,
                        smoothness: 0.0,
                        rotation: 0.0,
                        opacity: 1.0,
                        stroke_width: 4.0,
                        color: Rgb8::new(0x00, 0xff, 0xcc),
                        fill: false,
                        speed: 0.2,
                        wobble: 0.0,
                    },
                ),
                layer(
                    "p1-2",
                    LayerParams {
                        segments: 6,
                        radius: 80.0,
                        noise: 0.0,
                        smoothness: 0.0,
                        rotation: 30.0,
                        opacity: 0.5,
                        stroke_width: 2.0,
                        color: Rgb8::new(0x00, 0x88, 0xff),
                        fill: true,
                        speed: -0.2,
                        wobble: 0.0,
                    },
                ),
            ],
        ),
        Composition::with_layers(
            "Organic Flow",
            "Soft, breathing shapes inspired by nature.",
            Rgb8::new(0x1a, 0x2e, 0x1a),
            vec![
                layer(
                    "p2-1",
                    LayerParams {
                        segments: 12,
                        radius: 100.0,
                        noise: 20.0,
                        smoothness: 1.0,
                        rotation: 0.0,
                        opacity: 0.6,
                        stroke_width: 2.0,
                        color: Rgb8::new(0x4a, 0xde, 0x80),
                        fill: true,
                        speed: 0.5,
                        wobble: 5.0,
                    },
                ),
                layer(
                    "p2-2",
                    LayerParams {
                        segments: 8,
                        radius: 130.0,
                        noise: 15.0,
                        smoothness: 0.8,
                        rotation: 45.0,
                        opacity: 0.4,
                        stroke_width: 1.0,
                        color: Rgb8::new(0xfa, 0xcc, 0x15),
                        fill: false,
                        speed: 0.3,
                        wobble: 3.0,
                    },
                ),
            ],
        ),
    ]
}

/// Find a preset (or the default composition) by case-insensitive name.
pub fn preset(name: &str) -> Option<Composition> {
    let name = name.trim();
    std::iter::once(default_composition())
        .chain(presets())
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

fn layer(id: &str, params: LayerParams) -> Layer {
    Layer {
        id: LayerId::new(id),
        params,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/presets.rs"]
mod tests;
