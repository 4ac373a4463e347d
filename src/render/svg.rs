use std::fmt::Write as _;

use crate::render::frame::{Frame, StyledPath};

/// Half extent of the square export canvas centered on the origin.
pub const VIEW_HALF_EXTENT: f64 = 250.0;

impl Frame {
    /// Serialize as a standalone SVG document.
    ///
    /// The canvas is `viewBox="-250 -250 500 500"` with the background as a full-size `rect`;
    /// each non-empty layer becomes a `path` carrying its id and full style.
    pub fn to_svg(&self) -> String {
        let h = VIEW_HALF_EXTENT;
        let size = 2.0 * h;
        let mut out = String::new();
        // writes into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {size} {size}" width="{size}" height="{size}">"#,
            -h, -h
        );
        if !self.name.is_empty() {
            let _ = writeln!(out, "  <title>{}</title>", escape_xml(&self.name));
        }
        if !self.description.is_empty() {
            let _ = writeln!(out, "  <desc>{}</desc>", escape_xml(&self.description));
        }
        let _ = writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{size}" height="{size}" fill="{}"/>"#,
            -h, -h, self.background
        );
        for layer in self.layers.iter().filter(|l| !l.path.elements().is_empty()) {
            write_path(&mut out, layer);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_path(out: &mut String, layer: &StyledPath) {
    let style = &layer.style;
    let fill = if style.fill {
        style.color.to_hex()
    } else {
        "none".to_owned()
    };
    let _ = writeln!(
        out,
        r#"  <path id="{}" d="{}" fill="{fill}" fill-opacity="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
        escape_xml(layer.layer_id.as_str()),
        layer.path.to_svg(),
        style.fill_opacity(),
        style.color,
        style.stroke_width,
        style.opacity,
    );
}

/// File name for an exported composition: lowercase, whitespace runs as `-`, `.svg` suffix.
pub fn export_file_name(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if stem.is_empty() {
        "logo.svg".to_owned()
    } else {
        format!("{stem}.svg")
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
