//! SVG render surface for field snapshots.
//!
//! Two layers: a static layer of faint horizon lines and a dynamic layer with
//! one cross glyph per point. Output is a pure function of the snapshot.

use std::fmt::Write;

use sovereign_core::constants::{
    COLOR_TEXT, COLOR_VOID, GLYPH_OPACITY, HORIZON_FRACTIONS, HORIZON_OPACITY,
};
use sovereign_core::state::{FieldSnapshot, PointView};

/// Render a snapshot as a standalone SVG document.
pub fn render_svg(snapshot: &FieldSnapshot) -> String {
    let width = snapshot.surface.width.max(0.0);
    let height = snapshot.surface.height.max(0.0);

    let mut svg = String::with_capacity(256 + snapshot.points.len() * 160);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" style="background-color:{COLOR_VOID}">"#
    );

    svg.push_str(r#"<g class="static-layer">"#);
    svg.push('\n');
    for fraction in HORIZON_FRACTIONS {
        let y = height * fraction;
        let _ = writeln!(
            svg,
            r#"<line class="horizon" x1="0" y1="{y}" x2="{width}" y2="{y}" stroke="{COLOR_TEXT}" stroke-width="1" stroke-opacity="{HORIZON_OPACITY}"/>"#
        );
    }
    svg.push_str("</g>\n");

    svg.push_str(r#"<g class="dynamic-layer">"#);
    svg.push('\n');
    for point in &snapshot.points {
        write_glyph(&mut svg, point);
    }
    svg.push_str("</g>\n</svg>\n");

    svg
}

/// Cross path for a glyph of half-size `s`, centred on the origin.
pub fn cross_path(s: f64) -> String {
    format!("M {},0 L {s},0 M 0,{} L 0,{s}", -s, -s)
}

fn write_glyph(svg: &mut String, point: &PointView) {
    let _ = writeln!(
        svg,
        r#"<g id="{id}" class="vector {category}" transform="translate({x:.3},{y:.3})"><path d="{d}" stroke="{COLOR_TEXT}" stroke-width="1" stroke-opacity="{GLYPH_OPACITY}" fill="none"/></g>"#,
        id = point.id,
        category = point.category,
        x = point.position.x,
        y = point.position.y,
        d = cross_path(point.radius.size()),
    );
}
