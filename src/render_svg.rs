// SVG serialization of the compiled glyph scene

use crate::ir::{GlyphMarks, GlyphScene};
use crate::palette;

// Fixed glyph geometry recovered from the shipped visualization
const BORDER_BOX_SIZE: f64 = 130.0;
const BOWL_OFFSET_X: f64 = 45.0;
const BOWL_OFFSET_Y: f64 = 30.0;
const BOWL_WIDTH: f64 = 40.0;
const BOWL_HEIGHT: f64 = 80.0;
const BOWL_CORNER_RADIUS: f64 = 13.0;
const RIM_OFFSET_X: f64 = 65.0;
const RIM_OFFSET_Y: f64 = 36.5;
const RIM_RX: f64 = 20.0;
const RIM_RY: f64 = 7.0;
const STRAW_WIDTH: f64 = 3.0;
const STRAW_HEIGHT: f64 = 89.0;

/// Serialize the scene into a complete standalone SVG document.
///
/// Mark order follows the original renderer: all border boxes first, then
/// one glass group per record.
pub fn render_scene(scene: &GlyphScene) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}px" height="{}px">"#,
        scene.width, scene.height
    ));
    svg.push('\n');
    svg.push_str("<g>\n");

    for glyph in &scene.glyphs {
        svg.push_str(&format!(
            r#"<rect class="border-box" x="{}" y="{}" width="{}" height="{}" stroke="gray" stroke-width="2px" fill="transparent"/>"#,
            glyph.x, glyph.y, BORDER_BOX_SIZE, BORDER_BOX_SIZE
        ));
        svg.push('\n');
    }

    for glyph in &scene.glyphs {
        render_glass(&mut svg, glyph);
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

fn render_glass(svg: &mut String, glyph: &GlyphMarks) {
    let fill = glyph.gradient.fill_pct;
    let no_fill = 100.0 - fill;

    svg.push_str("<g class=\"wine-glass\">\n");

    // Fill-level gradient, bottom-up
    svg.push_str(&format!(
        concat!(
            r#"<defs><linearGradient id="{id}" x2="0%" y2="100%">"#,
            r#"<stop offset="{no_fill:.2}%" stop-color="white"/>"#,
            r#"<stop offset="{fill:.2}%" stop-color="{color}"/>"#,
            r#"</linearGradient></defs>"#,
        ),
        id = glyph.gradient.id,
        no_fill = no_fill,
        fill = fill,
        color = palette::to_hex(&glyph.gradient.color),
    ));
    svg.push('\n');

    // Glass bowl
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" stroke="black" stroke-width="1px" rx="{}" fill="url(#{})"/>"#,
        glyph.x + BOWL_OFFSET_X,
        glyph.y + BOWL_OFFSET_Y,
        BOWL_WIDTH,
        BOWL_HEIGHT,
        BOWL_CORNER_RADIUS,
        glyph.gradient.id
    ));
    svg.push('\n');

    // Rim
    svg.push_str(&format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="white" stroke="black"/>"#,
        glyph.x + RIM_OFFSET_X,
        glyph.y + RIM_OFFSET_Y,
        RIM_RX,
        RIM_RY
    ));
    svg.push('\n');

    render_ice_cube(svg, glyph);

    // Straw
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="lightgray" stroke="gray"/>"#,
        glyph.straw.x, glyph.straw.y, STRAW_WIDTH, STRAW_HEIGHT
    ));
    svg.push_str("\n</g>\n");
}

// Two parallelogram faces plus three edge lines, scaled uniformly
fn render_ice_cube(svg: &mut String, glyph: &GlyphMarks) {
    svg.push_str(&format!(
        r#"<g transform="translate({}, {}) scale({})">"#,
        glyph.ice.translate_x, glyph.ice.translate_y, glyph.ice.scale
    ));
    svg.push('\n');
    svg.push_str(r#"<path d="M0 0l5 3v5l-5 -3z" fill="transparent" stroke="gray" stroke-width="0.5"/>"#);
    svg.push('\n');
    svg.push_str(r#"<path d="M10 0l-5 3v5l5 -3" fill="transparent" stroke="gray" stroke-width="0.5"/>"#);
    svg.push('\n');
    svg.push_str(r#"<line x1="0" y1="0" x2="5" y2="-3" stroke-width="0.5" stroke="gray"/>"#);
    svg.push('\n');
    svg.push_str(r#"<line x1="5" y1="-3" x2="10" y2="0" stroke-width="0.5" stroke="gray"/>"#);
    svg.push('\n');
    svg.push_str(r#"<line x1="10" y1="0" x2="10" y2="5" stroke-width="0.5" stroke="gray"/>"#);
    svg.push_str("\n</g>\n");
}
