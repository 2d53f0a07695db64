// Sequential Orange-Red color scale

use plotters::style::RGBColor;

/// ColorBrewer OrRd, 9 classes, light to dark
const OR_RD_STOPS: [RGBColor; 9] = [
    RGBColor(255, 247, 236),
    RGBColor(254, 232, 200),
    RGBColor(253, 212, 158),
    RGBColor(253, 187, 132),
    RGBColor(252, 141, 89),
    RGBColor(239, 101, 72),
    RGBColor(215, 48, 31),
    RGBColor(179, 0, 0),
    RGBColor(127, 0, 0),
];

/// Sample the Orange-Red scale at `t` in [0, 1] (piecewise-linear between
/// the ColorBrewer stops). Out-of-range and non-finite inputs are pinned to
/// the nearest end of the scale.
pub fn or_rd(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let position = t * (OR_RD_STOPS.len() - 1) as f64;
    let index = position.floor() as usize;
    if index >= OR_RD_STOPS.len() - 1 {
        return OR_RD_STOPS[OR_RD_STOPS.len() - 1];
    }

    let frac = position - index as f64;
    let lo = OR_RD_STOPS[index];
    let hi = OR_RD_STOPS[index + 1];
    RGBColor(
        lerp_channel(lo.0, hi.0, frac),
        lerp_channel(lo.1, hi.1, frac),
        lerp_channel(lo.2, hi.2, frac),
    )
}

fn lerp_channel(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac).round() as u8
}

/// Hex form for SVG attributes, e.g. "#fc8d59"
pub fn to_hex(color: &RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}
