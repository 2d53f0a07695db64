// Visual parameter derivation
//
// Each formula reads one attribute value from a record and produces one
// bounded visual parameter. All four are pure functions of a single scalar;
// NaN inputs flow through the wrapping arithmetic and are only pinned at the
// clamping step.

use crate::ir::{Record, ResolvedBindings};
use plotters::style::RGBColor;

/// The four derived parameters for one glyph
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphParams {
    /// Wine fill level as a 0-100 gradient-stop percentage, 2-decimal rounded
    pub fill_pct: f64,
    /// Glass color sampled from the Orange-Red scale
    pub color: RGBColor,
    /// Uniform scale factor for the ice-cube glyph, within [1, 3]
    pub ice_scale: f64,
    /// Horizontal straw offset from the glass base x, within [1, 28]
    pub straw_offset: f64,
}

/// Derive all four visual parameters for one record
pub fn derive_params(record: &Record, bindings: &ResolvedBindings) -> GlyphParams {
    GlyphParams {
        fill_pct: fill_percentage(record.value(&bindings.fill)),
        color: glass_color(record.value(&bindings.color)),
        ice_scale: ice_scale(record.value(&bindings.ice)),
        straw_offset: straw_offset(record.value(&bindings.straw)),
    }
}

/// Wrap `value` back below `reducer` once it passes `max_value`
pub fn reduce_value(value: f64, max_value: f64, reducer: f64) -> f64 {
    if value > max_value {
        value % reducer
    } else {
        value
    }
}

/// Clamp to [min_value, max_value]. NaN pins to the lower bound so every
/// caller receives an in-range value.
pub fn limit_min_max(value: f64, min_value: f64, max_value: f64) -> f64 {
    if value.is_nan() || value <= min_value {
        min_value
    } else if value >= max_value {
        max_value
    } else {
        value
    }
}

/// Fill-level percentage: small values are scaled up into percent range,
/// values past 100 wrap at 99.9. Rounded to 2 decimals; NaN propagates and
/// is resolved at compile time.
pub fn fill_percentage(value: f64) -> f64 {
    let mut value = value;
    if value < 10.0 {
        value *= 10.0;
    } else if value > 100.0 {
        value %= 99.9;
    }
    (value * 100.0).round() / 100.0
}

/// Glass color from the color-intensity attribute. The `> 3` / `% 2.9`
/// threshold-reducer pair is kept exactly as the visualization shipped with.
pub fn glass_color(value: f64) -> RGBColor {
    let reduced = reduce_value(value, 3.0, 2.9);
    crate::palette::or_rd(limit_min_max(reduced, 0.0, 1.0))
}

/// Ice-cube scale factor from the bound attribute
pub fn ice_scale(value: f64) -> f64 {
    let reduced = reduce_value(value, 3.0, 2.9);
    limit_min_max(reduced, 1.0, 3.0)
}

/// Straw horizontal offset from the bound attribute
pub fn straw_offset(value: f64) -> f64 {
    let value = if value < 1.0 { value * 10.0 } else { value };
    let reduced = reduce_value(value, 28.0, 27.9);
    limit_min_max(reduced, 1.0, 28.0)
}
