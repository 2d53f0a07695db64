// Scene compilation: records + bindings -> parameterized glyph scene

use crate::glyph::{self, GlyphParams};
use crate::ir::{GlyphMarks, GlyphScene, GradientSpec, IceCubeMark, Record, ResolvedBindings, StrawMark};
use crate::RenderOptions;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

// Glyph-relative anchors recovered from the shipped visualization
const ICE_OFFSET_X: f64 = 50.0;
const ICE_OFFSET_Y: f64 = 80.0;
const STRAW_BASE_X: f64 = 49.0;
const STRAW_OFFSET_Y: f64 = 18.0;

/// Compile every record into glyph marks. Fills in each record's gradient
/// id as a side effect, mirroring the render-time `colorId` assignment of
/// the original.
pub fn compile_scene(
    records: &mut [Record],
    bindings: &ResolvedBindings,
    options: &RenderOptions,
) -> GlyphScene {
    let mut glyphs = Vec::with_capacity(records.len());

    for record in records.iter_mut() {
        let params = glyph::derive_params(record, bindings);
        let id = unique_id();
        record.color_id = Some(id.clone());
        glyphs.push(compile_glyph(record, params, id));
    }

    GlyphScene {
        width: options.width,
        height: options.height,
        glyphs,
    }
}

fn compile_glyph(record: &Record, params: GlyphParams, gradient_id: String) -> GlyphMarks {
    let fill_pct = if params.fill_pct.is_finite() {
        params.fill_pct
    } else {
        tracing::warn!(gradient = %gradient_id, "non-finite fill percentage, rendering empty glass");
        0.0
    };

    GlyphMarks {
        x: record.x,
        y: record.y,
        gradient: GradientSpec {
            id: gradient_id,
            fill_pct,
            color: params.color,
        },
        ice: IceCubeMark {
            translate_x: record.x + ICE_OFFSET_X,
            translate_y: record.y + ICE_OFFSET_Y,
            scale: params.ice_scale,
        },
        straw: StrawMark {
            x: record.x + STRAW_BASE_X + params.straw_offset,
            y: record.y + STRAW_OFFSET_Y,
        },
    }
}

/// Gradient identifier: epoch milliseconds plus a short random suffix.
/// Uniqueness is probabilistic, which is acceptable for one SVG document.
fn unique_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(5)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();
    format!("{}-{}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn wine_record(x: f64, y: f64, alcohol: f64) -> Record {
        let mut data = HashMap::new();
        data.insert("Alcohol".to_string(), alcohol);
        data.insert("Color intensity".to_string(), 4.5);
        data.insert("Ash".to_string(), 2.0);
        data.insert("Proline".to_string(), 750.0);
        let mut record = Record::new(data);
        record.x = x;
        record.y = y;
        record
    }

    fn bindings() -> ResolvedBindings {
        ResolvedBindings {
            color: "Color intensity".to_string(),
            fill: "Alcohol".to_string(),
            ice: "Ash".to_string(),
            straw: "Proline".to_string(),
        }
    }

    #[test]
    fn test_compile_one_glyph_per_record() {
        let mut records = vec![wine_record(30.0, 30.0, 5.0), wine_record(175.0, 30.0, 150.0)];
        let scene = compile_scene(&mut records, &bindings(), &RenderOptions::default());
        assert_eq!(scene.glyphs.len(), 2);
        assert_eq!(scene.width, 1500);
        assert_eq!(scene.height, 3200);
    }

    #[test]
    fn test_compile_assigns_gradient_ids() {
        let mut records = vec![wine_record(30.0, 30.0, 5.0)];
        let scene = compile_scene(&mut records, &bindings(), &RenderOptions::default());
        let id = records[0].color_id.as_ref().unwrap();
        assert_eq!(id, &scene.glyphs[0].gradient.id);
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), 5);
    }

    #[test]
    fn test_compile_glyph_anchors() {
        let mut records = vec![wine_record(175.0, 205.0, 5.0)];
        let scene = compile_scene(&mut records, &bindings(), &RenderOptions::default());
        let glyph = &scene.glyphs[0];
        assert_eq!(glyph.ice.translate_x, 225.0);
        assert_eq!(glyph.ice.translate_y, 285.0);
        // straw x = record.x + 49 + offset, offset within [1, 28]
        assert!(glyph.straw.x >= 175.0 + 49.0 + 1.0);
        assert!(glyph.straw.x <= 175.0 + 49.0 + 28.0);
        assert_eq!(glyph.straw.y, 223.0);
    }

    #[test]
    fn test_compile_nan_fill_renders_empty_glass() {
        let mut records = vec![wine_record(30.0, 30.0, f64::NAN)];
        let scene = compile_scene(&mut records, &bindings(), &RenderOptions::default());
        assert_eq!(scene.glyphs[0].gradient.fill_pct, 0.0);
    }
}
