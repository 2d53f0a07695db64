use plotters::style::RGBColor;
use std::collections::HashMap;

// =============================================================================
// Phase 1: Normalization
// =============================================================================

/// One dataset row with every cell coerced to a number.
/// Layout fills in `x`/`y`; compilation fills in `color_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub data: HashMap<String, f64>,
    pub x: f64,
    pub y: f64,
    pub color_id: Option<String>,
}

impl Record {
    pub fn new(data: HashMap<String, f64>) -> Self {
        Self {
            data,
            x: 0.0,
            y: 0.0,
            color_id: None,
        }
    }

    /// Attribute value by column name. Missing columns read as NaN so the
    /// derivation formulas stay total.
    pub fn value(&self, attribute: &str) -> f64 {
        self.data.get(attribute).copied().unwrap_or(f64::NAN)
    }
}

/// The live record sequence plus the immutable post-load snapshot.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    snapshot: Vec<Record>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            headers,
            records,
            snapshot: Vec::new(),
        }
    }

    /// Columns that can be bound to glyph parameters: everything except the
    /// first (sample-identifier) column.
    pub fn attribute_names(&self) -> &[String] {
        if self.headers.is_empty() {
            &[]
        } else {
            &self.headers[1..]
        }
    }

    /// Deep-copy the current record order. Taken once, immediately after
    /// initial layout.
    pub fn take_snapshot(&mut self) {
        self.snapshot = self.records.clone();
    }

    /// Restore the record sequence captured by `take_snapshot`.
    pub fn restore_snapshot(&mut self) {
        if !self.snapshot.is_empty() {
            self.records = self.snapshot.clone();
        }
    }
}

// =============================================================================
// Phase 2: Binding Resolution
// =============================================================================

/// Glyph bindings with every slot resolved to a concrete dataset column
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBindings {
    pub color: String,
    pub fill: String,
    pub ice: String,
    pub straw: String,
}

// =============================================================================
// Phase 3: Compilation (Scene Graph)
// =============================================================================

/// Fully parameterized glyph scene. The SVG writer just serializes this.
#[derive(Debug, Clone)]
pub struct GlyphScene {
    pub width: u32,
    pub height: u32,
    pub glyphs: Vec<GlyphMarks>,
}

/// Geometry for a single wine-glass glyph, anchored at the record's (x, y)
#[derive(Debug, Clone)]
pub struct GlyphMarks {
    pub x: f64,
    pub y: f64,
    pub gradient: GradientSpec,
    pub ice: IceCubeMark,
    pub straw: StrawMark,
}

/// Vertical linear gradient filling the glass bowl: a white stop at
/// `100 - fill_pct`% followed by the glass color stop at `fill_pct`%.
#[derive(Debug, Clone)]
pub struct GradientSpec {
    pub id: String,
    pub fill_pct: f64,
    pub color: RGBColor,
}

/// Ice-cube group transform: translate to the glass base, then uniform scale
#[derive(Debug, Clone)]
pub struct IceCubeMark {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

/// Straw rectangle anchor (top-left corner)
#[derive(Debug, Clone)]
pub struct StrawMark {
    pub x: f64,
    pub y: f64,
}
