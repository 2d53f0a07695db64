// Library exports for vinoglyph

pub mod csv_reader;
pub mod data;
pub mod parser;
pub mod runtime;

// Pipeline Modules
pub mod ir;
pub mod resolve;
pub mod transform;
pub mod layout;
pub mod glyph;
pub mod palette;
pub mod compile;
pub mod render_svg;
pub mod controller;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RenderOptions {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 { 1500 }
fn default_height() -> u32 { 3200 }

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 3200,
        }
    }
}
