// Runtime executor for the GlyphPipe DSL

use crate::data::TableData;
use crate::parser::ast::MapSpec;
use crate::{compile, controller, layout, render_svg, resolve, transform, RenderOptions};
use anyhow::{Context, Result};

/// Render a map specification against a dataset, producing an SVG document
pub fn render_map(spec: MapSpec, table: TableData, options: &RenderOptions) -> Result<String> {
    let width = options.width as f64;

    let mut dataset = transform::normalize(table).context("Failed to normalize dataset")?;
    layout::assign_positions(&mut dataset.records, width);
    dataset.take_snapshot();

    let bindings = resolve::resolve_bindings(&spec.bindings, &dataset)
        .context("Failed to resolve glyph bindings")?;

    if let Some(sort) = &spec.sort {
        let sort = resolve::resolve_sort(sort, &dataset)
            .context("Failed to resolve sort request")?;
        controller::apply_sort(&mut dataset.records, &sort);
        layout::assign_positions(&mut dataset.records, width);
    }

    tracing::debug!(
        records = dataset.records.len(),
        sorted = spec.sort.is_some(),
        "compiling glyph scene"
    );

    let scene = compile::compile_scene(&mut dataset.records, &bindings, options);
    Ok(render_svg::render_scene(&scene))
}
