use crate::ir::{Dataset, ResolvedBindings};
use crate::parser::ast::{GlyphBindings, SortSpec};
use anyhow::Result;

// Default slot bindings, matching the wine-chemistry dataset the
// visualization was designed around.
pub const DEFAULT_COLOR_ATTR: &str = "Color intensity";
pub const DEFAULT_FILL_ATTR: &str = "Alcohol";
pub const DEFAULT_ICE_ATTR: &str = "Ash";
pub const DEFAULT_STRAW_ATTR: &str = "Proline";

/// Resolve the four glyph slots against the dataset's attribute columns.
///
/// Explicitly bound attributes must exist. A default that is absent (the
/// dataset is not the wine set) falls back to the first attribute column so
/// a bare `glyph()` still renders.
pub fn resolve_bindings(
    bindings: &GlyphBindings,
    dataset: &Dataset,
) -> Result<ResolvedBindings> {
    Ok(ResolvedBindings {
        color: resolve_slot("color", bindings.color.as_deref(), DEFAULT_COLOR_ATTR, dataset)?,
        fill: resolve_slot("fill", bindings.fill.as_deref(), DEFAULT_FILL_ATTR, dataset)?,
        ice: resolve_slot("ice", bindings.ice.as_deref(), DEFAULT_ICE_ATTR, dataset)?,
        straw: resolve_slot("straw", bindings.straw.as_deref(), DEFAULT_STRAW_ATTR, dataset)?,
    })
}

/// Validate a sort request against the dataset's attribute columns
pub fn resolve_sort(sort: &SortSpec, dataset: &Dataset) -> Result<SortSpec> {
    if !has_attribute(dataset, &sort.by) {
        anyhow::bail!(
            "Sort attribute '{}' not found in dataset (available: {})",
            sort.by,
            dataset.attribute_names().join(", ")
        );
    }
    Ok(sort.clone())
}

fn resolve_slot(
    slot: &str,
    explicit: Option<&str>,
    default: &str,
    dataset: &Dataset,
) -> Result<String> {
    if let Some(attribute) = explicit {
        if !has_attribute(dataset, attribute) {
            anyhow::bail!(
                "Attribute '{}' bound to '{}' not found in dataset (available: {})",
                attribute,
                slot,
                dataset.attribute_names().join(", ")
            );
        }
        return Ok(attribute.to_string());
    }

    if has_attribute(dataset, default) {
        return Ok(default.to_string());
    }

    match dataset.attribute_names().first() {
        Some(first) => {
            tracing::warn!(slot, missing = default, fallback = %first, "default attribute missing, using first column");
            Ok(first.clone())
        }
        None => anyhow::bail!("Dataset has no attribute columns to bind '{}'", slot),
    }
}

fn has_attribute(dataset: &Dataset, name: &str) -> bool {
    dataset.attribute_names().iter().any(|a| a == name)
}
