// Sorting control state machine and UI event dispatcher
//
// Models the selector/apply-button wiring of the visualization without
// depending on any UI toolkit. An embedder forwards its input events to
// `dispatch` and re-renders whenever `Effect::Rerender` comes back.

use crate::ir::{Dataset, Record};
use crate::layout;
use crate::parser::ast::{GlyphBindings, SortOrder, SortSpec};
use crate::{compile, render_svg, resolve, RenderOptions};
use anyhow::Result;
use std::cmp::Ordering;

/// Sorting-control states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    /// No complete sort selection; apply is disabled
    Unconfigured,
    /// Attribute and direction both selected; apply is enabled
    ReadyToApply,
    /// The current order is the result of an applied sort
    Applied,
}

/// One of the four per-glass attribute selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSlot {
    Color,
    Fill,
    Ice,
    Straw,
}

/// Discrete user-input events
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SortAttributeChanged(Option<String>),
    SortOrderChanged(Option<SortOrder>),
    ApplyRequested,
    BindingChanged(BindingSlot, String),
}

/// What the embedding UI should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Rerender,
    None,
}

/// Long-lived application state: the live dataset, its snapshot, the glyph
/// bindings, and the sort selections.
#[derive(Debug)]
pub struct Controller {
    dataset: Dataset,
    bindings: GlyphBindings,
    sort_attribute: Option<String>,
    sort_order: Option<SortOrder>,
    state: SortState,
    canvas_width: f64,
}

impl Controller {
    /// Lay out the freshly loaded dataset, snapshot it, and start with an
    /// empty sort selection.
    pub fn new(mut dataset: Dataset, bindings: GlyphBindings, canvas_width: f64) -> Self {
        layout::assign_positions(&mut dataset.records, canvas_width);
        dataset.take_snapshot();
        Self {
            dataset,
            bindings,
            sort_attribute: None,
            sort_order: None,
            state: SortState::Unconfigured,
            canvas_width,
        }
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Mirrors the apply-button enablement of the original UI
    pub fn apply_enabled(&self) -> bool {
        self.state == SortState::ReadyToApply
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bindings(&self) -> &GlyphBindings {
        &self.bindings
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Effect {
        match event {
            UiEvent::SortAttributeChanged(attribute) => {
                self.sort_attribute = attribute;
                self.reevaluate_selection()
            }
            UiEvent::SortOrderChanged(order) => {
                self.sort_order = order;
                self.reevaluate_selection()
            }
            UiEvent::ApplyRequested => {
                match (self.state, &self.sort_attribute, self.sort_order) {
                    (SortState::ReadyToApply, Some(by), Some(order)) => {
                        let spec = SortSpec {
                            by: by.clone(),
                            order,
                        };
                        apply_sort(&mut self.dataset.records, &spec);
                        layout::assign_positions(&mut self.dataset.records, self.canvas_width);
                        self.state = SortState::Applied;
                        Effect::Rerender
                    }
                    _ => Effect::None,
                }
            }
            UiEvent::BindingChanged(slot, attribute) => {
                let attribute = Some(attribute);
                match slot {
                    BindingSlot::Color => self.bindings.color = attribute,
                    BindingSlot::Fill => self.bindings.fill = attribute,
                    BindingSlot::Ice => self.bindings.ice = attribute,
                    BindingSlot::Straw => self.bindings.straw = attribute,
                }
                Effect::Rerender
            }
        }
    }

    /// Both selectors present enables apply; losing either resets the live
    /// dataset to the post-load snapshot.
    fn reevaluate_selection(&mut self) -> Effect {
        if self.sort_attribute.is_some() && self.sort_order.is_some() {
            self.state = SortState::ReadyToApply;
        } else {
            self.state = SortState::Unconfigured;
            self.dataset.restore_snapshot();
        }
        Effect::Rerender
    }

    /// Render the current state to an SVG document
    pub fn render(&mut self, options: &RenderOptions) -> Result<String> {
        let resolved = resolve::resolve_bindings(&self.bindings, &self.dataset)?;
        let scene = compile::compile_scene(&mut self.dataset.records, &resolved, options);
        Ok(render_svg::render_scene(&scene))
    }
}

/// Stable sort of the live records by one attribute. Values never change;
/// only the order does. NaN values compare equal, so their relative order
/// is preserved.
pub fn apply_sort(records: &mut [Record], spec: &SortSpec) {
    records.sort_by(|r1, r2| {
        let a = r1.value(&spec.by);
        let b = r2.value(&spec.by);
        let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn wine_dataset(alcohol_values: &[f64]) -> Dataset {
        let records = alcohol_values
            .iter()
            .map(|&v| {
                let mut data = HashMap::new();
                data.insert("Wine".to_string(), 1.0);
                data.insert("Alcohol".to_string(), v);
                Record::new(data)
            })
            .collect();
        Dataset::new(vec!["Wine".into(), "Alcohol".into()], records)
    }

    fn controller(alcohol_values: &[f64]) -> Controller {
        Controller::new(wine_dataset(alcohol_values), GlyphBindings::default(), 1500.0)
    }

    fn alcohol_order(controller: &Controller) -> Vec<f64> {
        controller
            .dataset()
            .records
            .iter()
            .map(|r| r.value("Alcohol"))
            .collect()
    }

    #[test]
    fn test_initial_state_unconfigured() {
        let ctrl = controller(&[3.0, 1.0, 2.0]);
        assert_eq!(ctrl.state(), SortState::Unconfigured);
        assert!(!ctrl.apply_enabled());
    }

    #[test]
    fn test_both_selections_enable_apply() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        ctrl.dispatch(UiEvent::SortAttributeChanged(Some("Alcohol".into())));
        assert_eq!(ctrl.state(), SortState::Unconfigured);
        ctrl.dispatch(UiEvent::SortOrderChanged(Some(SortOrder::Ascending)));
        assert_eq!(ctrl.state(), SortState::ReadyToApply);
        assert!(ctrl.apply_enabled());
    }

    #[test]
    fn test_apply_sorts_and_relayouts() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        ctrl.dispatch(UiEvent::SortAttributeChanged(Some("Alcohol".into())));
        ctrl.dispatch(UiEvent::SortOrderChanged(Some(SortOrder::Ascending)));
        let effect = ctrl.dispatch(UiEvent::ApplyRequested);
        assert_eq!(effect, Effect::Rerender);
        assert_eq!(ctrl.state(), SortState::Applied);
        assert_eq!(alcohol_order(&ctrl), vec![1.0, 2.0, 3.0]);
        // layout re-ran in the new order
        assert_eq!(ctrl.dataset().records[0].x, 30.0);
        assert_eq!(ctrl.dataset().records[1].x, 175.0);
    }

    #[test]
    fn test_apply_ignored_when_not_ready() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        assert_eq!(ctrl.dispatch(UiEvent::ApplyRequested), Effect::None);
        assert_eq!(alcohol_order(&ctrl), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_descending_reverses_ascending() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        ctrl.dispatch(UiEvent::SortAttributeChanged(Some("Alcohol".into())));
        ctrl.dispatch(UiEvent::SortOrderChanged(Some(SortOrder::Ascending)));
        ctrl.dispatch(UiEvent::ApplyRequested);
        let ascending = alcohol_order(&ctrl);

        ctrl.dispatch(UiEvent::SortOrderChanged(Some(SortOrder::Descending)));
        ctrl.dispatch(UiEvent::ApplyRequested);
        let descending = alcohol_order(&ctrl);

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn test_clearing_selection_restores_snapshot() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        ctrl.dispatch(UiEvent::SortAttributeChanged(Some("Alcohol".into())));
        ctrl.dispatch(UiEvent::SortOrderChanged(Some(SortOrder::Ascending)));
        ctrl.dispatch(UiEvent::ApplyRequested);
        assert_eq!(alcohol_order(&ctrl), vec![1.0, 2.0, 3.0]);

        let effect = ctrl.dispatch(UiEvent::SortOrderChanged(None));
        assert_eq!(effect, Effect::Rerender);
        assert_eq!(ctrl.state(), SortState::Unconfigured);
        assert_eq!(alcohol_order(&ctrl), vec![3.0, 1.0, 2.0]);
        // snapshot positions come back too
        assert_eq!(ctrl.dataset().records[0].x, 30.0);
        assert_eq!(ctrl.dataset().records[1].x, 175.0);
    }

    #[test]
    fn test_sort_does_not_mutate_values() {
        let mut records = wine_dataset(&[3.0, 1.0, 2.0]).records;
        let spec = SortSpec {
            by: "Alcohol".to_string(),
            order: SortOrder::Ascending,
        };
        apply_sort(&mut records, &spec);
        let values: Vec<f64> = records.iter().map(|r| r.value("Alcohol")).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
        assert!(records.iter().all(|r| r.value("Wine") == 1.0));
    }

    #[test]
    fn test_sort_nan_rows_keep_relative_order() {
        let mut dataset = wine_dataset(&[2.0, f64::NAN, 1.0]);
        dataset.records[1].data.insert("Wine".to_string(), 42.0);
        let spec = SortSpec {
            by: "Alcohol".to_string(),
            order: SortOrder::Ascending,
        };
        apply_sort(&mut dataset.records, &spec);
        // NaN compares equal everywhere; the stable sort leaves it in place
        assert_eq!(dataset.records[1].value("Wine"), 42.0);
    }

    #[test]
    fn test_binding_change_rerenders_without_resort() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        let effect = ctrl.dispatch(UiEvent::BindingChanged(BindingSlot::Fill, "Alcohol".into()));
        assert_eq!(effect, Effect::Rerender);
        assert_eq!(ctrl.bindings().fill.as_deref(), Some("Alcohol"));
        assert_eq!(alcohol_order(&ctrl), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_reopening_selector_after_applied() {
        let mut ctrl = controller(&[3.0, 1.0, 2.0]);
        ctrl.dispatch(UiEvent::SortAttributeChanged(Some("Alcohol".into())));
        ctrl.dispatch(UiEvent::SortOrderChanged(Some(SortOrder::Ascending)));
        ctrl.dispatch(UiEvent::ApplyRequested);
        assert_eq!(ctrl.state(), SortState::Applied);

        // picking a different attribute keeps both halves selected
        ctrl.dispatch(UiEvent::SortAttributeChanged(Some("Wine".into())));
        assert_eq!(ctrl.state(), SortState::ReadyToApply);

        // clearing it drops back to unconfigured
        ctrl.dispatch(UiEvent::SortAttributeChanged(None));
        assert_eq!(ctrl.state(), SortState::Unconfigured);
    }
}
