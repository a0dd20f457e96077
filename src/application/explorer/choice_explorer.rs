//! ChoiceExplorer - controller owning every panel and result display.
//!
//! Routes interactions to panels, recomputes all results after any value
//! change, tracks whether the user has answered, and keeps the shared
//! layout metrics current.
//!
//! # Event Order
//!
//! For one call, panel events come first in the order the panel emitted
//! them, then `ResultsUpdated` (if any value changed), then
//! `LayoutChanged` (if any width changed).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{ExplorerSettings, ExplorerView, LayoutMetrics, PanelView, ResultView};
use crate::domain::aggregation::{AggregationEngine, ResultDisplay, ResultValue};
use crate::domain::content::{Content, ContentConfig, ContentSanitizer};
use crate::domain::foundation::{DecisionId, DomainError, ElementId};
use crate::domain::panel::{AutoScalingInputPanel, PanelEvent, PanelInteraction, PanelParams};
use crate::domain::persistence::{DecisionValue, ExplorerState, StateSanitizer};
use crate::ports::{IdGenerator, Resettable, StatefulWidget};

/// Notifications emitted by the explorer, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExplorerEvent {
    ValueChanged { decision_id: DecisionId, value: f64 },
    MaxValueChanged { decision_id: DecisionId, max: f64 },
    /// Every target's current result, index-aligned with the targets.
    ResultsUpdated { results: Vec<Option<ResultValue>> },
    LayoutChanged { layout: LayoutMetrics },
}

#[derive(Debug, Clone)]
struct PanelSlot {
    decision_id: DecisionId,
    label_id: ElementId,
    panel: AutoScalingInputPanel,
}

#[derive(Debug, Clone)]
pub struct ChoiceExplorer {
    content: Content,
    panels: Vec<PanelSlot>,
    results: Vec<ResultDisplay>,
    answer_given: bool,
    layout: LayoutMetrics,
}

impl ChoiceExplorer {
    /// Builds panels and result displays for sanitized content.
    ///
    /// Incomplete content (no decisions or no targets) yields an explorer
    /// that only reports missing parameters.
    pub fn new(content: Content, settings: &ExplorerSettings, ids: &dyn IdGenerator) -> Self {
        let mut explorer = Self {
            content,
            panels: Vec::new(),
            results: Vec::new(),
            answer_given: false,
            layout: LayoutMetrics::default(),
        };

        if !explorer.content.is_complete() {
            warn!(
                decisions = explorer.content.decisions.len(),
                targets = explorer.content.targets.len(),
                "Content is missing decisions or targets"
            );
            return explorer;
        }

        explorer.panels = explorer
            .content
            .decisions
            .iter()
            .map(|decision| PanelSlot {
                decision_id: decision.id.clone(),
                label_id: ElementId::from_string(ids.generate()),
                panel: AutoScalingInputPanel::new(
                    PanelParams::new(decision.min, decision.max).with_base(settings.base),
                ),
            })
            .collect();
        explorer.results = vec![ResultDisplay::new(); explorer.content.targets.len()];

        explorer.recompute_results();
        explorer.layout = explorer.measure_layout();

        info!(
            decisions = explorer.panels.len(),
            targets = explorer.results.len(),
            "Choice explorer ready"
        );
        explorer
    }

    /// Sanitizes raw content and builds the explorer from it.
    pub fn from_config(
        config: ContentConfig,
        settings: &ExplorerSettings,
        ids: &dyn IdGenerator,
    ) -> Self {
        let sanitized = ContentSanitizer::sanitize(config, settings.gives_live_feedback);
        if !sanitized.issues.is_empty() {
            debug!(issues = sanitized.issues.len(), "Content repaired during sanitization");
        }
        Self::new(sanitized.content, settings, ids)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// True when there is nothing to explore.
    pub fn is_missing_parameters(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel(&self, decision_id: &str) -> Option<&AutoScalingInputPanel> {
        self.position(decision_id).map(|i| &self.panels[i].panel)
    }

    pub fn label_id(&self, decision_id: &str) -> Option<&ElementId> {
        self.position(decision_id).map(|i| &self.panels[i].label_id)
    }

    /// Current decision values in content order.
    pub fn values(&self) -> Vec<f64> {
        self.panels.iter().map(|slot| slot.panel.value()).collect()
    }

    /// Current result of every target.
    pub fn results(&self) -> Vec<Option<ResultValue>> {
        self.results.iter().map(ResultDisplay::current).collect()
    }

    pub fn layout(&self) -> &LayoutMetrics {
        &self.layout
    }

    /// Routes a user interaction to the panel of `decision_id`.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameters` if the content is incomplete, otherwise
    /// `DecisionNotFound` if no panel has that id.
    pub fn interact(
        &mut self,
        decision_id: &str,
        interaction: PanelInteraction,
    ) -> Result<Vec<ExplorerEvent>, DomainError> {
        if self.is_missing_parameters() {
            return Err(DomainError::missing_parameters());
        }

        let index = self
            .position(decision_id)
            .ok_or_else(|| DomainError::decision_not_found(decision_id))?;

        debug!(decision_id = %decision_id, ?interaction, "Routing interaction");
        let panel_events = self.panels[index].panel.interact(interaction);

        let mut events = Vec::new();
        let value_changed = self.forward(index, panel_events, &mut events);
        if value_changed {
            self.answer_given = true;
        }
        self.settle(value_changed, &mut events);

        Ok(events)
    }

    /// Flushes deferred range control paints. Returns how many panels repainted.
    pub fn on_animation_frame(&mut self) -> usize {
        let mut painted = 0;
        for slot in &mut self.panels {
            if slot.panel.paint() {
                painted += 1;
            }
        }
        painted
    }

    /// Restores state from an untyped payload, dropping anything malformed.
    pub fn restore_from_json(&mut self, payload: &Value) -> Vec<ExplorerEvent> {
        let state = StateSanitizer::sanitize_json(payload, &self.known_ids());
        self.set_current_state(state)
    }

    fn known_ids(&self) -> Vec<DecisionId> {
        self.panels.iter().map(|slot| slot.decision_id.clone()).collect()
    }

    fn position(&self, decision_id: &str) -> Option<usize> {
        self.panels
            .iter()
            .position(|slot| slot.decision_id.as_str() == decision_id)
    }

    /// Translates panel events. Returns true if any value changed.
    fn forward(
        &self,
        index: usize,
        panel_events: Vec<PanelEvent>,
        events: &mut Vec<ExplorerEvent>,
    ) -> bool {
        let decision_id = &self.panels[index].decision_id;
        let mut value_changed = false;

        for event in panel_events {
            match event {
                PanelEvent::ValueChanged { value } => {
                    value_changed = true;
                    events.push(ExplorerEvent::ValueChanged {
                        decision_id: decision_id.clone(),
                        value,
                    });
                }
                PanelEvent::MaxValueChanged { max } => {
                    events.push(ExplorerEvent::MaxValueChanged {
                        decision_id: decision_id.clone(),
                        max,
                    });
                }
            }
        }

        value_changed
    }

    fn settle(&mut self, value_changed: bool, events: &mut Vec<ExplorerEvent>) {
        if value_changed {
            let results = self.recompute_results();
            events.push(ExplorerEvent::ResultsUpdated { results });
        }

        let layout = self.measure_layout();
        if layout != self.layout {
            debug!(?layout, "Layout metrics changed");
            self.layout = layout;
            events.push(ExplorerEvent::LayoutChanged { layout });
        }
    }

    fn recompute_results(&mut self) -> Vec<Option<ResultValue>> {
        let values = self.values();
        let computed =
            AggregationEngine::compute(&self.content.decisions, &values, &self.content.targets);

        for (display, result) in self.results.iter_mut().zip(computed) {
            display.set(result);
        }
        self.results()
    }

    fn measure_layout(&self) -> LayoutMetrics {
        LayoutMetrics::measure(
            &self.content,
            self.panels.iter().map(|slot| slot.panel.max_value()),
            &self.results(),
        )
    }
}

impl Resettable for ChoiceExplorer {
    type Event = ExplorerEvent;

    fn reset(&mut self) -> Vec<ExplorerEvent> {
        let mut events = Vec::new();
        if self.is_missing_parameters() {
            return events;
        }

        for index in 0..self.panels.len() {
            let panel_events = self.panels[index].panel.reset();
            self.forward(index, panel_events, &mut events);
        }
        self.settle(true, &mut events);
        self.answer_given = false;

        info!("Choice explorer reset");
        events
    }
}

impl StatefulWidget for ChoiceExplorer {
    type State = ExplorerState;
    type View = ExplorerView;
    type Event = ExplorerEvent;

    fn render(&self) -> ExplorerView {
        let panels = self
            .content
            .decisions
            .iter()
            .zip(&self.panels)
            .map(|(decision, slot)| PanelView {
                id: slot.decision_id.clone(),
                label_id: slot.label_id.clone(),
                label: decision.label.clone(),
                unit: decision.unit.clone(),
                value: slot.panel.value(),
                painted_value: slot.panel.range().painted_value(),
                max: slot.panel.max_value(),
                fixed_max: slot.panel.has_fixed_max(),
                fill_ratio: slot.panel.range().fill_ratio(),
                field_text: slot.panel.field().text().to_string(),
            })
            .collect();

        let results = self
            .content
            .targets
            .iter()
            .zip(&self.results)
            .map(|(target, display)| {
                let current = display.current();
                ResultView {
                    label: target.label.clone(),
                    unit: target.unit.clone(),
                    value: current.map(|r| r.value),
                    feedback: current.map(|r| r.feedback).unwrap_or_default(),
                }
            })
            .collect();

        ExplorerView {
            missing_parameters: self.is_missing_parameters(),
            panels,
            results,
            layout: self.layout,
        }
    }

    fn has_response(&self) -> bool {
        self.answer_given
    }

    fn current_state(&self) -> Option<ExplorerState> {
        if self.is_missing_parameters() {
            return None;
        }

        Some(ExplorerState::new(
            self.panels
                .iter()
                .map(|slot| DecisionValue::new(slot.decision_id.clone(), slot.panel.value()))
                .collect(),
        ))
    }

    fn set_current_state(&mut self, state: ExplorerState) -> Vec<ExplorerEvent> {
        let mut events = Vec::new();
        let state = StateSanitizer::sanitize(state, &self.known_ids());
        if state.is_empty() {
            debug!("No usable saved state, keeping current values");
            return events;
        }

        for entry in state.decisions {
            if let Some(index) = self.position(entry.id.as_str()) {
                let panel_events = self.panels[index].panel.set_value(entry.value);
                self.forward(index, panel_events, &mut events);
            }
        }
        self.answer_given = true;
        self.settle(true, &mut events);

        info!("Restored saved state");
        events
    }
}
