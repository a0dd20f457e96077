//! Integration tests for the explorer driven through its public surface.
//!
//! Content is loaded from files the way the binary does, then the explorer
//! is driven with host-style interactions.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use choice_explorer::adapters::{ContentFileLoader, SequentialIdGenerator};
use choice_explorer::application::{ChoiceExplorer, ExplorerEvent, ExplorerSettings};
use choice_explorer::domain::aggregation::Feedback;
use choice_explorer::domain::foundation::ErrorCode;
use choice_explorer::domain::panel::PanelInteraction;
use choice_explorer::ports::{Resettable, StatefulWidget};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CONTENT_YAML: &str = r#"
decisions:
  - id: budget
    label: Budget
    unit: k€
    weights: [3, 5]
  - id: hours
    label: Hours per week
    unit: h
    max: 100
    weights: [1, 0]
  - label: No id, dropped
    weights: [9, 9]
targets:
  - id: cost
    label: Cost
    unit: k€
    max: 20
    givesLiveFeedback: true
  - id: effort
    label: Effort
weights:
  - decisionId: hours
    targets:
      - targetId: effort
        weight: 0
      - targetId: cost
        weight: 1
  - decisionId: ghost
    targets:
      - weight: 4
behaviour:
  givesLiveFeedback: false
"#;

fn load_explorer() -> ChoiceExplorer {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.yaml");
    fs::write(&path, CONTENT_YAML).unwrap();

    let config = ContentFileLoader::new().load_content(&path).unwrap();
    ChoiceExplorer::from_config(
        config,
        &ExplorerSettings::default(),
        &SequentialIdGenerator::new("choice-explorer-label"),
    )
}

fn type_value(explorer: &mut ChoiceExplorer, id: &str, text: &str) -> Vec<ExplorerEvent> {
    explorer
        .interact(
            id,
            PanelInteraction::FieldInput {
                text: text.to_string(),
            },
        )
        .unwrap()
}

fn result_values(explorer: &ChoiceExplorer) -> Vec<Option<i64>> {
    explorer
        .results()
        .into_iter()
        .map(|r| r.map(|r| r.value))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn loads_sanitized_content_from_yaml() {
    let explorer = load_explorer();
    let view = explorer.render();

    assert!(!view.missing_parameters);
    assert_eq!(view.panels.len(), 2);
    assert_eq!(view.panels[0].label_id.as_str(), "choice-explorer-label-1");
    assert!(!view.panels[0].fixed_max);
    assert_eq!(view.panels[0].max, 100.0);
    assert!(view.panels[1].fixed_max);
    assert_eq!(view.layout.label_width, "Hours per week".len());
    assert_eq!(view.layout.unit_width, 2);
}

#[test]
fn aggregates_weighted_sums() {
    let mut explorer = load_explorer();
    type_value(&mut explorer, "budget", "2");
    type_value(&mut explorer, "hours", "10");

    assert_eq!(result_values(&explorer), vec![Some(16), Some(10)]);
}

#[test]
fn target_flag_overrides_behaviour_default() {
    let mut explorer = load_explorer();
    type_value(&mut explorer, "budget", "2");

    let view = explorer.render();
    assert_eq!(view.results[0].feedback, Feedback::Acceptable);
    assert_eq!(view.results[1].feedback, Feedback::Unclassified);

    type_value(&mut explorer, "hours", "15");
    assert_eq!(explorer.render().results[0].feedback, Feedback::Unacceptable);
}

#[test]
fn out_of_range_input_reverts_on_blur() {
    let mut explorer = load_explorer();
    type_value(&mut explorer, "hours", "150");

    assert_eq!(explorer.panel("hours").unwrap().value(), 100.0);
    assert_eq!(explorer.render().panels[1].field_text, "150");

    let events = explorer
        .interact("hours", PanelInteraction::FieldBlur)
        .unwrap();

    assert!(events.is_empty());
    assert_eq!(explorer.render().panels[1].field_text, "100");
}

#[test]
fn dragging_past_the_ceiling_rescales_dynamic_panel() {
    let mut explorer = load_explorer();
    explorer
        .interact(
            "budget",
            PanelInteraction::Press {
                pointer: choice_explorer::domain::controls::PointerKind::Touch,
            },
        )
        .unwrap();
    let events = explorer
        .interact("budget", PanelInteraction::Seek { value: 250.0 })
        .unwrap();

    assert!(events.iter().any(|e| matches!(
        e,
        ExplorerEvent::MaxValueChanged { max, .. } if *max == 1000.0
    )));
    assert_eq!(explorer.panel("budget").unwrap().value(), 100.0);

    explorer
        .interact("budget", PanelInteraction::Seek { value: 40.0 })
        .unwrap();
    explorer.interact("budget", PanelInteraction::Release).unwrap();
    assert_eq!(explorer.panel("budget").unwrap().max_value(), 100.0);
}

#[test]
fn reset_restores_all_minimum_aggregate() {
    let mut explorer = load_explorer();
    let initial = result_values(&explorer);
    type_value(&mut explorer, "budget", "4000");
    type_value(&mut explorer, "hours", "60");
    assert!(explorer.has_response());

    explorer.reset();

    assert_eq!(explorer.values(), vec![0.0, 0.0]);
    assert_eq!(result_values(&explorer), initial);
    assert!(!explorer.has_response());
}

#[test]
fn saved_state_round_trips_through_json() {
    let mut explorer = load_explorer();
    type_value(&mut explorer, "budget", "321.5");
    type_value(&mut explorer, "hours", "42");

    let saved = serde_json::to_value(explorer.current_state().unwrap()).unwrap();

    let mut restored = load_explorer();
    restored.restore_from_json(&saved);

    assert_eq!(restored.values(), explorer.values());
    assert_eq!(result_values(&restored), result_values(&explorer));
    assert_eq!(restored.panel("budget").unwrap().max_value(), 1000.0);
}

#[test]
fn state_sanitization_drops_unknown_and_negative_entries() {
    let mut explorer = load_explorer();
    explorer.restore_from_json(&json!({
        "decisions": [
            {"id": "budget", "value": 3},
            {"id": "unknown", "value": 5},
            {"id": "hours", "value": -1}
        ]
    }));

    assert_eq!(explorer.values(), vec![3.0, 0.0]);
    assert!(explorer.has_response());
}

#[test]
fn unknown_decision_is_rejected() {
    let mut explorer = load_explorer();
    let err = explorer
        .interact("nope", PanelInteraction::FieldBlur)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::DecisionNotFound);
}

#[test]
fn content_without_targets_renders_missing_parameters() {
    let config = serde_json::from_value(json!({
        "decisions": [{"id": "a", "label": "A"}]
    }))
    .unwrap();
    let mut explorer = ChoiceExplorer::from_config(
        config,
        &ExplorerSettings::default(),
        &SequentialIdGenerator::default(),
    );

    let view = explorer.render();
    assert!(view.missing_parameters);
    assert!(view.panels.is_empty());
    assert!(explorer.current_state().is_none());

    let err = explorer
        .interact("a", PanelInteraction::FieldBlur)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingParameters);
}
