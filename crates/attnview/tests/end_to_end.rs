//! End-to-end scenarios against the public facade: analysis in, snapshots
//! out, pointer events and a fake clock in between.

use attnview::prelude::*;
use std::time::{Duration, Instant};

fn analysis() -> AttentionData {
    let mut rows = vec![vec![0.0; 5]; 5];
    rows[0][1] = 0.5;
    AttentionData::new(
        ["Hello", "world", "how", "are", "you"]
            .into_iter()
            .map(String::from)
            .collect(),
        vec![AttentionMatrix::from_rows(rows)],
    )
}

fn single_row_visualizer() -> Visualizer<MonospaceMeasurer> {
    let mut viz = Visualizer::with_config(
        MonospaceMeasurer::default(),
        VisualizerConfig {
            wrap: WrapConfig {
                enabled: false,
                max_tokens_per_line: 10,
            },
            ..VisualizerConfig::default()
        },
    );
    viz.set_analysis(analysis());
    viz
}

#[test]
fn overview_shows_the_single_strong_connection() {
    let viz = single_row_visualizer();

    assert_eq!(viz.positions().len(), 5);
    assert_eq!(viz.row_count(), 1);
    assert!(viz.positions().iter().all(|p| p.row == 0));

    assert_eq!(viz.edges().len(), 1);
    let edge = &viz.edges()[0];
    assert_eq!((edge.from, edge.to), (0, 1));
    assert_eq!(edge.weight, 0.5);
    assert_eq!(edge.role, EdgeRole::None);
    assert!(matches!(edge.path, PathSpec::Quadratic { .. }));
}

#[test]
fn focusing_token_zero_shows_outgoing_only() {
    let mut viz = single_row_visualizer();
    let t0 = Instant::now();

    viz.handle_event(PointerEvent::TokenEnter(0), t0);
    let edges = viz.edges();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].role, EdgeRole::Outgoing);
    assert!(edges.iter().all(|e| e.role != EdgeRole::Incoming));
}

#[test]
fn lock_hover_tooltip_unlock_flow() {
    let mut viz = single_row_visualizer();
    let t0 = Instant::now();

    // Lock token 0.
    let change = viz.handle_event(PointerEvent::TokenClick(0), t0);
    assert_eq!(change, Some(LockChange { locked: Some(0) }));

    // Hover over another token: locked focus must not move.
    viz.handle_event(PointerEvent::TokenEnter(3), t0);
    assert_eq!(viz.focus().locked, Some(0));
    assert_eq!(viz.edges()[0].role, EdgeRole::Outgoing);

    // Hover the path and read the tooltip detail.
    viz.handle_event(PointerEvent::PathEnter(0), t0);
    viz.handle_event(PointerEvent::Moved { x: 120.0, y: 60.0 }, t0);
    let detail = viz.hovered_edge_detail().expect("path hovered");
    assert_eq!(detail.from_text, "Hello");
    assert_eq!(detail.to_text, "world");
    assert_eq!(detail.percent, "50.0%");
    let anchor = viz.tooltip_anchor();
    assert_eq!((anchor.x, anchor.y), (120.0, 60.0));

    // Leave and re-enter within the debounce window: no flicker.
    viz.handle_event(PointerEvent::PathLeave, t0);
    viz.handle_event(PointerEvent::PathEnter(0), t0 + Duration::from_millis(30));
    assert!(!viz.tick(t0 + Duration::from_secs(1)));
    assert_eq!(viz.hovered_path_index(), Some(0));

    // Leave for good: debounce fires, hover clears.
    viz.handle_event(PointerEvent::PathLeave, t0 + Duration::from_secs(1));
    assert!(viz.tick(t0 + Duration::from_secs(1) + Duration::from_millis(50)));
    assert!(viz.hovered_edge_detail().is_none());

    // Unlock by clicking the locked token again.
    let change = viz.handle_event(PointerEvent::TokenClick(0), t0 + Duration::from_secs(2));
    assert_eq!(change, Some(LockChange { locked: None }));
    assert_eq!(viz.focus(), FocusState::default());
    assert_eq!(viz.edges()[0].role, EdgeRole::None);
}

#[test]
fn wrapping_produces_cross_row_curves() {
    let mut viz = Visualizer::new(MonospaceMeasurer::default());
    let mut rows = vec![vec![0.0; 5]; 5];
    rows[0][4] = 0.7;
    viz.set_analysis(AttentionData::new(
        ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(String::from)
            .collect(),
        vec![AttentionMatrix::from_rows(rows)],
    ));
    viz.set_wrap(WrapConfig {
        enabled: true,
        max_tokens_per_line: 2,
    });

    assert_eq!(viz.row_count(), 3);
    let edge = &viz.edges()[0];
    assert_eq!((edge.from, edge.to), (0, 4));
    assert!(matches!(edge.path, PathSpec::Cubic { .. }));
}

#[test]
fn stroke_style_derives_from_snapshot_weights() {
    let viz = single_row_visualizer();
    let style = StrokeStyle::default();
    let edge = &viz.edges()[0];
    assert_eq!(style.stroke_width(edge.weight, edge.is_hovered), 7.5);
    assert!((style.stroke_opacity(edge.weight) - 0.6).abs() < 1e-12);
}

#[cfg(feature = "serde")]
#[test]
fn analysis_payload_feeds_straight_into_the_visualizer() {
    let body = r#"{
        "tokens": ["Hello", " world"],
        "attention_layers": [[[0.0, 0.5], [0.0, 0.0]]],
        "num_layers": 1
    }"#;
    let data: AttentionData = serde_json::from_str(body).expect("payload deserializes");

    let mut viz = Visualizer::new(MonospaceMeasurer::default());
    viz.set_analysis(data);
    assert_eq!(viz.edges().len(), 1);
    assert_eq!((viz.edges()[0].from, viz.edges()[0].to), (0, 1));
}
