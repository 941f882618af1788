#![forbid(unsafe_code)]

//! The visualization orchestrator.
//!
//! [`Visualizer`] owns one analysis at a time: the token list (raw and
//! sanitized), the per-layer attention matrices, the current layout, the
//! selected edge list, and the interaction state. Every trigger (new data,
//! wrap change, layer change, pointer event, timer tick) recomputes the
//! affected snapshots synchronously; renderers read the accessors between
//! triggers and treat the returned slices as immutable snapshots.
//!
//! Replacing the analysis discards positions, edges, and interaction state
//! unconditionally. The only in-place mutation between recomputations is
//! the per-edge hover flag.

use std::time::{Duration, Instant};
use tracing::debug;

use attnview_core::geometry::{CanvasSize, Point};
use attnview_core::{PointerEvent, Token};
use attnview_graph::curve::{CurveConfig, PathSpec, curve_for};
use attnview_graph::matrix::{AttentionData, DataError};
use attnview_graph::select::{EdgeRole, SelectionConfig, select_edges};
use attnview_layout::{LayoutConfig, TokenLayout, TokenPosition, WrapConfig, layout_tokens};
use attnview_text::{TextMeasurer, display_text};

use crate::interaction::{FocusState, InteractionState, LockChange};
use crate::tooltip::{TooltipConfig, clamp_anchor, format_weight_percent};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// All numeric knobs for one visualizer instance.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerConfig {
    pub layout: LayoutConfig,
    pub wrap: WrapConfig,
    pub selection: SelectionConfig,
    pub curve: CurveConfig,
    pub tooltip: TooltipConfig,
    /// Debounce delay for path-hover exit.
    pub hover_end_delay: Duration,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            wrap: WrapConfig::default(),
            selection: SelectionConfig::default(),
            curve: CurveConfig::default(),
            tooltip: TooltipConfig::default(),
            hover_end_delay: Duration::from_millis(50),
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One drawable edge: selection result plus curve geometry and hover flag.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEdge {
    pub from: usize,
    pub to: usize,
    /// Weight after any incoming dimming; drives stroke width/opacity.
    pub weight: f64,
    pub role: EdgeRole,
    /// True for focused-mode edges.
    pub highlighted: bool,
    /// True for the single actively hovered path, if any.
    pub is_hovered: bool,
    pub path: PathSpec,
}

/// Read-only projection of the hovered edge for tooltip rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct HoveredEdgeDetail<'a> {
    /// Display text of the source token.
    pub from_text: &'a str,
    /// Display text of the target token.
    pub to_text: &'a str,
    /// The edge's (possibly dimmed) weight.
    pub weight: f64,
    /// Weight formatted as a percentage, e.g. `"50.0%"`.
    pub percent: String,
}

// ---------------------------------------------------------------------------
// Visualizer
// ---------------------------------------------------------------------------

/// Stateful attention-graph engine for a single analysis at a time.
#[derive(Debug)]
pub struct Visualizer<M> {
    config: VisualizerConfig,
    measurer: M,
    tokens: Vec<Token>,
    data: AttentionData,
    layer: usize,
    layout: TokenLayout,
    edges: Vec<RenderedEdge>,
    interaction: InteractionState,
    tooltip_anchor: Point,
}

impl<M: TextMeasurer> Visualizer<M> {
    #[must_use]
    pub fn new(measurer: M) -> Self {
        Self::with_config(measurer, VisualizerConfig::default())
    }

    #[must_use]
    pub fn with_config(measurer: M, config: VisualizerConfig) -> Self {
        let interaction = InteractionState::new(config.hover_end_delay);
        Self {
            config,
            measurer,
            tokens: Vec::new(),
            data: AttentionData::default(),
            layer: 0,
            layout: TokenLayout::default(),
            edges: Vec::new(),
            interaction,
            tooltip_anchor: Point::ZERO,
        }
    }

    // --- Inputs -----------------------------------------------------------

    /// Replace the analysis. Positions, edges, focus, and path hover from
    /// the previous analysis are discarded unconditionally.
    pub fn set_analysis(&mut self, data: AttentionData) {
        self.tokens = data
            .tokens
            .iter()
            .enumerate()
            .map(|(index, raw)| Token::new(index, raw.clone(), display_text(raw)))
            .collect();
        self.data = data;
        if self.layer >= self.data.num_layers() {
            self.layer = 0;
        }
        self.interaction.reset();
        debug!(
            tokens = self.tokens.len(),
            layers = self.data.num_layers(),
            "analysis replaced"
        );
        self.recompute_layout();
        self.recompute_edges();
    }

    /// Change the wrap configuration; recomputes layout and edge geometry.
    pub fn set_wrap(&mut self, wrap: WrapConfig) {
        if self.config.wrap == wrap {
            return;
        }
        self.config.wrap = wrap;
        self.recompute_layout();
        self.recompute_edges();
    }

    /// Select which attention layer is rendered.
    pub fn select_layer(&mut self, layer: usize) -> Result<(), DataError> {
        if layer >= self.data.num_layers() {
            return Err(DataError::LayerOutOfRange {
                index: layer,
                num_layers: self.data.num_layers(),
            });
        }
        if self.layer != layer {
            self.layer = layer;
            self.recompute_edges();
        }
        Ok(())
    }

    /// Feed one pointer event. Returns the lock-changed notification when a
    /// click changed the lock assignment.
    pub fn handle_event(&mut self, event: PointerEvent, now: Instant) -> Option<LockChange> {
        match event {
            PointerEvent::TokenEnter(index) => {
                if self.interaction.pointer_enter_token(index) {
                    self.recompute_edges();
                }
                None
            }
            PointerEvent::TokenLeave => {
                if self.interaction.pointer_leave_tokens() {
                    self.recompute_edges();
                }
                None
            }
            PointerEvent::TokenClick(index) => {
                let change = self.interaction.click_token(index);
                self.recompute_edges();
                Some(change)
            }
            PointerEvent::PathEnter(index) => {
                if index < self.edges.len()
                    && let Some(change) = self.interaction.enter_path(index)
                {
                    if let Some(previous) = change.previous
                        && let Some(edge) = self.edges.get_mut(previous)
                    {
                        edge.is_hovered = false;
                    }
                    self.edges[change.current].is_hovered = true;
                }
                None
            }
            PointerEvent::PathLeave => {
                self.interaction.leave_path(now);
                None
            }
            PointerEvent::Moved { x, y } => {
                self.tooltip_anchor =
                    clamp_anchor(Point::new(x, y), self.layout.canvas, &self.config.tooltip);
                None
            }
        }
    }

    /// Advance time: fires the hover-exit debounce when due. Returns true
    /// when the hovered path was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(previous) = self.interaction.tick(now) {
            if let Some(edge) = self.edges.get_mut(previous) {
                edge.is_hovered = false;
            }
            return true;
        }
        false
    }

    // --- Snapshots --------------------------------------------------------

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn positions(&self) -> &[TokenPosition] {
        &self.layout.positions
    }

    #[must_use]
    pub fn edges(&self) -> &[RenderedEdge] {
        &self.edges
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.layout.canvas
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.layout.row_count
    }

    #[must_use]
    pub fn focus(&self) -> FocusState {
        self.interaction.focus()
    }

    #[must_use]
    pub fn selected_layer(&self) -> usize {
        self.layer
    }

    #[must_use]
    pub fn hovered_path_index(&self) -> Option<usize> {
        self.interaction.hovered_path()
    }

    /// Clamped anchor for tooltip placement, from the last pointer move.
    #[must_use]
    pub fn tooltip_anchor(&self) -> Point {
        self.tooltip_anchor
    }

    /// Detail of the hovered edge for the tooltip, if a path is hovered.
    #[must_use]
    pub fn hovered_edge_detail(&self) -> Option<HoveredEdgeDetail<'_>> {
        let index = self.interaction.hovered_path()?;
        let edge = self.edges.get(index)?;
        let text = |i: usize| self.tokens.get(i).map_or("", |t| t.display.as_str());
        Some(HoveredEdgeDetail {
            from_text: text(edge.from),
            to_text: text(edge.to),
            weight: edge.weight,
            percent: format_weight_percent(edge.weight),
        })
    }

    #[must_use]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    // --- Recomputation ----------------------------------------------------

    fn recompute_layout(&mut self) {
        self.layout = layout_tokens(
            self.tokens.iter().map(|t| t.display.as_str()),
            &self.config.wrap,
            &self.config.layout,
            &mut self.measurer,
        );
    }

    fn recompute_edges(&mut self) {
        self.interaction.clear_path_hover();
        let selected = match self.data.layer(self.layer) {
            Some(matrix) if !self.layout.positions.is_empty() => select_edges(
                matrix,
                self.tokens.len(),
                self.interaction.active(),
                &self.config.selection,
            ),
            _ => Vec::new(),
        };
        self.edges = selected
            .into_iter()
            .map(|edge| RenderedEdge {
                path: curve_for(
                    &self.layout.positions,
                    edge.from,
                    edge.to,
                    &self.config.curve,
                ),
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
                role: edge.role,
                highlighted: edge.highlighted,
                is_hovered: false,
            })
            .collect();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
