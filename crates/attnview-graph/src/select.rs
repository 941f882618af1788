#![forbid(unsafe_code)]

//! Edge selection: which attention connections get drawn.
//!
//! Two modes, keyed off the focus state:
//!
//! - **Overview** (no focus): scan every ordered token pair, keep weights
//!   above the overview threshold, and emit only the global top K. The
//!   whole matrix competes for a handful of slots, so the cutoff is strict.
//! - **Focused** (one active token): emit two independent top-K lists, the
//!   focused token's strongest outgoing and incoming connections, over a
//!   looser threshold. A single row/column cannot flood the canvas, so
//!   weaker connections become visible exactly when a user inspects a
//!   token. Incoming weights are dimmed by a fixed factor to keep the
//!   outgoing direction visually dominant.
//!
//! Sorting is stable with `total_cmp`, so equal weights keep matrix scan
//! order and the output is identical across runs. Non-finite weights and
//! out-of-range indices are skipped outright.

use tracing::debug;

use crate::matrix::AttentionMatrix;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and caps for edge selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    /// Minimum weight shown in overview mode.
    pub overview_threshold: f64,
    /// Minimum weight shown in focused mode (looser than overview).
    pub focused_threshold: f64,
    /// Cap per emitted list (global in overview; per role in focused).
    pub top_limit: usize,
    /// Multiplier applied to incoming-edge weights in focused mode.
    pub incoming_dimming: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            overview_threshold: 0.02,
            focused_threshold: 0.01,
            top_limit: 5,
            incoming_dimming: 0.6,
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Direction of an edge relative to the focused token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRole {
    /// Overview edge; no token is focused.
    None,
    /// Leaves the focused token.
    Outgoing,
    /// Arrives at the focused token.
    Incoming,
}

/// A selected attention connection.
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionEdge {
    /// Source token index.
    pub from: usize,
    /// Target token index.
    pub to: usize,
    /// Weight driving stroke thickness/opacity; already dimmed for
    /// incoming edges.
    pub weight: f64,
    /// Role relative to the focused token.
    pub role: EdgeRole,
    /// True for focused-mode edges, which render emphasized.
    pub highlighted: bool,
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Select the edges to draw for the current focus.
///
/// `token_count` bounds every index; entries beyond it, and entries beyond
/// the matrix's own row/column lengths, are skipped. `focus` is the active
/// token (the locked token when present, else the hovered one), already
/// resolved by the caller.
#[must_use]
pub fn select_edges(
    matrix: &AttentionMatrix,
    token_count: usize,
    focus: Option<usize>,
    config: &SelectionConfig,
) -> Vec<AttentionEdge> {
    let edges = match focus {
        None => overview_edges(matrix, token_count, config),
        Some(active) => focused_edges(matrix, token_count, active, config),
    };
    debug!(
        mode = if focus.is_some() { "focused" } else { "overview" },
        count = edges.len(),
        "edges selected"
    );
    edges
}

fn overview_edges(
    matrix: &AttentionMatrix,
    token_count: usize,
    config: &SelectionConfig,
) -> Vec<AttentionEdge> {
    let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
    for from in 0..token_count {
        let Some(row) = matrix.row(from) else { break };
        for (to, &weight) in row.iter().enumerate().take(token_count) {
            if from != to && weight.is_finite() && weight > config.overview_threshold {
                pairs.push((from, to, weight));
            }
        }
    }

    pairs.sort_by(|a, b| b.2.total_cmp(&a.2));
    pairs.truncate(config.top_limit);

    pairs
        .into_iter()
        .map(|(from, to, weight)| AttentionEdge {
            from,
            to,
            weight,
            role: EdgeRole::None,
            highlighted: false,
        })
        .collect()
}

fn focused_edges(
    matrix: &AttentionMatrix,
    token_count: usize,
    active: usize,
    config: &SelectionConfig,
) -> Vec<AttentionEdge> {
    let Some(active_row) = matrix.row(active) else {
        return Vec::new();
    };
    if active >= token_count {
        return Vec::new();
    }

    let mut outgoing: Vec<(usize, f64)> = active_row
        .iter()
        .enumerate()
        .take(token_count)
        .filter(|&(to, &weight)| {
            to != active && weight.is_finite() && weight > config.focused_threshold
        })
        .map(|(to, &weight)| (to, weight))
        .collect();
    outgoing.sort_by(|a, b| b.1.total_cmp(&a.1));
    outgoing.truncate(config.top_limit);

    let mut incoming: Vec<(usize, f64)> = (0..token_count)
        .filter(|&from| from != active)
        .filter_map(|from| matrix.get(from, active).map(|weight| (from, weight)))
        .filter(|&(_, weight)| weight.is_finite() && weight > config.focused_threshold)
        .collect();
    incoming.sort_by(|a, b| b.1.total_cmp(&a.1));
    incoming.truncate(config.top_limit);

    let mut edges = Vec::with_capacity(outgoing.len() + incoming.len());
    edges.extend(outgoing.into_iter().map(|(to, weight)| AttentionEdge {
        from: active,
        to,
        weight,
        role: EdgeRole::Outgoing,
        highlighted: true,
    }));
    edges.extend(incoming.into_iter().map(|(from, weight)| AttentionEdge {
        from,
        to: active,
        weight: weight * config.incoming_dimming,
        role: EdgeRole::Incoming,
        highlighted: true,
    }));
    edges
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
