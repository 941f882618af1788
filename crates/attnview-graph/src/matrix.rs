#![forbid(unsafe_code)]

//! Attention weight matrices.
//!
//! The analysis backend reports, per model layer, a square matrix of
//! pairwise attention weights indexed by token order. The engine renders
//! exactly one selected layer at a time.
//!
//! Weights are nominally in [0, 1] but pass through unvalidated: no
//! clamping happens here, and a matrix whose dimensions disagree with the
//! token count is accepted as-is. Every consumer bounds-checks its own
//! accesses instead; [`AttentionData::validate`] exists for callers that
//! want an explicit check at the boundary.

use std::fmt;

/// A square matrix of pairwise attention weights for one layer.
///
/// `rows[from][to]` is the weight with which token `from` attends to token
/// `to`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AttentionMatrix {
    rows: Vec<Vec<f64>>,
}

impl AttentionMatrix {
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Number of rows (the `from` dimension).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row for token `from`, if in range.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[f64]> {
        self.rows.get(from).map(Vec::as_slice)
    }

    /// The weight at (`from`, `to`), if both indices are in range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// True if every row and column length equals `n`.
    #[must_use]
    pub fn is_square_for(&self, n: usize) -> bool {
        self.rows.len() == n && self.rows.iter().all(|row| row.len() == n)
    }
}

impl From<Vec<Vec<f64>>> for AttentionMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Self::from_rows(rows)
    }
}

/// One analysis result: tokens plus per-layer attention matrices.
///
/// Field names mirror the backend payload, so with the `serde` feature the
/// response body deserializes directly into this type.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttentionData {
    /// Analyzed tokens in sequence order.
    pub tokens: Vec<String>,
    /// One square matrix per model layer, averaged across heads upstream.
    #[cfg_attr(feature = "serde", serde(rename = "attention_layers"))]
    pub layers: Vec<AttentionMatrix>,
}

impl AttentionData {
    #[must_use]
    pub fn new(tokens: Vec<String>, layers: Vec<AttentionMatrix>) -> Self {
        Self { tokens, layers }
    }

    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// The matrix for `layer`, if in range.
    #[must_use]
    pub fn layer(&self, layer: usize) -> Option<&AttentionMatrix> {
        self.layers.get(layer)
    }

    /// Explicit boundary check: at least one layer, every layer square
    /// against the token count.
    ///
    /// The engine itself never requires this; selection degrades gracefully
    /// on mismatched data. Callers that prefer failing fast at the input
    /// boundary can run it before handing data over.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.layers.is_empty() {
            return Err(DataError::NoLayers);
        }
        let n = self.tokens.len();
        for (index, layer) in self.layers.iter().enumerate() {
            if !layer.is_square_for(n) {
                return Err(DataError::NotSquare {
                    layer: index,
                    expected: n,
                });
            }
        }
        Ok(())
    }
}

/// Errors surfaced by explicit analysis-data checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The analysis carried no attention layers.
    NoLayers,
    /// A layer's matrix is not square against the token count.
    NotSquare { layer: usize, expected: usize },
    /// A selected layer index is out of range.
    LayerOutOfRange { index: usize, num_layers: usize },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayers => write!(f, "analysis carries no attention layers"),
            Self::NotSquare { layer, expected } => write!(
                f,
                "attention layer {layer} is not {expected}x{expected} for the token count"
            ),
            Self::LayerOutOfRange { index, num_layers } => {
                write!(f, "layer {index} out of range ({num_layers} layers)")
            }
        }
    }
}

impl std::error::Error for DataError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: usize, fill: f64) -> AttentionMatrix {
        AttentionMatrix::from_rows(vec![vec![fill; n]; n])
    }

    // --- Matrix access tests ---

    #[test]
    fn get_in_range() {
        let m = AttentionMatrix::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
        assert_eq!(m.get(0, 1), Some(0.2));
        assert_eq!(m.get(1, 0), Some(0.3));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let m = square(2, 0.5);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
        assert!(AttentionMatrix::default().get(0, 0).is_none());
    }

    #[test]
    fn row_access() {
        let m = AttentionMatrix::from_rows(vec![vec![0.1, 0.2]]);
        assert_eq!(m.row(0), Some(&[0.1, 0.2][..]));
        assert!(m.row(1).is_none());
    }

    #[test]
    fn squareness_check() {
        assert!(square(3, 0.0).is_square_for(3));
        assert!(!square(3, 0.0).is_square_for(2));
        let ragged = AttentionMatrix::from_rows(vec![vec![0.0, 0.0], vec![0.0]]);
        assert!(!ragged.is_square_for(2));
    }

    // --- AttentionData tests ---

    #[test]
    fn layer_selection() {
        let data = AttentionData::new(
            vec!["a".into(), "b".into()],
            vec![square(2, 0.1), square(2, 0.2)],
        );
        assert_eq!(data.num_layers(), 2);
        assert_eq!(data.layer(1).and_then(|m| m.get(0, 0)), Some(0.2));
        assert!(data.layer(2).is_none());
    }

    #[test]
    fn validate_accepts_square_layers() {
        let data = AttentionData::new(vec!["a".into(), "b".into()], vec![square(2, 0.0)]);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_mismatched() {
        let no_layers = AttentionData::new(vec!["a".into()], vec![]);
        assert_eq!(no_layers.validate(), Err(DataError::NoLayers));

        let mismatched = AttentionData::new(vec!["a".into(), "b".into()], vec![square(3, 0.0)]);
        assert_eq!(
            mismatched.validate(),
            Err(DataError::NotSquare {
                layer: 0,
                expected: 2
            })
        );
    }

    #[test]
    fn error_display_is_descriptive() {
        let err = DataError::LayerOutOfRange {
            index: 9,
            num_layers: 2,
        };
        assert_eq!(err.to_string(), "layer 9 out of range (2 layers)");
    }
}
