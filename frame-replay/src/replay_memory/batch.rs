//! Batch of stacked frames sampled from [`ReplayMemory`](super::ReplayMemory).
use ndarray::Array4;

/// A batch of n-step transitions.
///
/// All fields are index-aligned; row `k` describes the transition anchored at
/// `ix_sample[k]`.
#[derive(Debug, Clone)]
pub struct FrameStackBatch {
    /// Stacked frames `[batch, history_length, height, width]` in `[0, 1]`,
    /// oldest frame first.
    pub states: Array4<f32>,

    /// Actions taken at the anchors.
    pub actions: Vec<i64>,

    /// Truncated n-step discounted returns.
    pub returns: Vec<f64>,

    /// Stacked frames `multi_step` steps after the anchors.
    pub next_states: Array4<f32>,

    /// `1.0` if the next state is not terminal, `0.0` otherwise.
    pub nonterminals: Vec<f32>,

    /// Logical positions of the anchors in the memory.
    pub ix_sample: Vec<usize>,
}

impl FrameStackBatch {
    /// Unpacks the data `(s_t, a_t, R_t, s_t+n, nonterminal_t+n)`.
    pub fn unpack(self) -> (Array4<f32>, Vec<i64>, Vec<f64>, Array4<f32>, Vec<f32>) {
        (
            self.states,
            self.actions,
            self.returns,
            self.next_states,
            self.nonterminals,
        )
    }

    /// Returns the number of transitions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the batch has no transitions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
