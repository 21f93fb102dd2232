//! Per-record metadata and the views handed out of the memory.
use ndarray::Array3;

/// Action and reward of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    /// A record written by [`record`](super::ReplayMemory::record).
    ///
    /// `reward` is the reward received on arriving at this record, not the
    /// reward for taking `action` here.
    Live {
        /// Action identifier.
        action: i64,
        /// Reward.
        reward: f64,
    },

    /// A blank record written by
    /// [`begin_episode`](super::ReplayMemory::begin_episode).
    Blank,
}

impl Payload {
    /// Returns the action of a live record.
    pub fn action(&self) -> Option<i64> {
        match self {
            Self::Live { action, .. } => Some(*action),
            Self::Blank => None,
        }
    }

    /// Returns the reward of a live record.
    pub fn reward(&self) -> Option<f64> {
        match self {
            Self::Live { reward, .. } => Some(*reward),
            Self::Blank => None,
        }
    }
}

/// Metadata of one slot in the ring.
#[derive(Debug, Clone, Copy)]
pub(super) struct Slot {
    pub timestep: i32,
    pub nonterminal: bool,
    pub payload: Payload,
}

impl Slot {
    pub fn blank(timestep: i32) -> Self {
        Self {
            timestep,
            nonterminal: true,
            payload: Payload::Blank,
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::blank(-1)
    }
}

/// Read-only view of a stored record.
#[derive(Debug, Clone, Copy)]
pub struct TransitionRef<'a> {
    /// Quantized frame, row-major.
    pub frame: &'a [u8],

    /// Action and reward.
    pub payload: Payload,

    /// Episode timestep. Negative for blank records.
    pub timestep: i32,

    /// `false` for the placeholder of a terminal observation.
    pub nonterminal: bool,
}

/// An experience pushed through
/// [`ExperienceBufferBase`](crate::ExperienceBufferBase).
///
/// `obs` is `None` when the episode terminated.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Frame history `[channels, height, width]` in `[0, 1]`.
    pub obs: Option<Array3<f32>>,

    /// Action identifier.
    pub act: i64,

    /// Reward.
    pub reward: f64,
}
