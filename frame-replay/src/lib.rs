#![warn(missing_docs)]
//! Experience replay for agents acting on frame-based observations.
//!
//! [`ReplayMemory`] keeps a bounded, time-ordered log of single-channel frames,
//! actions, rewards and terminal flags across episode boundaries. Training
//! batches are made of stacks of the last `history_length` frames, the action,
//! the truncated n-step discounted return and the stack `multi_step` steps
//! ahead, drawn uniformly without replacement from the positions where such a
//! window can be formed without leaving the current episode.
//!
//! ```rust
//! use frame_replay::{ReplayMemory, ReplayMemoryConfig};
//! use ndarray::Array3;
//!
//! let config = ReplayMemoryConfig::default()
//!     .capacity(100)
//!     .history_length(2)
//!     .multi_step(1)
//!     .frame_shape(4, 4);
//! let mut memory = ReplayMemory::new(&config).unwrap();
//!
//! memory.begin_episode();
//! for step in 0..5 {
//!     let obs = Array3::from_elem((2, 4, 4), 0.5f32);
//!     memory.record(Some(&obs), step % 2, 1.0).unwrap();
//! }
//! memory.record(None, 0, 0.0).unwrap();
//!
//! let batch = memory.sample_batch(2).unwrap();
//! assert_eq!(batch.states.shape(), &[2, 2, 4, 4]);
//! ```
pub mod error;
mod base;
mod frame;
mod replay_memory;
mod shared;

pub use base::{ExperienceBufferBase, ReplayBufferBase};
pub use error::ReplayMemoryError;
pub use frame::{dequantize, quantize, FrameShape};
pub use replay_memory::{
    FrameStackBatch, Payload, ReplayMemory, ReplayMemoryConfig, Transition, TransitionRef,
    ValidationIter,
};
pub use shared::SharedReplayMemory;
