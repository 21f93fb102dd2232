//! Core interfaces of replay buffers.
mod replay_buffer;
pub use replay_buffer::{ExperienceBufferBase, ReplayBufferBase};
