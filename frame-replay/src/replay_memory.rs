//! Frame-stacking replay memory with n-step returns.
mod base;
mod batch;
mod config;
mod iter;
mod slot;
pub use base::ReplayMemory;
pub use batch::FrameStackBatch;
pub use config::ReplayMemoryConfig;
pub use iter::ValidationIter;
pub use slot::{Payload, Transition, TransitionRef};
