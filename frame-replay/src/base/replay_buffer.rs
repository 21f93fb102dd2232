//! Replay buffer interface.
//!
//! These traits separate the two roles a replay buffer plays in a training
//! loop: receiving experiences from the agent's interaction with an
//! environment, and producing batches for the optimization step.
use anyhow::Result;

/// Interface for buffers that store experiences from environments.
///
/// # Examples
///
/// ```ignore
/// struct SimpleBuffer<T> {
///     items: Vec<T>,
/// }
///
/// impl<T> ExperienceBufferBase for SimpleBuffer<T> {
///     type Item = T;
///
///     fn push(&mut self, tr: T) -> Result<()> {
///         self.items.push(tr);
///         Ok(())
///     }
///
///     fn len(&self) -> usize {
///         self.items.len()
///     }
/// }
/// ```
pub trait ExperienceBufferBase {
    /// The type of items stored in the buffer.
    type Item;

    /// Pushes a new experience into the buffer.
    fn push(&mut self, tr: Self::Item) -> Result<()>;

    /// Returns the current number of experiences in the buffer.
    fn len(&self) -> usize;
}

/// Interface for replay buffers that generate batches for training.
///
/// It is independent of [`ExperienceBufferBase`] and focuses solely on
/// construction and batch generation.
pub trait ReplayBufferBase: Sized {
    /// Configuration parameters for the replay buffer.
    type Config: Clone;

    /// The type of batch generated for training.
    type Batch;

    /// Builds a new replay buffer from the given configuration.
    ///
    /// Fails if the configuration is malformed.
    fn build(config: &Self::Config) -> Result<Self>;

    /// Constructs a batch of `size` experiences for training.
    fn batch(&mut self, size: usize) -> Result<Self::Batch>;
}
