//! Replay memory shared between a producer and a consumer thread.
use crate::{FrameStackBatch, ReplayMemory, ReplayMemoryConfig, ReplayMemoryError};
use ndarray::Array3;
use std::sync::{Arc, Mutex, MutexGuard};

/// A cloneable, lock-guarded handle of a [`ReplayMemory`].
///
/// Every method holds the lock for the whole operation. In particular,
/// [`sample_batch`](Self::sample_batch) selects the anchors and assembles the
/// batch in one critical section, so records written by another thread cannot
/// evict a selected position before it is read.
#[derive(Clone)]
pub struct SharedReplayMemory {
    memory: Arc<Mutex<ReplayMemory>>,
}

impl SharedReplayMemory {
    /// Constructs a shared replay memory.
    pub fn new(config: &ReplayMemoryConfig) -> Result<Self, ReplayMemoryError> {
        Ok(ReplayMemory::new(config)?.into())
    }

    /// Locks the memory for a sequence of operations.
    pub fn lock(&self) -> Result<MutexGuard<'_, ReplayMemory>, ReplayMemoryError> {
        self.memory
            .lock()
            .map_err(|_| ReplayMemoryError::LockPoisoned)
    }

    /// See [`ReplayMemory::begin_episode`].
    pub fn begin_episode(&self) -> Result<(), ReplayMemoryError> {
        self.lock()?.begin_episode();
        Ok(())
    }

    /// See [`ReplayMemory::record`].
    pub fn record(
        &self,
        obs: Option<&Array3<f32>>,
        action: i64,
        reward: f64,
    ) -> Result<(), ReplayMemoryError> {
        self.lock()?.record(obs, action, reward)
    }

    /// See [`ReplayMemory::sample_batch`].
    pub fn sample_batch(&self, batch_size: usize) -> Result<FrameStackBatch, ReplayMemoryError> {
        self.lock()?.sample_batch(batch_size)
    }

    /// See [`ReplayMemory::len`].
    pub fn len(&self) -> Result<usize, ReplayMemoryError> {
        Ok(self.lock()?.len())
    }

    /// See [`ReplayMemory::num_valid_anchors`].
    pub fn num_valid_anchors(&self) -> Result<usize, ReplayMemoryError> {
        Ok(self.lock()?.num_valid_anchors())
    }
}

impl From<ReplayMemory> for SharedReplayMemory {
    fn from(memory: ReplayMemory) -> Self {
        Self {
            memory: Arc::new(Mutex::new(memory)),
        }
    }
}
