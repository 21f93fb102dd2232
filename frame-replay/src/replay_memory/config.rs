//! Configuration of [`ReplayMemory`](super::ReplayMemory).
//!
//! The configuration is fixed at construction time. It can be written to and
//! read from YAML files so that the memory settings of an experiment can be
//! kept next to its other configuration files.
use crate::{FrameShape, ReplayMemoryError};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`ReplayMemory`](super::ReplayMemory).
///
/// # Examples
///
/// ```rust
/// use frame_replay::ReplayMemoryConfig;
///
/// let config = ReplayMemoryConfig::default()
///     .capacity(50_000)
///     .history_length(4)
///     .discount(0.99)
///     .multi_step(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ReplayMemoryConfig {
    /// Maximum number of records. When the memory is full, new records
    /// replace the oldest ones.
    pub capacity: usize,

    /// Number of consecutive frames stacked into a state.
    pub history_length: usize,

    /// Discount factor of the n-step return, in `[0, 1]`.
    pub discount: f64,

    /// Number of steps of the return and the distance to the next state.
    pub multi_step: usize,

    /// Spatial shape of the stored frames.
    pub frame_shape: FrameShape,

    /// Random seed used for sampling anchors.
    pub seed: u64,

    /// Exponent of prioritized sampling. Reserved, not used for sampling.
    pub priority_exponent: f64,

    /// Initial importance sampling weight of prioritized sampling. Reserved,
    /// not used for sampling.
    pub priority_weight: f64,
}

impl Default for ReplayMemoryConfig {
    fn default() -> Self {
        Self {
            capacity: 100_000,
            history_length: 4,
            discount: 0.99,
            multi_step: 3,
            frame_shape: FrameShape::default(),
            seed: 42,
            priority_exponent: 0.5,
            priority_weight: 0.4,
        }
    }
}

impl ReplayMemoryConfig {
    /// Sets the capacity of the memory.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the number of stacked frames.
    pub fn history_length(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }

    /// Sets the discount factor.
    pub fn discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the multi-step horizon.
    pub fn multi_step(mut self, multi_step: usize) -> Self {
        self.multi_step = multi_step;
        self
    }

    /// Sets the shape of the stored frames.
    pub fn frame_shape(mut self, height: usize, width: usize) -> Self {
        self.frame_shape = FrameShape::new(height, width);
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the reserved prioritization exponent.
    pub fn priority_exponent(mut self, priority_exponent: f64) -> Self {
        self.priority_exponent = priority_exponent;
        self
    }

    /// Sets the reserved importance sampling weight.
    pub fn priority_weight(mut self, priority_weight: f64) -> Self {
        self.priority_weight = priority_weight;
        self
    }

    /// Checks the parameters.
    ///
    /// Returns [`ReplayMemoryError::InvalidConfig`] if the capacity, history
    /// length or multi-step horizon is zero, the discount is not in `[0, 1]`,
    /// or the frame shape has no pixels.
    pub fn validate(&self) -> Result<(), ReplayMemoryError> {
        let err = |msg: String| Err(ReplayMemoryError::InvalidConfig(msg));

        if self.capacity < 1 {
            return err("capacity must be at least 1".to_string());
        }
        if self.history_length < 1 {
            return err("history_length must be at least 1".to_string());
        }
        if self.multi_step < 1 {
            return err("multi_step must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return err(format!("discount must be in [0, 1], got {}", self.discount));
        }
        if self.frame_shape.is_empty() {
            return err(format!("frame shape must not be empty, got {:?}", self.frame_shape));
        }
        Ok(())
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
