//! Ring storage, anchor selection and batch assembly.
use super::{
    slot::{Payload, Slot, Transition, TransitionRef},
    FrameStackBatch, ReplayMemoryConfig, ValidationIter,
};
use crate::{
    frame::{dequantize, quantize},
    ExperienceBufferBase, ReplayBufferBase, ReplayMemoryError,
};
use anyhow::Result;
use log::{info, trace};
use ndarray::{Array3, Array4, ArrayViewMut3, Axis};
use rand::{rngs::StdRng, SeedableRng};

/// Replay memory of single-channel frames with frame stacking and n-step
/// returns.
///
/// Records live in a fixed-capacity ring: a frame arena of
/// `capacity * height * width` bytes and one [`Payload`], timestep and
/// nonterminal flag per slot, all advanced by a single write cursor. Once the
/// ring is full every write evicts the oldest record.
///
/// Positions are addressed logically, `0` being the oldest live record.
/// A position `i` is a valid *anchor* for a horizon `k` when the frames
/// `i - history_length + 1 ..= i + k` exist and none of them is a blank
/// record seeded by [`begin_episode`](Self::begin_episode).
///
/// The memory is single-threaded; see
/// [`SharedReplayMemory`](crate::SharedReplayMemory) for a lock-guarded handle.
pub struct ReplayMemory {
    config: ReplayMemoryConfig,

    /// Number of pixels in a frame.
    frame_len: usize,

    /// Quantized frames, `frame_len` bytes per slot.
    frames: Vec<u8>,

    slots: Vec<Slot>,

    /// Physical index of the next write.
    i: usize,

    /// Number of live records.
    size: usize,

    /// Episode timestep of the next record.
    t: i32,

    rng: StdRng,
}

impl ReplayMemory {
    /// Constructs a replay memory.
    ///
    /// Fails with [`ReplayMemoryError::InvalidConfig`] if the configuration is
    /// malformed.
    pub fn new(config: &ReplayMemoryConfig) -> Result<Self, ReplayMemoryError> {
        config.validate()?;
        let capacity = config.capacity;
        let frame_len = config.frame_shape.len();
        info!(
            "Construct replay memory with capacity = {}, history_length = {}, multi_step = {}",
            capacity, config.history_length, config.multi_step
        );

        Ok(Self {
            config: config.clone(),
            frame_len,
            frames: vec![0; capacity * frame_len],
            slots: vec![Slot::default(); capacity],
            i: 0,
            size: 0,
            t: 0,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ReplayMemoryConfig {
        &self.config
    }

    /// Maximum number of records.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Episode timestep that the next [`record`](Self::record) will store.
    pub fn timestep(&self) -> i32 {
        self.t
    }

    /// Removes all records and resets the episode timestep.
    pub fn clear(&mut self) {
        info!("Clear replay memory ({} records)", self.size);
        self.i = 0;
        self.size = 0;
        self.t = 0;
    }

    /// Prepares the history of a new episode.
    ///
    /// Resets the episode timestep and writes `history_length - 1` blank
    /// records with timesteps `-(history_length - 1) ..= -1`, so that the first
    /// states of the episode are stacked on zero frames. May evict the oldest
    /// records.
    pub fn begin_episode(&mut self) {
        self.t = 0;
        let h = self.config.history_length as i32;
        for timestep in (1 - h)..0 {
            self.push_slot(Slot::blank(timestep)).fill(0);
        }
        trace!("ReplayMemory::begin_episode(): {} blank records", h - 1);
    }

    /// Records an observation, the action and the reward at the current
    /// episode timestep, then advances the timestep.
    ///
    /// `obs` is a frame history `[channels, height, width]` in `[0, 1]`; only
    /// its last channel is stored, discretized to 8 bits (see
    /// [`quantize`](crate::quantize), the conversion is lossy). `None` marks
    /// the end of the episode: a zero frame is stored and flagged as terminal.
    ///
    /// `reward` is stored with the record it leads to. May evict the oldest
    /// record.
    pub fn record(
        &mut self,
        obs: Option<&Array3<f32>>,
        action: i64,
        reward: f64,
    ) -> Result<(), ReplayMemoryError> {
        let frame = match obs {
            Some(obs) => {
                let (c, h, w) = obs.dim();
                let shape = self.config.frame_shape;
                if c == 0 || (h, w) != (shape.height, shape.width) {
                    return Err(ReplayMemoryError::FrameShapeMismatch {
                        expected: (shape.height, shape.width),
                        found: (h, w),
                    });
                }
                Some(obs.index_axis(Axis(0), c - 1))
            }
            None => None,
        };

        let slot = Slot {
            timestep: self.t,
            nonterminal: frame.is_some(),
            payload: Payload::Live { action, reward },
        };
        let dst = self.push_slot(slot);
        match frame {
            Some(frame) => dst
                .iter_mut()
                .zip(frame.iter())
                .for_each(|(d, &v)| *d = quantize(v)),
            None => dst.fill(0),
        }
        trace!(
            "ReplayMemory::record(): t = {}, terminal = {}",
            self.t,
            obs.is_none()
        );
        self.t += 1;

        Ok(())
    }

    /// Number of anchors [`sample_batch`](Self::sample_batch) can currently
    /// draw from.
    pub fn num_valid_anchors(&self) -> usize {
        self.anchors(self.config.multi_step).len()
    }

    /// Samples `batch_size` distinct anchors uniformly at random and builds a
    /// batch of n-step transitions.
    ///
    /// For an anchor `i` with history length `H` and horizon `n`:
    /// * the state stacks frames `i-H+1 ..= i`, the next state frames
    ///   `i-H+1+n ..= i+n`;
    /// * the return is `r_i + γ r_i+1 + ... + γ^(n-1) r_i+n-1`, accumulated
    ///   from left to right;
    /// * the nonterminal mask is the flag of record `i+n`.
    ///
    /// Fails with [`ReplayMemoryError::InsufficientValidSamples`] if fewer than
    /// `batch_size` anchors exist.
    pub fn sample_batch(&mut self, batch_size: usize) -> Result<FrameStackBatch, ReplayMemoryError> {
        let n = self.config.multi_step;
        let anchors = self.anchors(n);
        if batch_size > anchors.len() {
            return Err(ReplayMemoryError::InsufficientValidSamples {
                requested: batch_size,
                available: anchors.len(),
            });
        }
        let ixs = rand::seq::index::sample(&mut self.rng, anchors.len(), batch_size)
            .into_iter()
            .map(|k| anchors[k])
            .collect::<Vec<_>>();
        trace!(
            "ReplayMemory::sample_batch(): {} of {} anchors",
            batch_size,
            anchors.len()
        );

        let shape = self.config.frame_shape;
        let dim = (batch_size, self.config.history_length, shape.height, shape.width);
        let mut states = Array4::<f32>::zeros(dim);
        let mut next_states = Array4::<f32>::zeros(dim);
        for (k, &ix) in ixs.iter().enumerate() {
            self.fill_stack(states.index_axis_mut(Axis(0), k), ix);
            self.fill_stack(next_states.index_axis_mut(Axis(0), k), ix + n);
        }

        let actions = ixs.iter().map(|&ix| self.live(ix).0).collect();
        let returns = ixs.iter().map(|&ix| self.n_step_return(ix)).collect();
        let nonterminals = ixs
            .iter()
            .map(|&ix| if self.slot(ix + n).nonterminal { 1.0 } else { 0.0 })
            .collect();

        Ok(FrameStackBatch {
            states,
            actions,
            returns,
            next_states,
            nonterminals,
            ix_sample: ixs,
        })
    }

    /// Returns an iterator over the stacked states of all anchors with a
    /// one-step horizon, in ascending order.
    ///
    /// The anchors are computed when this method is called; call it again to
    /// restart from the current contents. The iterator borrows the memory, so
    /// records cannot be added while it is alive.
    pub fn validation_sequence(&self) -> ValidationIter<'_> {
        ValidationIter::new(self, self.anchors(1))
    }

    /// Returns the record at logical position `p`, `0` being the oldest.
    pub fn transition(&self, p: usize) -> Option<TransitionRef<'_>> {
        if p >= self.size {
            return None;
        }
        let slot = self.slot(p);
        Some(TransitionRef {
            frame: self.frame(p),
            payload: slot.payload,
            timestep: slot.timestep,
            nonterminal: slot.nonterminal,
        })
    }

    /// Stacks the frames of the history window ending at `anchor`.
    pub(super) fn stack(&self, anchor: usize) -> Array3<f32> {
        let shape = self.config.frame_shape;
        let mut state = Array3::zeros((self.config.history_length, shape.height, shape.width));
        self.fill_stack(state.view_mut(), anchor);
        state
    }

    /// Writes a slot at the cursor, advances the cursor and returns the frame
    /// storage of the slot.
    fn push_slot(&mut self, slot: Slot) -> &mut [u8] {
        let j = self.i;
        self.slots[j] = slot;
        self.i = (self.i + 1) % self.config.capacity;
        if self.size < self.config.capacity {
            self.size += 1;
        }
        &mut self.frames[j * self.frame_len..(j + 1) * self.frame_len]
    }

    /// Physical index of logical position `p`.
    #[inline]
    fn physical(&self, p: usize) -> usize {
        let capacity = self.config.capacity;
        let head = (self.i + capacity - self.size) % capacity;
        (head + p) % capacity
    }

    #[inline]
    fn slot(&self, p: usize) -> &Slot {
        &self.slots[self.physical(p)]
    }

    #[inline]
    fn frame(&self, p: usize) -> &[u8] {
        let j = self.physical(p);
        &self.frames[j * self.frame_len..(j + 1) * self.frame_len]
    }

    /// Action and reward of a record inside an anchor window.
    fn live(&self, p: usize) -> (i64, f64) {
        match self.slot(p).payload {
            Payload::Live { action, reward } => (action, reward),
            // Anchor windows only span non-negative timesteps.
            Payload::Blank => unreachable!("blank record at position {} of an anchor window", p),
        }
    }

    fn n_step_return(&self, anchor: usize) -> f64 {
        let discount = self.config.discount;
        let mut ret = self.live(anchor).1;
        for k in 1..self.config.multi_step {
            ret = ret + discount.powf(k as f64) * self.live(anchor + k).1;
        }
        ret
    }

    fn fill_stack(&self, mut dst: ArrayViewMut3<f32>, anchor: usize) {
        let h = self.config.history_length;
        for (k, mut plane) in dst.outer_iter_mut().enumerate() {
            let src = self.frame(anchor + 1 + k - h);
            plane
                .iter_mut()
                .zip(src.iter())
                .for_each(|(d, &s)| *d = dequantize(s));
        }
    }

    /// Logical positions that are valid anchors for the horizon `k`.
    ///
    /// An anchor `i` needs the `history_length + k` records
    /// `i - history_length + 1 ..= i + k` to have non-negative timesteps.
    /// Tracking the length of the run of such records ending at each position
    /// finds all of them in one pass.
    fn anchors(&self, k: usize) -> Vec<usize> {
        let window = self.config.history_length + k;
        let mut anchors = Vec::with_capacity(self.size.saturating_sub(window - 1));
        let mut run = 0;
        for p in 0..self.size {
            if self.slot(p).timestep >= 0 {
                run += 1;
            } else {
                run = 0;
            }
            if run >= window {
                anchors.push(p - k);
            }
        }
        anchors
    }
}

impl ExperienceBufferBase for ReplayMemory {
    type Item = Transition;

    fn push(&mut self, tr: Self::Item) -> Result<()> {
        self.record(tr.obs.as_ref(), tr.act, tr.reward)?;
        Ok(())
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl ReplayBufferBase for ReplayMemory {
    type Config = ReplayMemoryConfig;
    type Batch = FrameStackBatch;

    fn build(config: &Self::Config) -> Result<Self> {
        Ok(Self::new(config)?)
    }

    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        Ok(self.sample_batch(size)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config() -> ReplayMemoryConfig {
        ReplayMemoryConfig::default().frame_shape(2, 2)
    }

    /// Two-channel history whose last channel is filled with `v`.
    fn obs(v: f32) -> Array3<f32> {
        let mut obs = Array3::from_elem((2, 2, 2), 1.0 - v);
        obs.index_axis_mut(Axis(0), 1).fill(v);
        obs
    }

    fn plane(v: f32) -> Vec<f32> {
        vec![dequantize(quantize(v)); 4]
    }

    fn plane_of(stack: &Array3<f32>, k: usize) -> Vec<f32> {
        stack.index_axis(Axis(0), k).iter().cloned().collect()
    }

    #[test]
    fn test_capacity_and_fifo_eviction() {
        let mut memory = ReplayMemory::new(&config().capacity(5).history_length(1)).unwrap();
        for a in 0..8 {
            memory.record(Some(&obs(0.5)), a, a as f64).unwrap();
            assert!(memory.len() <= 5);
        }
        assert_eq!(memory.len(), 5);
        let actions = (0..5)
            .map(|p| memory.transition(p).unwrap().payload.action().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(actions, vec![3, 4, 5, 6, 7]);
        assert!(memory.transition(5).is_none());
    }

    #[test]
    fn test_begin_episode_seeds_blank_history() {
        let mut memory = ReplayMemory::new(&config().history_length(4)).unwrap();
        memory.record(Some(&obs(0.7)), 1, 1.0).unwrap();
        memory.begin_episode();

        assert_eq!(memory.len(), 4);
        assert_eq!(memory.timestep(), 0);
        for (p, timestep) in (1..4).zip(-3..0) {
            let tr = memory.transition(p).unwrap();
            assert_eq!(tr.timestep, timestep);
            assert_eq!(tr.payload, Payload::Blank);
            assert!(tr.nonterminal);
            assert!(tr.frame.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_timesteps_increase_within_episode() {
        let mut memory = ReplayMemory::new(&config().history_length(3)).unwrap();
        for _ in 0..2 {
            memory.begin_episode();
            for _ in 0..4 {
                memory.record(Some(&obs(0.1)), 0, 0.0).unwrap();
            }
            memory.record(None, 0, 0.0).unwrap();
        }
        let timesteps = (0..memory.len())
            .map(|p| memory.transition(p).unwrap().timestep)
            .collect::<Vec<_>>();
        let episode = vec![-2, -1, 0, 1, 2, 3, 4];
        assert_eq!(timesteps, [episode.clone(), episode].concat());
    }

    #[test]
    fn test_record_stores_last_channel() {
        let mut memory = ReplayMemory::new(&config()).unwrap();
        memory.record(Some(&obs(0.25)), 0, 0.0).unwrap();
        let tr = memory.transition(0).unwrap();
        assert!(tr.frame.iter().all(|&b| b == quantize(0.25)));
        assert!(tr.nonterminal);

        memory.record(None, 0, 0.0).unwrap();
        let tr = memory.transition(1).unwrap();
        assert!(tr.frame.iter().all(|&b| b == 0));
        assert!(!tr.nonterminal);
        assert_eq!(tr.payload, Payload::Live { action: 0, reward: 0.0 });
    }

    #[test]
    fn test_record_rejects_frame_shape_mismatch() {
        let mut memory = ReplayMemory::new(&config()).unwrap();
        let err = memory
            .record(Some(&Array3::zeros((1, 3, 2))), 0, 0.0)
            .unwrap_err();
        assert_eq!(
            err,
            ReplayMemoryError::FrameShapeMismatch {
                expected: (2, 2),
                found: (3, 2)
            }
        );
        assert!(memory.record(Some(&Array3::zeros((0, 2, 2))), 0, 0.0).is_err());
        assert!(memory.is_empty());
        assert_eq!(memory.timestep(), 0);
    }

    #[test]
    fn test_n_step_return() {
        let config = config().history_length(1).multi_step(3).discount(0.99);
        let mut memory = ReplayMemory::new(&config).unwrap();
        memory.begin_episode();
        for &r in [1.0, 0.0, 2.0, 5.0].iter() {
            memory.record(Some(&obs(0.5)), 0, r).unwrap();
        }
        assert_eq!(memory.anchors(3), vec![0]);

        let batch = memory.sample_batch(1).unwrap();
        let expected = 1.0 + 0.99f64.powf(1.0) * 0.0 + 0.99f64.powf(2.0) * 2.0;
        assert_eq!(batch.returns, vec![expected]);
        assert!((batch.returns[0] - (1.0 + 0.99 * 0.0 + 0.99 * 0.99 * 2.0)).abs() < 1e-12);
        assert_eq!(batch.nonterminals, vec![1.0]);
    }

    #[test]
    fn test_insufficient_valid_samples() {
        let mut memory = ReplayMemory::new(&config().history_length(2).multi_step(1)).unwrap();
        assert_eq!(
            memory.sample_batch(1).unwrap_err(),
            ReplayMemoryError::InsufficientValidSamples {
                requested: 1,
                available: 0
            }
        );

        memory.begin_episode();
        for _ in 0..4 {
            memory.record(Some(&obs(0.5)), 0, 0.0).unwrap();
        }
        assert_eq!(memory.num_valid_anchors(), 2);
        assert_eq!(
            memory.sample_batch(3).unwrap_err(),
            ReplayMemoryError::InsufficientValidSamples {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(memory.sample_batch(2).unwrap().len(), 2);
    }

    #[test]
    fn test_sampling_without_replacement() {
        let config = config().capacity(64).history_length(3).multi_step(2);
        let mut memory = ReplayMemory::new(&config).unwrap();
        for _ in 0..10 {
            memory.begin_episode();
            for a in 0..7 {
                memory.record(Some(&obs(0.5)), a, 1.0).unwrap();
            }
            memory.record(None, 0, 0.0).unwrap();
        }
        let anchors = memory.anchors(2);
        let valid = anchors.iter().cloned().collect::<HashSet<_>>();

        for _ in 0..20 {
            let batch = memory.sample_batch(10).unwrap();
            let ixs = batch.ix_sample.iter().cloned().collect::<HashSet<_>>();
            assert_eq!(ixs.len(), 10);
            assert!(ixs.is_subset(&valid));
        }

        let mut ixs = memory.sample_batch(anchors.len()).unwrap().ix_sample;
        ixs.sort_unstable();
        assert_eq!(ixs, anchors);
    }

    #[test]
    fn test_anchor_windows_never_contain_blanks() {
        let config = config().capacity(50).history_length(4).multi_step(3);
        let mut memory = ReplayMemory::new(&config).unwrap();
        // Episode lengths shorter and longer than the windows, with wrap-around.
        for &len in [1usize, 9, 2, 5, 0, 12, 3, 7].iter() {
            memory.begin_episode();
            for _ in 0..len {
                memory.record(Some(&obs(0.3)), 1, 1.0).unwrap();
            }
            memory.record(None, 2, 0.0).unwrap();
        }

        for k in 1..=3 {
            for i in memory.anchors(k) {
                for p in (i + 1 - 4)..=(i + k) {
                    assert!(memory.transition(p).unwrap().timestep >= 0);
                }
            }
        }
        // Brute force over all positions.
        let expected = (3..memory.len().saturating_sub(3))
            .filter(|&i| ((i - 3)..=(i + 3)).all(|p| memory.transition(p).unwrap().timestep >= 0))
            .collect::<Vec<_>>();
        assert_eq!(memory.anchors(3), expected);
    }

    #[test]
    fn test_eviction_keeps_anchors_inside_stored_range() {
        let config = config().capacity(4).history_length(2).multi_step(1);
        let mut memory = ReplayMemory::new(&config).unwrap();
        memory.begin_episode();
        for k in 0..6 {
            memory.record(Some(&obs(k as f32 / 10.0)), k, k as f64).unwrap();
        }
        // Records of timesteps 2..=5 remain.
        assert_eq!(memory.transition(0).unwrap().timestep, 2);
        assert_eq!(memory.anchors(1), vec![1, 2]);

        let state = memory.stack(1);
        assert_eq!(plane_of(&state, 0), plane(0.2));
        assert_eq!(plane_of(&state, 1), plane(0.3));
    }

    #[test]
    fn test_end_to_end_episode() {
        let config = config()
            .capacity(10)
            .history_length(2)
            .multi_step(1)
            .discount(0.9);
        let mut memory = ReplayMemory::new(&config).unwrap();
        memory.begin_episode();
        memory.record(Some(&obs(0.2)), 0, 1.0).unwrap();
        memory.record(Some(&obs(0.6)), 1, 2.0).unwrap();
        memory.record(None, 2, 3.0).unwrap();

        // The stack [blank, f1] at position 1 is not an anchor.
        assert_eq!(memory.anchors(1), vec![2]);
        let batch = memory.sample_batch(1).unwrap();
        assert_eq!(batch.ix_sample, vec![2]);
        assert_eq!(batch.actions, vec![1]);
        assert_eq!(batch.returns, vec![2.0]);
        assert_eq!(batch.nonterminals, vec![0.0]);

        let state = batch.states.index_axis(Axis(0), 0).to_owned();
        assert_eq!(plane_of(&state, 0), plane(0.2));
        assert_eq!(plane_of(&state, 1), plane(0.6));
        let next_state = batch.next_states.index_axis(Axis(0), 0).to_owned();
        assert_eq!(plane_of(&next_state, 0), plane(0.6));
        assert_eq!(plane_of(&next_state, 1), plane(0.0));

        // A fresh episode needs two records before its first anchor.
        memory.begin_episode();
        memory.record(Some(&obs(0.1)), 0, 0.0).unwrap();
        memory.record(Some(&obs(0.1)), 0, 0.0).unwrap();
        assert_eq!(memory.num_valid_anchors(), 1);
        memory.record(Some(&obs(0.1)), 0, 0.0).unwrap();
        assert_eq!(memory.anchors(1), vec![2, 6]);
    }

    #[test]
    fn test_validation_sequence() {
        let config = config().history_length(2).multi_step(3);
        let mut memory = ReplayMemory::new(&config).unwrap();
        memory.begin_episode();
        for k in 0..5 {
            memory.record(Some(&obs(k as f32 / 10.0)), 0, 0.0).unwrap();
        }
        memory.record(None, 0, 0.0).unwrap();

        // One-step anchors are not limited by the multi-step horizon.
        assert_eq!(memory.num_valid_anchors(), 2);
        let iter = memory.validation_sequence();
        assert_eq!(iter.anchors(), &[2, 3, 4, 5]);
        assert_eq!(iter.len(), 4);

        let states = iter.collect::<Vec<_>>();
        assert_eq!(states.len(), 4);
        for (k, state) in states.iter().enumerate() {
            assert_eq!(state.shape(), &[2, 2, 2]);
            assert_eq!(plane_of(state, 0), plane(k as f32 / 10.0));
        }
        assert_eq!(plane_of(&states[3], 1), plane(0.4));

        // Restartable.
        assert_eq!(memory.validation_sequence().collect::<Vec<_>>(), states);
    }

    #[test]
    fn test_stack_may_straddle_terminal_without_begin_episode() {
        let config = config().history_length(2).multi_step(1);
        let mut memory = ReplayMemory::new(&config).unwrap();
        memory.begin_episode();
        memory.record(Some(&obs(0.2)), 0, 0.0).unwrap();
        memory.record(Some(&obs(0.4)), 0, 0.0).unwrap();
        memory.record(None, 0, 0.0).unwrap();
        // The next episode starts without begin_episode(); timesteps keep
        // increasing and no blank separates the episodes.
        memory.record(Some(&obs(0.6)), 0, 0.0).unwrap();
        memory.record(Some(&obs(0.8)), 0, 0.0).unwrap();

        assert_eq!(memory.anchors(1), vec![2, 3, 4]);
        let state = memory.stack(4);
        assert_eq!(plane_of(&state, 0), plane(0.0));
        assert_eq!(plane_of(&state, 1), plane(0.6));
    }

    #[test]
    fn test_clear() {
        let mut memory = ReplayMemory::new(&config().history_length(2)).unwrap();
        memory.begin_episode();
        memory.record(Some(&obs(0.5)), 0, 0.0).unwrap();
        memory.clear();
        assert!(memory.is_empty());
        assert_eq!(memory.timestep(), 0);
        assert_eq!(memory.num_valid_anchors(), 0);
    }

    #[test]
    fn test_buffer_traits() -> Result<()> {
        assert!(<ReplayMemory as ReplayBufferBase>::build(&config().capacity(0)).is_err());

        let mut memory = <ReplayMemory as ReplayBufferBase>::build(&config().history_length(2).multi_step(1))?;
        memory.begin_episode();
        for _ in 0..4 {
            memory.push(Transition {
                obs: Some(obs(0.5)),
                act: 3,
                reward: 1.0,
            })?;
        }
        memory.push(Transition {
            obs: None,
            act: 3,
            reward: 1.0,
        })?;
        assert_eq!(ExperienceBufferBase::len(&memory), 6);

        let batch = memory.batch(2)?;
        assert_eq!(batch.actions, vec![3, 3]);
        assert!(memory.batch(4).is_err());
        Ok(())
    }
}
