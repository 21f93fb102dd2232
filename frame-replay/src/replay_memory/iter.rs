//! Sequential iteration over the anchors of a replay memory.
use super::ReplayMemory;
use ndarray::Array3;

/// Iterator over the stacked states of the one-step anchors of a
/// [`ReplayMemory`], in ascending position order.
///
/// Created by [`ReplayMemory::validation_sequence`]. The anchors are a
/// snapshot taken at creation; the shared borrow of the memory keeps the
/// snapshot consistent with the stored records.
pub struct ValidationIter<'a> {
    memory: &'a ReplayMemory,
    anchors: Vec<usize>,
    cursor: usize,
}

impl<'a> ValidationIter<'a> {
    pub(super) fn new(memory: &'a ReplayMemory, anchors: Vec<usize>) -> Self {
        Self {
            memory,
            anchors,
            cursor: 0,
        }
    }

    /// Logical positions visited by the iterator, including those already
    /// yielded.
    pub fn anchors(&self) -> &[usize] {
        &self.anchors
    }
}

impl<'a> Iterator for ValidationIter<'a> {
    /// Stacked frames `[history_length, height, width]` in `[0, 1]`.
    type Item = Array3<f32>;

    fn next(&mut self) -> Option<Self::Item> {
        let anchor = *self.anchors.get(self.cursor)?;
        self.cursor += 1;
        Some(self.memory.stack(anchor))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.anchors.len() - self.cursor;
        (n, Some(n))
    }
}

impl<'a> ExactSizeIterator for ValidationIter<'a> {}
