use std::iter::FusedIterator;

use ipart_core::Partition;

#[derive(Debug, Clone, Copy)]
struct Frame {
    remaining: u32,
    // next addend to try at this depth; zero once exhausted
    next: u32,
}

/// Lazy depth-first partition enumerator driven by an explicit frame stack.
///
/// Yields the same sequence as [`crate::enumerate_partitions`] without
/// recursion. Each frame records the remaining target and the next addend to
/// try; the shared prefix is pushed on descent and popped on return.
#[derive(Debug, Clone)]
pub struct PartitionIter {
    target: u32,
    prefix: Vec<u32>,
    frames: Vec<Frame>,
}

impl PartitionIter {
    /// Starts a fresh enumeration of `target`.
    pub fn new(target: u32) -> Self {
        Self {
            target,
            prefix: Vec::new(),
            frames: vec![Frame {
                remaining: target,
                next: target,
            }],
        }
    }

    /// Integer being partitioned.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Rewinds the iterator to the first partition.
    pub fn restart(&mut self) {
        *self = Self::new(self.target);
    }
}

impl Iterator for PartitionIter {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        loop {
            let frame = self.frames.last_mut()?;
            if frame.remaining == 0 {
                let emitted = Partition::from_canonical(self.prefix.clone());
                self.frames.pop();
                self.prefix.pop();
                return Some(emitted);
            }
            if frame.next == 0 {
                self.frames.pop();
                self.prefix.pop();
                continue;
            }
            let addend = frame.next;
            frame.next -= 1;
            let remaining = frame.remaining - addend;
            self.prefix.push(addend);
            self.frames.push(Frame {
                remaining,
                next: addend.min(remaining),
            });
        }
    }
}

impl FusedIterator for PartitionIter {}

#[cfg(test)]
mod tests {
    use super::PartitionIter;
    use crate::enumerate_partitions;

    #[test]
    fn matches_recursive_enumeration() {
        for target in 0..=16 {
            let lazy: Vec<_> = PartitionIter::new(target).collect();
            assert_eq!(lazy, enumerate_partitions(target).into_vec(), "target {target}");
        }
    }

    #[test]
    fn restart_replays_the_sequence() {
        let mut iter = PartitionIter::new(5);
        let first: Vec<_> = iter.by_ref().take(3).collect();
        iter.restart();
        let again: Vec<_> = iter.take(3).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn huge_target_yields_first_partitions_lazily() {
        let first: Vec<Vec<u32>> = PartitionIter::new(u32::MAX)
            .take(2)
            .map(|partition| partition.addends().to_vec())
            .collect();
        assert_eq!(first, vec![vec![u32::MAX], vec![u32::MAX - 1, 1]]);
    }

    #[test]
    fn stays_exhausted() {
        let mut iter = PartitionIter::new(2);
        assert_eq!(iter.by_ref().count(), 2);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
