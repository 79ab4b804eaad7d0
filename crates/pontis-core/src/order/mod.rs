//! Bridge ordering strategies.
//!
//! The forest builder needs exactly one thing from this module: bridges
//! delivered in non-increasing packed-weight order. Two interchangeable
//! strategies provide it, selected by [`Strategy`]:
//!
//! - [`Strategy::Radix`] sorts the whole collection ascending with a
//!   fixed-pass LSD radix sort, then yields from the back. Linear time,
//!   cache-friendly, pays the full sorting cost up front.
//! - [`Strategy::Heap`] establishes a max-heap and extracts the maximum
//!   per `next()` call. Work is deferred, so a consumer that stops early
//!   (a forest completes after `islands - 1` acceptances) never orders
//!   the tail.
//!
//! Consumers hold a [`Descending`] iterator and stay oblivious to which
//! strategy produced it.

pub mod heap;
pub mod radix;

use crate::bridge::Bridge;

/// Which algorithm orders the bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// LSD radix sort over the packed key, then reverse iteration.
    #[default]
    Radix,
    /// Max-heap with repeated extraction.
    Heap,
}

impl Strategy {
    /// Consumes the bridge collection and returns an iterator yielding
    /// bridges in non-increasing packed-weight order.
    ///
    /// Zero bridges is fine with either strategy; the iterator is simply
    /// empty.
    pub fn descending(self, mut bridges: Vec<Bridge>) -> Descending {
        let inner = match self {
            Self::Radix => {
                radix::sort_ascending(&mut bridges);
                Inner::Sorted(bridges)
            }
            Self::Heap => {
                heap::build_max_heap(&mut bridges);
                Inner::Heaped(bridges)
            }
        };
        Descending { inner }
    }
}

/// Iterator over bridges in non-increasing packed-weight order.
///
/// Created by [`Strategy::descending`].
#[derive(Debug)]
pub struct Descending {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    /// Radix-sorted ascending; popping the tail walks downward.
    Sorted(Vec<Bridge>),
    /// Max-heap over the active region; each extraction re-heapifies.
    Heaped(Vec<Bridge>),
}

impl Iterator for Descending {
    type Item = Bridge;

    fn next(&mut self) -> Option<Bridge> {
        match &mut self.inner {
            Inner::Sorted(bridges) => bridges.pop(),
            Inner::Heaped(bridges) => heap::extract_max(bridges),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.inner {
            Inner::Sorted(bridges) | Inner::Heaped(bridges) => bridges.len(),
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Descending {}
