//! Complete-linkage agglomerative center selection.
//!
//! On a line, complete-linkage clusters are always contiguous runs of the
//! sorted values: the linkage distance between two runs is the span of
//! their union, which can only grow when a run further away is chosen.
//! Only adjacent runs are therefore ever candidates for a merge, which keeps
//! the whole clustering at `O(n log n)` with a heap of candidate merges.

use core::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::CenterStrategy;
use crate::error::{Error, Result};
use crate::targets;

/// Uses the member means of a complete-linkage hierarchical clustering as centers.
///
/// Clusters are merged bottom-up until `k` remain. Ties between equally
/// distant merges go to the lowest-valued pair. Centers are returned in
/// ascending cluster order.
///
/// # Examples
///
/// ```
/// use kmn::center::{Agglomerative, CenterStrategy};
///
/// let centers = Agglomerative::new().select(&[1.0, 1.5, 2.0, 10.0, 11.0], 2).unwrap();
/// assert_eq!(centers, vec![1.5, 10.5]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Agglomerative;

impl Agglomerative {
    /// Creates a complete-linkage strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// A candidate merge of run `left` with the run right after it.
#[derive(Clone, Copy, Debug)]
struct Merge {
    span: f64,
    left: usize,
    right: usize,
    versions: (u32, u32),
}

impl Ord for Merge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.span
            .total_cmp(&other.span)
            .then(self.left.cmp(&other.left))
    }
}

impl PartialOrd for Merge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Merge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Merge {}

/// Runs of sorted values, linked left to right.
struct Runs {
    sorted: Vec<f64>,
    end: Vec<usize>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    alive: Vec<bool>,
    version: Vec<u32>,
}

impl Runs {
    fn singletons(sorted: Vec<f64>) -> Self {
        let n = sorted.len();
        Self {
            sorted,
            end: (0..n).collect(),
            next: (0..n).map(|i| (i + 1 < n).then_some(i + 1)).collect(),
            prev: (0..n).map(|i| i.checked_sub(1)).collect(),
            alive: vec![true; n],
            version: vec![0; n],
        }
    }

    /// Runs are keyed by their first index, so `left` is also where it starts.
    fn candidate(&self, left: usize, right: usize) -> Merge {
        Merge {
            span: self.sorted[self.end[right]] - self.sorted[left],
            left,
            right,
            versions: (self.version[left], self.version[right]),
        }
    }

    fn is_current(&self, merge: &Merge) -> bool {
        self.alive[merge.left]
            && self.alive[merge.right]
            && merge.versions == (self.version[merge.left], self.version[merge.right])
    }

    /// Absorbs `right` into `left`.
    fn merge(&mut self, left: usize, right: usize) {
        self.end[left] = self.end[right];
        self.alive[right] = false;
        self.version[left] += 1;
        self.next[left] = self.next[right];
        if let Some(after) = self.next[right] {
            self.prev[after] = Some(left);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn means(&self) -> Vec<f64> {
        let mut means = Vec::new();
        let mut cursor = Some(0);
        while let Some(start) = cursor {
            let members = &self.sorted[start..=self.end[start]];
            means.push(members.iter().sum::<f64>() / members.len() as f64);
            cursor = self.next[start];
        }
        means
    }
}

impl CenterStrategy for Agglomerative {
    fn select(&self, values: &[f64], k: usize) -> Result<Vec<f64>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        if k > values.len() {
            return Err(Error::NotEnoughValues {
                requested: k,
                available: values.len(),
            });
        }

        let mut runs = Runs::singletons(targets::sorted(values));
        let mut heap: BinaryHeap<Reverse<Merge>> = (1..values.len())
            .map(|i| Reverse(runs.candidate(i - 1, i)))
            .collect();

        let mut n_clusters = values.len();
        while n_clusters > k {
            let Some(Reverse(merge)) = heap.pop() else {
                break;
            };
            if !runs.is_current(&merge) {
                continue;
            }
            runs.merge(merge.left, merge.right);
            n_clusters -= 1;

            if let Some(before) = runs.prev[merge.left] {
                heap.push(Reverse(runs.candidate(before, merge.left)));
            }
            if let Some(after) = runs.next[merge.left] {
                heap.push(Reverse(runs.candidate(merge.left, after)));
            }
        }

        Ok(runs.means())
    }
}
