//! Balanced three-way partition of a tree
//!
//! Root directions are taken in ascending order and folded into `smaller`
//! until both `smaller` and `bigger` hold at most half of the leaves:
//!
//!   smaller = leaves under directions before the pivot
//!   middle  = leaves under the pivot
//!   bigger  = everything else (later directions, root leaf)
//!
//! The first direction whose inclusive prefix reaches half of the leaves
//! always qualifies, so the loop stops before the directions run out.

use tracing::trace;

use crate::tree::{Direction, OrderedTree};
use crate::CodingError;

/// Result of the balancing loop
#[derive(Debug, Clone)]
pub struct Partition<D: Direction> {
    /// Leaves under directions strictly before the pivot
    pub smaller: OrderedTree<D>,

    /// Direction the loop stopped at
    pub pivot: D,

    /// Leaves under the pivot
    pub middle: OrderedTree<D>,

    /// Remaining leaves
    pub bigger: OrderedTree<D>,
}

impl<D: Direction> Partition<D> {
    /// Check `|smaller| ≤ L/2` and `|bigger| ≤ L/2`
    pub fn is_balanced(&self, leaves: usize) -> bool {
        within_half(self.smaller.size(), leaves) && within_half(self.bigger.size(), leaves)
    }
}

/// `part ≤ total / 2` over the rationals
#[inline]
fn within_half(part: usize, total: usize) -> bool {
    2 * part <= total
}

/// Run the balancing loop on `tree`
pub fn balanced_partition<D: Direction>(tree: &OrderedTree<D>) -> Result<Partition<D>, CodingError> {
    let leaves = tree.size();
    let exhausted = || CodingError::UnbalancedPartition { leaves };

    let directions = tree.branching_directions()?;
    let mut candidates = directions.into_iter();

    let mut pivot = candidates.next().ok_or_else(exhausted)?;
    let mut smaller = OrderedTree::empty();
    let mut middle = tree.subtree(std::slice::from_ref(&pivot));
    let mut bigger = tree.difference(&middle);

    while !within_half(smaller.size(), leaves) || !within_half(bigger.size(), leaves) {
        smaller = smaller.union(&middle);
        pivot = candidates.next().ok_or_else(exhausted)?;
        middle = tree.subtree(std::slice::from_ref(&pivot));
        bigger = bigger.difference(&middle);
    }

    trace!(
        leaves,
        smaller = smaller.size(),
        middle = middle.size(),
        bigger = bigger.size(),
        pivot = ?pivot,
        "balanced partition"
    );

    Ok(Partition {
        smaller,
        pivot,
        middle,
        bigger,
    })
}
