//! Ordered trees given by their leaves
//!
//! No node structure is stored. A tree is the set of its root-to-leaf
//! navigation paths; sub-trees, branching directions and levels are all
//! derived from that set on demand.

mod direction;
mod leaf;

pub use direction::{Direction, Label};
pub use leaf::Leaf;

use std::collections::HashSet;

use crate::util::{try_cmp, try_sort_by};
use crate::CodingError;

/// Ordered tree (implicit)
///
/// Immutable: every operation returns a new tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTree<D: Direction> {
    /// Set of leaves, paths relative to the current root
    leaves: HashSet<Leaf<D>>,
}

impl<D: Direction> OrderedTree<D> {
    /// Create tree from a set of leaves
    pub fn new(leaves: HashSet<Leaf<D>>) -> Self {
        Self { leaves }
    }

    /// Tree without leaves
    pub fn empty() -> Self {
        Self {
            leaves: HashSet::new(),
        }
    }

    /// Create tree from literal paths; duplicates collapse
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = Vec<D>>,
    {
        paths.into_iter().map(Leaf::new).collect()
    }

    /// Leaf count
    #[inline]
    pub fn size(&self) -> usize {
        self.leaves.len()
    }

    /// Check if the tree has no leaves
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Underlying leaf set
    pub fn leaves(&self) -> &HashSet<Leaf<D>> {
        &self.leaves
    }

    /// Iterate over leaves (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &Leaf<D>> {
        self.leaves.iter()
    }

    /// Check membership
    pub fn contains(&self, leaf: &Leaf<D>) -> bool {
        self.leaves.contains(leaf)
    }

    /// Longest path below the current root (0 for empty trees)
    pub fn height(&self) -> usize {
        self.leaves.iter().map(Leaf::depth).max().unwrap_or(0)
    }

    /// Distinct first directions, ascending
    ///
    /// Leaves at the root contribute nothing. The ascending order is part
    /// of the coding contract: it fixes which direction the balancing loop
    /// tries first, making codes reproducible.
    pub fn branching_directions(&self) -> Result<Vec<D>, CodingError> {
        let distinct: HashSet<&D> = self.leaves.iter().filter_map(Leaf::first_direction).collect();
        let sorted = try_sort_by(distinct.into_iter().collect(), |a, b| try_cmp(*a, *b))?;
        Ok(sorted.into_iter().cloned().collect())
    }

    /// Leaves whose first direction lies in `directions`
    pub fn subtree(&self, directions: &[D]) -> Self {
        self.leaves
            .iter()
            .filter(|leaf| {
                leaf.first_direction()
                    .is_some_and(|first| directions.contains(first))
            })
            .cloned()
            .collect()
    }

    /// Leaves of `self` not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        Self::new(self.leaves.difference(&other.leaves).cloned().collect())
    }

    /// Leaves of `self` or `other`
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.leaves.union(&other.leaves).cloned().collect())
    }

    /// Move the frame one level down
    ///
    /// Precondition: no leaf sits at the current root.
    pub fn step_down(&self) -> Result<Self, CodingError> {
        self.leaves.iter().map(Leaf::step_down).collect()
    }

    /// Move the frame `levels` down
    ///
    /// Precondition: every path has at least `levels` directions.
    pub fn step_down_by(&self, levels: usize) -> Result<Self, CodingError> {
        self.leaves.iter().map(|leaf| leaf.step_down_by(levels)).collect()
    }

    /// Longest run of directions at the start of every path
    ///
    /// Empty for empty trees and whenever some leaf sits at the root.
    /// A lone leaf shares its whole path.
    pub fn shared_prefix(&self) -> &[D] {
        let mut leaves = self.leaves.iter();
        let Some(first) = leaves.next() else {
            return &[];
        };
        let mut shared = first.path();
        for leaf in leaves {
            let common = shared
                .iter()
                .zip(leaf.path())
                .take_while(|(a, b)| a == b)
                .count();
            shared = &shared[..common];
            if shared.is_empty() {
                break;
            }
        }
        shared
    }

    /// Leaves in lexicographic path order
    pub fn sorted_leaves(&self) -> Result<Vec<&Leaf<D>>, CodingError> {
        try_sort_by(self.leaves.iter().collect(), |a, b| try_cmp(a.path(), b.path()))
    }
}

impl<D: Direction> Default for OrderedTree<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<D: Direction> FromIterator<Leaf<D>> for OrderedTree<D> {
    fn from_iter<T: IntoIterator<Item = Leaf<D>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, D: Direction> IntoIterator for &'a OrderedTree<D> {
    type Item = &'a Leaf<D>;
    type IntoIter = std::collections::hash_set::Iter<'a, Leaf<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}
