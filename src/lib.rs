//! # Succinct Tree Coding
//!
//! This library computes the succinct tree coding of Jurdziński and Lazić
//! ("Succinct progress measures for solving parity games", LICS 2017).
//!
//! An ordered tree of height h with at most L leaves is described only by
//! its leaves, each leaf being the sequence of branching directions taken
//! from the root. Every leaf is mapped to a ⌈log₂ L⌉-bounded adaptive
//! h-counter: a word over `{0, ε, 1}` whose length grows with log L rather
//! than with the tree depth.
//!
//! ## Core Algorithm
//!
//! 1. **Base cases**: an empty tree codes nothing, a lone leaf at the root
//!    gets the empty code, a lone leaf further down gets one ε per level
//! 2. **Balanced partition**: fold root directions (in ascending order) into
//!    a `smaller` group until both `smaller` and `bigger` hold at most half
//!    of the leaves; the direction reached is the pivot
//! 3. **Recombination**: codes of `smaller` get a leading `0`, codes below
//!    the pivot a leading `ε`, codes of `bigger` a leading `1`
//!
//! Result: every leaf carries exactly `depth` ε symbols and at most
//! ⌊log₂ L⌋ binary digits.
//!
//! ## Usage Example
//!
//! ```
//! use succinct_tree_coding::{encode, OrderedTree};
//!
//! let tree = OrderedTree::from_paths(vec![vec![0, 0], vec![1, 0], vec![1, 1]]);
//! let coding = encode(&tree)?;
//! assert_eq!(coding.len(), 3);
//! # Ok::<(), succinct_tree_coding::CodingError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod coding; // Recursive encoder and its result types
pub mod tree; // Leaves and ordered trees
pub mod util; // Helper functions

pub use coding::{
    balanced_partition, encode, Code, CodingReport, Digit, Partition, ReportEntry, TreeCoding,
};
pub use tree::{Direction, Label, Leaf, OrderedTree};

use thiserror::Error;

/// Errors that can occur while building trees or computing a coding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodingError {
    /// Two directions could not be ordered relative to each other
    #[error("incomparable directions: {left} and {right}")]
    IncomparableDirection {
        /// Debug rendering of the left-hand direction
        left: String,
        /// Debug rendering of the right-hand direction
        right: String,
    },

    /// `step_down` was applied to a leaf that is already at the root
    #[error("cannot step down from a leaf with an empty path")]
    EmptyPathStepDown,

    /// Two partial codings assigned a code to the same leaf
    #[error("leaf {leaf} was coded twice")]
    DuplicateLeaf {
        /// The leaf that appeared in both codings
        leaf: String,
    },

    /// The balancing loop ran out of root directions
    #[error("no balanced partition found for a tree with {leaves} leaves")]
    UnbalancedPartition {
        /// Number of leaves in the tree being partitioned
        leaves: usize,
    },

    /// A textual leaf could not be parsed
    #[error("invalid leaf '{input}': {reason}")]
    InvalidLeaf {
        /// The rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

impl CodingError {
    /// Helper for constructing comparison failures from any two debuggable values.
    pub fn incomparable(left: &impl std::fmt::Debug, right: &impl std::fmt::Debug) -> Self {
        CodingError::IncomparableDirection {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}
