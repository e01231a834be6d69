//! Succinct tree coding
//!
//! Encoder over [`OrderedTree`]s:
//!
//!   |T| = 0            → no codes
//!   |T| = 1, at root   → empty code
//!   |T| = 1, below     → ε^depth
//!   |T| ≥ 2            → 0 · code(smaller) ∪ ε · code(middle stepped down) ∪ 1 · code(bigger)
//!
//! The recursion is unrolled onto an explicit level stack: digits and pivot
//! directions are pushed on the way down and popped on the way back, so
//! input depth never reaches the call stack. A run of levels where every
//! leaf goes through the same direction is one level of the stack.

mod code;
mod mapping;
mod partition;
mod report;

pub use code::{Code, Digit};
pub use mapping::TreeCoding;
pub use partition::{balanced_partition, Partition};
pub use report::{CodingReport, ReportEntry};

use tracing::{debug, trace};

use crate::tree::{Direction, OrderedTree};
use crate::CodingError;

/// Compute the succinct tree coding of `tree`
///
/// Returns exactly one code per leaf. The result is a pure function of the
/// leaf set: root directions are always tried in ascending order.
pub fn encode<D: Direction>(tree: &OrderedTree<D>) -> Result<TreeCoding<D>, CodingError> {
    debug!(leaves = tree.size(), height = tree.height(), "encoding tree");

    let mut walk = LevelWalk::new();
    walk.expand(tree)?;
    while let Some(step) = walk.pending.pop() {
        match step {
            Step::Enter {
                tree,
                digits,
                directions,
            } => {
                walk.push_level(digits, directions);
                walk.expand(&tree)?;
            }
            Step::Leave { digits, directions } => walk.pop_level(digits, directions),
        }
    }

    debug!(max_code_len = walk.coding.max_code_len(), "encoding complete");
    Ok(walk.coding)
}

/// Pending work on the level stack
enum Step<D: Direction> {
    /// Descend into `tree` after appending `digits` to the code and
    /// `directions` to the path
    Enter {
        tree: OrderedTree<D>,
        digits: Vec<Digit>,
        directions: Vec<D>,
    },

    /// Undo the matching `Enter`
    Leave { digits: usize, directions: usize },
}

/// Depth-first walk state
struct LevelWalk<D: Direction> {
    /// Digits chosen from the root down to the current frame
    code: Vec<Digit>,

    /// Pivot directions stripped from the root down to the current frame
    ancestry: Vec<D>,

    pending: Vec<Step<D>>,
    coding: TreeCoding<D>,
}

impl<D: Direction> LevelWalk<D> {
    fn new() -> Self {
        Self {
            code: Vec::new(),
            ancestry: Vec::new(),
            pending: Vec::new(),
            coding: TreeCoding::new(),
        }
    }

    fn push_level(&mut self, digits: Vec<Digit>, directions: Vec<D>) {
        self.pending.push(Step::Leave {
            digits: digits.len(),
            directions: directions.len(),
        });
        self.code.extend(digits);
        self.ancestry.extend(directions);
    }

    fn pop_level(&mut self, digits: usize, directions: usize) {
        self.code.truncate(self.code.len() - digits);
        self.ancestry.truncate(self.ancestry.len() - directions);
    }

    /// Resolve the current frame or schedule its children
    fn expand(&mut self, tree: &OrderedTree<D>) -> Result<(), CodingError> {
        let depth = self.code.len();
        match tree.size() {
            0 => Ok(()),
            1 => self.emit_single(tree, depth),
            _ => self.split(tree, depth),
        }
    }

    /// Lone leaf: one ε per remaining level
    fn emit_single(&mut self, tree: &OrderedTree<D>, depth: usize) -> Result<(), CodingError> {
        let Some(leaf) = tree.iter().next() else {
            return Ok(());
        };
        trace!(depth, remaining = leaf.depth(), "lone leaf");

        let mut digits = Vec::with_capacity(self.code.len() + leaf.depth());
        digits.extend_from_slice(&self.code);
        digits.resize(self.code.len() + leaf.depth(), Digit::Epsilon);

        self.coding
            .insert(leaf.add_prefixes(&self.ancestry), Code::from(digits))
    }

    /// General case: balanced three-way split
    fn split(&mut self, tree: &OrderedTree<D>, depth: usize) -> Result<(), CodingError> {
        // Every leaf under one direction: the partition is (∅, d, T, ∅) on
        // each of these levels, so take them all at once
        let shared = tree.shared_prefix();
        if !shared.is_empty() {
            trace!(depth, levels = shared.len(), "shared prefix");
            self.pending.push(Step::Enter {
                tree: tree.step_down_by(shared.len())?,
                digits: vec![Digit::Epsilon; shared.len()],
                directions: shared.to_vec(),
            });
            return Ok(());
        }

        let Partition {
            smaller,
            pivot,
            middle,
            bigger,
        } = balanced_partition(tree)?;
        trace!(depth, leaves = tree.size(), pivot = ?pivot, "split");

        for (group, digit, directions) in [
            (bigger, Digit::One, Vec::new()),
            (middle.step_down()?, Digit::Epsilon, vec![pivot]),
            (smaller, Digit::Zero, Vec::new()),
        ] {
            if !group.is_empty() {
                self.pending.push(Step::Enter {
                    tree: group,
                    digits: vec![digit],
                    directions,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Leaf;
    use super::Digit::{Epsilon as E, One as I, Zero as O};

    fn code_of(coding: &TreeCoding<i32>, path: Vec<i32>) -> Vec<Digit> {
        coding.get(&Leaf::new(path)).unwrap().digits().to_vec()
    }

    #[test]
    fn test_empty_tree() {
        let coding = encode(&OrderedTree::<i32>::empty()).unwrap();
        assert!(coding.is_empty());
    }

    #[test]
    fn test_single_root_leaf() {
        let tree = OrderedTree::<i32>::from_paths(vec![vec![]]);
        let coding = encode(&tree).unwrap();
        assert_eq!(coding.len(), 1);
        assert!(coding.get(&Leaf::root()).unwrap().is_empty());
    }

    #[test]
    fn test_single_deep_leaf_is_all_epsilon() {
        let tree = OrderedTree::from_paths(vec![vec![3, 1, 4, 1]]);
        let coding = encode(&tree).unwrap();
        assert_eq!(code_of(&coding, vec![3, 1, 4, 1]), vec![E, E, E, E]);
    }

    #[test]
    fn test_two_siblings() {
        let tree = OrderedTree::from_paths(vec![vec![0], vec![1]]);
        let coding = encode(&tree).unwrap();
        assert_eq!(code_of(&coding, vec![0]), vec![E]);
        assert_eq!(code_of(&coding, vec![1]), vec![I, E]);
    }

    #[test]
    fn test_flat_tree() {
        let tree = OrderedTree::from_paths((0..5).map(|i| vec![i]));
        let coding = encode(&tree).unwrap();

        assert_eq!(code_of(&coding, vec![0]), vec![O, E]);
        assert_eq!(code_of(&coding, vec![1]), vec![O, I, E]);
        assert_eq!(code_of(&coding, vec![2]), vec![E]);
        assert_eq!(code_of(&coding, vec![3]), vec![I, E]);
        assert_eq!(code_of(&coding, vec![4]), vec![I, I, E]);
    }

    #[test]
    fn test_root_leaf_next_to_children() {
        // Not a proper tree, but still coded: the root leaf lands in `bigger`
        let tree = OrderedTree::from_paths(vec![vec![], vec![0], vec![1]]);
        let coding = encode(&tree).unwrap();

        assert_eq!(coding.len(), 3);
        assert_eq!(code_of(&coding, vec![]), vec![I]);
        assert_eq!(code_of(&coding, vec![0]), vec![O, E]);
        assert_eq!(code_of(&coding, vec![1]), vec![E]);
    }

    #[test]
    fn test_very_deep_lone_leaf() {
        let path: Vec<i32> = (0..100_000).collect();
        let coding = encode(&OrderedTree::from_paths(vec![path.clone()])).unwrap();

        let code = coding.get(&Leaf::new(path)).unwrap();
        assert_eq!(code.len(), 100_000);
        assert_eq!(code.epsilons(), 100_000);
    }

    #[test]
    fn test_long_shared_prefix() {
        let stem: Vec<i32> = vec![7; 50_000];
        let with = |tail: &[i32]| [stem.as_slice(), tail].concat();
        let tree = OrderedTree::from_paths(vec![with(&[0]), with(&[1, 3]), with(&[2])]);
        let coding = encode(&tree).unwrap();

        assert_eq!(coding.len(), 3);
        let tail = |path: Vec<i32>| code_of(&coding, path)[50_000..].to_vec();
        assert!(code_of(&coding, with(&[0]))[..50_000].iter().all(|d| *d == E));
        // Below the stem: same codes as the three-leaf tree {[0], [1, 3], [2]}
        assert_eq!(tail(with(&[0])), vec![O, E]);
        assert_eq!(tail(with(&[1, 3])), vec![E, E]);
        assert_eq!(tail(with(&[2])), vec![I, E]);
    }

    #[test]
    fn test_shared_prefix_matches_level_by_level() {
        // Stem of 2 then a split: ε ε in front of the split codes
        let tree = OrderedTree::from_paths(vec![vec![5, 5, 0], vec![5, 5, 1]]);
        let coding = encode(&tree).unwrap();
        assert_eq!(code_of(&coding, vec![5, 5, 0]), vec![E, E, E]);
        assert_eq!(code_of(&coding, vec![5, 5, 1]), vec![E, E, I, E]);
    }

    #[test]
    fn test_incomparable_directions_abort() {
        use crate::tree::Label;
        let tree = OrderedTree::from_paths(vec![
            vec![Label::Index(0), Label::Index(1)],
            vec![Label::Index(0), Label::Name("b".into())],
        ]);
        assert!(matches!(
            encode(&tree),
            Err(CodingError::IncomparableDirection { .. })
        ));
    }
}
