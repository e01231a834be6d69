//! Leaf = navigation path from the current root
//!
//! The path is shared: stepping down only advances an offset into the
//! parent's buffer, so a whole subtree can be reframed without copying.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{Direction, Label};
use crate::CodingError;

/// Immutable leaf of an ordered tree
#[derive(Clone)]
pub struct Leaf<D> {
    /// Full path buffer (possibly shared with ancestors of this frame)
    path: Arc<[D]>,

    /// Number of leading directions already stepped over
    offset: usize,
}

impl<D: Direction> Leaf<D> {
    /// Create leaf from its directions, root first
    pub fn new(path: Vec<D>) -> Self {
        Self {
            path: Arc::from(path),
            offset: 0,
        }
    }

    /// Leaf located exactly at the current root
    pub fn root() -> Self {
        Self::new(Vec::new())
    }

    /// Directions from the current root to this leaf
    #[inline]
    pub fn path(&self) -> &[D] {
        &self.path[self.offset..]
    }

    /// Depth below the current root
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len() - self.offset
    }

    /// Check if the leaf is the current root
    #[inline]
    pub fn is_root(&self) -> bool {
        self.depth() == 0
    }

    /// First branching direction, `None` at the root
    pub fn first_direction(&self) -> Option<&D> {
        self.path().first()
    }

    /// Same leaf seen from one level further down
    ///
    /// Shares the path buffer; O(1).
    pub fn step_down(&self) -> Result<Self, CodingError> {
        if self.is_root() {
            return Err(CodingError::EmptyPathStepDown);
        }
        Ok(Self {
            path: Arc::clone(&self.path),
            offset: self.offset + 1,
        })
    }

    /// Same leaf seen `levels` further down
    ///
    /// Fails if the path is shorter than `levels`. O(1).
    pub fn step_down_by(&self, levels: usize) -> Result<Self, CodingError> {
        if self.depth() < levels {
            return Err(CodingError::EmptyPathStepDown);
        }
        Ok(Self {
            path: Arc::clone(&self.path),
            offset: self.offset + levels,
        })
    }

    /// Same leaf seen from one level further up, through `direction`
    pub fn add_prefix(&self, direction: D) -> Self {
        self.add_prefixes(std::slice::from_ref(&direction))
    }

    /// Same leaf seen from `prefix.len()` levels further up
    pub fn add_prefixes(&self, prefix: &[D]) -> Self {
        let mut path = Vec::with_capacity(prefix.len() + self.depth());
        path.extend_from_slice(prefix);
        path.extend_from_slice(self.path());
        Self::new(path)
    }
}

impl Leaf<Label> {
    /// Parse a leaf written as `a/b/c`
    ///
    /// `/` alone (or an empty string) is the root. Components are parsed as
    /// [`Label`]s; empty components are rejected.
    pub fn parse(input: &str) -> Result<Self, CodingError> {
        let trimmed = input.trim();
        let body = trimmed.strip_prefix('/').unwrap_or(trimmed);
        if body.is_empty() {
            return Ok(Self::root());
        }

        let mut path = Vec::new();
        for (position, component) in body.split('/').enumerate() {
            if component.trim().is_empty() {
                return Err(CodingError::InvalidLeaf {
                    input: input.to_string(),
                    reason: format!("empty direction at position {}", position + 1),
                });
            }
            // Label parsing is infallible
            let label = match component.parse::<Label>() {
                Ok(label) => label,
                Err(never) => match never {},
            };
            path.push(label);
        }
        Ok(Self::new(path))
    }
}

impl<D: Direction> PartialEq for Leaf<D> {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl<D: Direction> Eq for Leaf<D> {}

impl<D: Direction> Hash for Leaf<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path().hash(state);
    }
}

impl<D: Direction> From<Vec<D>> for Leaf<D> {
    fn from(path: Vec<D>) -> Self {
        Self::new(path)
    }
}

impl<D: Direction> fmt::Debug for Leaf<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Leaf").field(&self.path()).finish()
    }
}

impl<D: Direction + fmt::Display> fmt::Display for Leaf<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, direction) in self.path().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{direction}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn test_first_direction() {
        assert_eq!(Leaf::new(vec![4, 2]).first_direction(), Some(&4));
        assert_eq!(Leaf::<i32>::root().first_direction(), None);
    }

    #[test]
    fn test_step_down_shares_buffer() {
        let leaf = Leaf::new(vec![1, 2, 3]);
        let lower = leaf.step_down().unwrap();

        assert_eq!(lower.path(), &[2, 3]);
        assert_eq!(lower.depth(), 2);
        assert!(Arc::ptr_eq(&leaf.path, &lower.path));
        // Original untouched
        assert_eq!(leaf.path(), &[1, 2, 3]);
    }

    #[test]
    fn test_step_down_from_root_fails() {
        let leaf = Leaf::new(vec![1]).step_down().unwrap();
        assert!(leaf.is_root());
        assert_eq!(leaf.step_down(), Err(CodingError::EmptyPathStepDown));
    }

    #[test]
    fn test_add_prefix() {
        let leaf = Leaf::new(vec![1, 2]).step_down().unwrap();
        let raised = leaf.add_prefix(9);
        assert_eq!(raised.path(), &[9, 2]);
        assert_eq!(leaf.path(), &[2]);
    }

    #[test]
    fn test_step_down_by_levels() {
        let leaf = Leaf::new(vec![1, 2, 3]);
        assert_eq!(leaf.step_down_by(2).unwrap().path(), &[3]);
        assert!(leaf.step_down_by(3).unwrap().is_root());
        assert_eq!(leaf.step_down_by(4), Err(CodingError::EmptyPathStepDown));
        assert_eq!(leaf.step_down_by(0).unwrap(), leaf);
    }

    #[test]
    fn test_add_prefixes() {
        let leaf = Leaf::new(vec![7, 8]).step_down().unwrap();
        assert_eq!(leaf.add_prefixes(&[1, 2]).path(), &[1, 2, 8]);
        assert_eq!(leaf.add_prefixes(&[]).path(), &[8]);
    }

    #[test]
    fn test_debug_shows_visible_path_only() {
        let stepped = Leaf::new(vec![0, 5, 6]).step_down().unwrap();
        assert_eq!(format!("{stepped:?}"), "Leaf([5, 6])");
        assert_eq!(format!("{:?}", Leaf::<i32>::root()), "Leaf([])");
    }

    #[test]
    fn test_equality_ignores_offset() {
        let stepped = Leaf::new(vec![0, 5, 6]).step_down().unwrap();
        let fresh = Leaf::new(vec![5, 6]);
        assert_eq!(stepped, fresh);

        let set: HashSet<_> = [stepped, fresh].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Leaf::new(vec![2, 4]).to_string(), "[2, 4]");
        assert_eq!(Leaf::<i32>::root().to_string(), "[]");
    }

    #[test_case("0/1", vec![Label::Index(0), Label::Index(1)] ; "indices")]
    #[test_case("/left/3", vec![Label::Name("left".into()), Label::Index(3)] ; "leading slash")]
    #[test_case("/", vec![] ; "root slash")]
    #[test_case("", vec![] ; "root empty")]
    #[test_case(" 2 / 4 ", vec![Label::Index(2), Label::Index(4)] ; "whitespace")]
    fn test_parse(input: &str, expected: Vec<Label>) {
        assert_eq!(Leaf::parse(input).unwrap().path(), expected.as_slice());
    }

    #[test_case("0//1" ; "inner gap")]
    #[test_case("0/" ; "trailing slash")]
    fn test_parse_rejects_empty_components(input: &str) {
        assert!(matches!(
            Leaf::parse(input),
            Err(CodingError::InvalidLeaf { .. })
        ));
    }
}
