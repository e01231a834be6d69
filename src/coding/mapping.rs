//! Leaf → code mapping produced by the encoder

use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::fmt::Display;

use crate::tree::{Direction, Leaf};
use crate::util::{try_cmp, try_sort_by};
use crate::CodingError;

use super::Code;

/// Succinct tree coding: one code per leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCoding<D: Direction> {
    codes: HashMap<Leaf<D>, Code>,
}

impl<D: Direction> TreeCoding<D> {
    /// Coding of the empty tree
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Coding with a single entry
    pub fn singleton(leaf: Leaf<D>, code: Code) -> Self {
        let mut codes = HashMap::with_capacity(1);
        codes.insert(leaf, code);
        Self { codes }
    }

    /// Number of coded leaves
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no leaf is coded
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code of `leaf`, if coded
    pub fn get(&self, leaf: &Leaf<D>) -> Option<&Code> {
        self.codes.get(leaf)
    }

    /// Iterate over entries (arbitrary order)
    pub fn iter(&self) -> hash_map::Iter<'_, Leaf<D>, Code> {
        self.codes.iter()
    }

    /// Coded leaves (arbitrary order)
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf<D>> {
        self.codes.keys()
    }

    /// Add an entry; a leaf may be coded only once
    pub fn insert(&mut self, leaf: Leaf<D>, code: Code) -> Result<(), CodingError> {
        match self.codes.entry(leaf) {
            Entry::Occupied(entry) => Err(CodingError::DuplicateLeaf {
                leaf: format!("{:?}", entry.key().path()),
            }),
            Entry::Vacant(entry) => {
                entry.insert(code);
                Ok(())
            }
        }
    }

    /// Disjoint union of two codings
    pub fn merge(mut self, other: Self) -> Result<Self, CodingError> {
        self.codes.reserve(other.len());
        for (leaf, code) in other.codes {
            self.insert(leaf, code)?;
        }
        Ok(self)
    }

    /// Longest code length (0 when empty)
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Entries in lexicographic leaf order
    pub fn sorted_entries(&self) -> Result<Vec<(&Leaf<D>, &Code)>, CodingError> {
        try_sort_by(self.codes.iter().collect(), |a, b| try_cmp(a.0.path(), b.0.path()))
    }
}

impl<D: Direction + Display> TreeCoding<D> {
    /// One `leaf -> code` line per entry, in leaf order
    pub fn render(&self) -> Result<String, CodingError> {
        let mut out = String::new();
        for (leaf, code) in self.sorted_entries()? {
            out.push_str(&format!("{leaf} -> {code}\n"));
        }
        Ok(out)
    }

    /// BLAKE3 digest of [`render`](Self::render)
    ///
    /// Independent of hash-map iteration order.
    pub fn fingerprint(&self) -> Result<blake3::Hash, CodingError> {
        Ok(blake3::hash(self.render()?.as_bytes()))
    }
}

impl<D: Direction> Default for TreeCoding<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Direction> IntoIterator for TreeCoding<D> {
    type Item = (Leaf<D>, Code);
    type IntoIter = hash_map::IntoIter<Leaf<D>, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

impl<'a, D: Direction> IntoIterator for &'a TreeCoding<D> {
    type Item = (&'a Leaf<D>, &'a Code);
    type IntoIter = hash_map::Iter<'a, Leaf<D>, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
