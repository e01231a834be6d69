//! Printable summary of a coding
//!
//! Directions are rendered to strings so the report is independent of the
//! direction type. With the `visualize` feature the report serializes via serde.

use std::fmt::{self, Display};

use crate::tree::{Direction, OrderedTree};
use crate::CodingError;

use super::TreeCoding;

/// One coded leaf
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ReportEntry {
    /// Directions from the root
    pub path: Vec<String>,

    /// Flat code, e.g. `0εε`
    pub code: String,

    /// Grouped counter form, e.g. `["00ε", "ε"]`
    pub groups: Vec<String>,
}

/// Summary of a tree and its coding
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct CodingReport {
    /// Number of leaves L
    pub leaves: usize,

    /// Tree height h
    pub height: usize,

    /// ⌊log₂ L⌋: most binary digits any code may carry
    pub bit_bound: usize,

    /// Longest code produced
    pub max_code_len: usize,

    /// BLAKE3 fingerprint of the rendered coding (hex)
    pub fingerprint: String,

    /// Entries in leaf order
    pub entries: Vec<ReportEntry>,
}

impl CodingReport {
    /// Build report for `coding`, computed from `tree`
    pub fn new<D: Direction + Display>(
        tree: &OrderedTree<D>,
        coding: &TreeCoding<D>,
    ) -> Result<Self, CodingError> {
        let entries = coding
            .sorted_entries()?
            .into_iter()
            .map(|(leaf, code)| ReportEntry {
                path: leaf.path().iter().map(ToString::to_string).collect(),
                code: code.digits().iter().map(|d| d.as_char()).collect(),
                groups: code.groups(),
            })
            .collect();

        Ok(Self {
            leaves: tree.size(),
            height: tree.height(),
            bit_bound: bit_bound(tree.size()),
            max_code_len: coding.max_code_len(),
            fingerprint: coding.fingerprint()?.to_hex().to_string(),
            entries,
        })
    }

    /// Check that every code respects the binary-digit bound
    pub fn within_bound(&self) -> bool {
        self.entries.iter().all(|entry| {
            entry.code.chars().filter(|c| *c != 'ε').count() <= self.bit_bound
        })
    }
}

/// ⌊log₂ L⌋, 0 for L ≤ 1
pub fn bit_bound(leaves: usize) -> usize {
    match leaves {
        0 | 1 => 0,
        n => n.ilog2() as usize,
    }
}

impl fmt::Display for CodingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "leaves={}\theight={}\tbit_bound={}\tmax_code_len={}",
            self.leaves, self.height, self.bit_bound, self.max_code_len
        )?;
        for entry in &self.entries {
            let code = if entry.code.is_empty() { "()" } else { entry.code.as_str() };
            writeln!(f, "[{}]\t{}", entry.path.join(", "), code)?;
        }
        write!(f, "fingerprint={}", self.fingerprint)
    }
}
