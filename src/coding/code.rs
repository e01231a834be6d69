//! Bounded adaptive counters
//!
//! A code is a flat word over `{0, ε, 1}`. Each ε marks a level skipped
//! without a branching decision; each binary digit marks a halving split.

use std::fmt;

/// One symbol of a code
///
/// Ordered `Zero < Epsilon < One`, so that codes compare in the same order
/// as the leaves they encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Digit {
    /// Left side of a balanced split
    Zero,

    /// Level skipped through the pivot direction
    Epsilon,

    /// Right side of a balanced split
    One,
}

impl Digit {
    /// Printable form
    pub fn as_char(self) -> char {
        match self {
            Digit::Zero => '0',
            Digit::Epsilon => 'ε',
            Digit::One => '1',
        }
    }

    /// Check if this is a binary digit
    #[inline]
    pub fn is_bit(self) -> bool {
        self != Digit::Epsilon
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Code assigned to one leaf
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    digits: Vec<Digit>,
}

impl Code {
    /// Empty code
    pub fn new() -> Self {
        Self::default()
    }

    /// Digits, most significant first
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of digits
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Check if the code is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// New code with `digit` in front
    pub fn prepend(&self, digit: Digit) -> Self {
        let mut digits = Vec::with_capacity(self.digits.len() + 1);
        digits.push(digit);
        digits.extend_from_slice(&self.digits);
        Self { digits }
    }

    /// Number of ε symbols
    pub fn epsilons(&self) -> usize {
        self.digits.iter().filter(|d| !d.is_bit()).count()
    }

    /// Number of binary digits
    pub fn bits(&self) -> usize {
        self.digits.iter().filter(|d| d.is_bit()).count()
    }

    /// Grouped counter view
    ///
    /// Splits the word after every ε: each group is a bit string followed
    /// by its ε, the last group may be bits only.
    /// `0 0 ε ε` → `["00ε", "ε"]`, `0 ε 1` → `["0ε", "1"]`.
    pub fn groups(&self) -> Vec<String> {
        let mut groups = Vec::new();
        let mut current = String::new();
        for digit in &self.digits {
            current.push(digit.as_char());
            if *digit == Digit::Epsilon {
                groups.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }
}

impl From<Vec<Digit>> for Code {
    fn from(digits: Vec<Digit>) -> Self {
        Self { digits }
    }
}

impl FromIterator<Digit> for Code {
    fn from_iter<T: IntoIterator<Item = Digit>>(iter: T) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{digit}")?;
        }
        f.write_str("]")
    }
}
