//! Branching directions
//!
//! A direction only has to be partially ordered. Incomparable pairs surface
//! as `CodingError::IncomparableDirection` at the point they are compared.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

/// Symbol distinguishing one child subtree from another
///
/// Blanket-implemented for every type with the required capabilities.
pub trait Direction: Clone + Eq + Hash + PartialOrd + Debug {}

impl<T: Clone + Eq + Hash + PartialOrd + Debug> Direction for T {}

/// Dynamically typed direction, as read from text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    /// Integer direction
    Index(i64),

    /// Named direction
    Name(String),
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Label::Index(a), Label::Index(b)) => Some(a.cmp(b)),
            (Label::Name(a), Label::Name(b)) => Some(a.cmp(b)),
            // Indices and names have no common order
            _ => None,
        }
    }
}

impl FromStr for Label {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(index) => Label::Index(index),
            Err(_) => Label::Name(s.to_string()),
        })
    }
}

impl From<i64> for Label {
    fn from(index: i64) -> Self {
        Label::Index(index)
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label::Name(name.to_string())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Index(index) => write!(f, "{index}"),
            Label::Name(name) => f.write_str(name),
        }
    }
}
