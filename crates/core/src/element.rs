//! The five elements (五行)

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the five element categories.
///
/// Declaration order matters: it is the iteration order of every element
/// table and the tie-break order when picking a dominant element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const COUNT: usize = 5;

    /// All elements in declaration order: 木, 火, 土, 金, 水.
    pub const ALL: [Element; Element::COUNT] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// Position in [`Element::ALL`].
    pub fn ordinal(&self) -> usize {
        *self as usize
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Element::ALL.into_iter().find(|e| e.symbol() == symbol)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::from_symbol(s).ok_or_else(|| DomainError::UnknownElement(s.to_string()))
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
