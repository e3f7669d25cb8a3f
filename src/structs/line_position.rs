use serde::{Deserialize, Serialize};

/// Zero-based, half-open range of original lines a change covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePosition {
    pub start: usize,
    pub end: usize,
}

impl LinePosition {
    pub fn for_index(index: usize) -> Self {
        Self { start: index, end: index + 1 }
    }
}
