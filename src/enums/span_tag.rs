use serde::{Deserialize, Serialize};

/// Tag produced by the character-level diff primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanTag {
    Unchanged,
    Removed,
    Inserted,
}
