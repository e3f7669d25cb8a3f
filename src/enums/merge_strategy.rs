use serde::{Deserialize, Serialize};

/// How approved spans are spliced back into the original lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// First-occurrence literal substring replacement per span.
    #[default]
    Literal,
    /// Cursor walk over the line; every span must match at its offset.
    Spliced,
}
