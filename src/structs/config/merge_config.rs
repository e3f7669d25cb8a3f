use serde::{Deserialize, Serialize};
use crate::enums::merge_strategy::MergeStrategy;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct MergeConfig {
    #[serde(default)]
    pub strategy: MergeStrategy,

    /// Turn the first unapplied span into an error instead of skipping it.
    #[serde(default)]
    pub strict: bool,
}
