use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStage {
    #[default]
    Draft,
    Editing,
    Reviewing,
    Complete,
}

impl fmt::Display for ReviewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReviewStage::Draft => "draft",
            ReviewStage::Editing => "editing",
            ReviewStage::Reviewing => "reviewing",
            ReviewStage::Complete => "complete",
        };
        write!(f, "{}", name)
    }
}
