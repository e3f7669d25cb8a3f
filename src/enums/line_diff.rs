use serde::{Deserialize, Serialize};

/// One grouped character-level span of a changed line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "tag")]
pub enum LineDiff {
    #[serde(rename = "unchanged")]
    Unchanged {
        text: String,
    },
    #[serde(rename = "removed")]
    Removed {
        text: String,
    },
    #[serde(rename = "replaced")]
    Replaced {
        removed: String,
        inserted: String,
    },
    #[serde(rename = "inserted")]
    Inserted {
        text: String,
    },
}

impl LineDiff {
    pub fn unchanged(text: &str) -> Self {
        LineDiff::Unchanged { text: text.to_string() }
    }

    pub fn removed(text: &str) -> Self {
        LineDiff::Removed { text: text.to_string() }
    }

    pub fn replaced(removed: &str, inserted: &str) -> Self {
        LineDiff::Replaced {
            removed: removed.to_string(),
            inserted: inserted.to_string(),
        }
    }

    pub fn inserted(text: &str) -> Self {
        LineDiff::Inserted { text: text.to_string() }
    }

    /// Text this span expects to find in the original line.
    pub fn old_text(&self) -> &str {
        match self {
            LineDiff::Unchanged { text } | LineDiff::Removed { text } => text,
            LineDiff::Replaced { removed, .. } => removed,
            LineDiff::Inserted { .. } => "",
        }
    }

    /// Text this span contributes to the modified line.
    pub fn new_text(&self) -> &str {
        match self {
            LineDiff::Unchanged { text } | LineDiff::Inserted { text } => text,
            LineDiff::Replaced { inserted, .. } => inserted,
            LineDiff::Removed { .. } => "",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LineDiff::Unchanged { text } => text.clone(),
            LineDiff::Removed { text } => format!("[-{}-]", text),
            LineDiff::Replaced { removed, inserted } => format!("[-{}-]{{+{}+}}", removed, inserted),
            LineDiff::Inserted { text } => format!("{{+{}+}}", text),
        }
    }
}
