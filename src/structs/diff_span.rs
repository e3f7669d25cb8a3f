use serde::{Deserialize, Serialize};
use crate::enums::span_tag::SpanTag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSpan {
    pub tag: SpanTag,
    pub text: String,
}

impl DiffSpan {
    pub fn new(tag: SpanTag, text: &str) -> Self {
        Self { tag, text: text.to_string() }
    }

    pub fn unchanged(text: &str) -> Self {
        Self::new(SpanTag::Unchanged, text)
    }

    pub fn removed(text: &str) -> Self {
        Self::new(SpanTag::Removed, text)
    }

    pub fn inserted(text: &str) -> Self {
        Self::new(SpanTag::Inserted, text)
    }
}
