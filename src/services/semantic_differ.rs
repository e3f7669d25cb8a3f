use dissimilar::Chunk;
use crate::structs::diff_span::DiffSpan;
use crate::traits::char_differ::CharDiffer;

/// Diff-match-patch style character diff with semantic cleanup, so small
/// fragmented edits come back as whole-word spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticDiffer;

impl CharDiffer for SemanticDiffer {
    fn diff_spans(&self, old: &str, new: &str) -> Vec<DiffSpan> {
        dissimilar::diff(old, new)
            .into_iter()
            .map(|chunk| match chunk {
                Chunk::Equal(text) => DiffSpan::unchanged(text),
                Chunk::Delete(text) => DiffSpan::removed(text),
                Chunk::Insert(text) => DiffSpan::inserted(text),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::span_tag::SpanTag;

    fn rebuild(spans: &[DiffSpan], skip: SpanTag) -> String {
        spans.iter().filter(|s| s.tag != skip).map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn single_character_substitution() {
        let spans = SemanticDiffer.diff_spans("B", "X");
        assert_eq!(spans, vec![DiffSpan::removed("B"), DiffSpan::inserted("X")]);
    }

    #[test]
    fn spans_rebuild_both_sides() {
        let old = "Payment is due within 30 days of invoice.";
        let new = "Payment is due within 45 calendar days of receipt.";
        let spans = SemanticDiffer.diff_spans(old, new);
        assert_eq!(rebuild(&spans, SpanTag::Inserted), old);
        assert_eq!(rebuild(&spans, SpanTag::Removed), new);
    }
}
