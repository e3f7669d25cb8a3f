use crate::enums::line_diff::LineDiff;
use crate::enums::span_tag::SpanTag;
use crate::structs::diff_span::DiffSpan;

pub struct SpanGrouper;

impl SpanGrouper {
    /// Folds raw character spans into reviewable line spans.
    ///
    /// A removal directly followed by an insertion becomes one `Replaced`
    /// span. Any other insertion is kept as `Inserted`; an insertion that
    /// follows a removal is never emitted on its own. Empty spans are dropped.
    pub fn group(spans: &[DiffSpan]) -> Vec<LineDiff> {
        let mut grouped = Vec::with_capacity(spans.len());
        let mut iter = spans.iter().filter(|span| !span.text.is_empty()).peekable();

        while let Some(span) = iter.next() {
            match span.tag {
                SpanTag::Unchanged => grouped.push(LineDiff::unchanged(&span.text)),
                SpanTag::Removed => match iter.next_if(|next| next.tag == SpanTag::Inserted) {
                    Some(insert) => grouped.push(LineDiff::replaced(&span.text, &insert.text)),
                    None => grouped.push(LineDiff::removed(&span.text)),
                },
                SpanTag::Inserted => grouped.push(LineDiff::inserted(&span.text)),
            }
        }

        grouped
    }
}
