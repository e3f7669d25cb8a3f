use std::sync::Arc;
use crate::helpers::text_helper::TextHelper;
use crate::services::semantic_differ::SemanticDiffer;
use crate::services::span_grouper::SpanGrouper;
use crate::structs::change::Change;
use crate::traits::char_differ::CharDiffer;

/// Turns an original and a modified document into reviewable changes.
///
/// Lines are compared by position only: line `i` of the original against line
/// `i` of the modified text. An inserted or removed line therefore shows up as
/// a run of modifications on every following line instead of a single shift.
#[derive(Clone)]
pub struct DiffEngine {
    differ: Arc<dyn CharDiffer>,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(Arc::new(SemanticDiffer))
    }
}

impl DiffEngine {
    pub fn new(differ: Arc<dyn CharDiffer>) -> Self {
        Self { differ }
    }

    pub fn compute_changes(&self, original: &str, modified: &str) -> Vec<Change> {
        let old_lines = TextHelper::split_lines(original);
        let new_lines = TextHelper::split_lines(modified);
        let line_count = old_lines.len().max(new_lines.len());

        let mut changes = Vec::new();

        for i in 0..line_count {
            let old_line = old_lines.get(i).copied().unwrap_or("");
            let new_line = new_lines.get(i).copied().unwrap_or("");
            let sequence = changes.len();

            if old_line == new_line {
                continue;
            }

            let change = if old_line.is_empty() {
                Change::addition(sequence, i, new_line)
            } else if new_line.is_empty() {
                Change::deletion(sequence, i, old_line)
            } else {
                let spans = self.differ.diff_spans(old_line, new_line);
                Change::modification(sequence, i, old_line, new_line, SpanGrouper::group(&spans))
            };

            changes.push(change);
        }

        log::debug!(
            "🔍 Compared {} original / {} modified lines: {} changes",
            old_lines.len(),
            new_lines.len(),
            changes.len()
        );

        changes
    }
}
