use crate::enums::change_type::ChangeType;
use crate::enums::line_diff::LineDiff;
use crate::enums::merge_strategy::MergeStrategy;
use crate::errors::ReviewResult;
use crate::helpers::text_helper::{LineEnding, TextHelper};
use crate::structs::change::Change;
use crate::structs::config::merge_config::MergeConfig;
use crate::structs::merge_outcome::MergeOutcome;
use crate::structs::unapplied_span::UnappliedSpan;

/// Rebuilds the final document from the original text and the approved
/// changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeApplier {
    strategy: MergeStrategy,
    strict: bool,
}

impl MergeApplier {
    pub fn new(strategy: MergeStrategy, strict: bool) -> Self {
        Self { strategy, strict }
    }

    pub fn from_config(config: &MergeConfig) -> Self {
        Self::new(config.strategy, config.strict)
    }

    /// Applies `approved` to `original`.
    ///
    /// Additions past the end of the original are appended first, in
    /// ascending order. Everything else runs in descending line order so a
    /// splice never moves a line that is still waiting to be edited. A
    /// deleted line stays in the output as an empty line. An in-range
    /// addition is inserted before the blank line it was aligned with under
    /// `Literal`, and fills that blank line under `Spliced`.
    pub fn apply_changes(&self, original: &str, approved: &[Change]) -> ReviewResult<MergeOutcome> {
        let ending = LineEnding::detect(original);
        let mut lines: Vec<String> = TextHelper::split_lines(original)
            .into_iter()
            .map(String::from)
            .collect();
        let original_len = lines.len();
        let mut outcome = MergeOutcome::default();

        let (mut appends, mut in_place): (Vec<&Change>, Vec<&Change>) = approved
            .iter()
            .partition(|change| change.change_type == ChangeType::Addition && change.line_index() >= original_len);
        appends.sort_by_key(|change| change.line_number);
        in_place.sort_by(|a, b| b.line_number.cmp(&a.line_number));

        for change in appends {
            let index = change.line_index();
            while lines.len() < index {
                lines.push(String::new());
            }
            lines.insert(index, change.text.clone());
            outcome.applied += 1;
        }

        for change in in_place {
            let index = change.line_index();

            if index >= original_len {
                self.record(&mut outcome, UnappliedSpan::new(
                    &change.id,
                    change.line_number,
                    &change.render_inline(),
                    &format!("line is outside the original document ({} lines)", original_len),
                ))?;
                continue;
            }

            if change.change_type == ChangeType::Addition {
                match self.strategy {
                    MergeStrategy::Literal => lines.insert(index, change.text.clone()),
                    MergeStrategy::Spliced if lines[index].is_empty() => lines[index] = change.text.clone(),
                    MergeStrategy::Spliced => {
                        self.record(&mut outcome, UnappliedSpan::new(
                            &change.id,
                            change.line_number,
                            &change.render_inline(),
                            "expected an empty line to fill",
                        ))?;
                        continue;
                    }
                }
                outcome.applied += 1;
                continue;
            }

            let (merged, failures) = match self.strategy {
                MergeStrategy::Literal => Self::apply_literal(change, &lines[index]),
                MergeStrategy::Spliced => match Self::apply_spliced(change, &lines[index]) {
                    Ok(merged) => (merged, Vec::new()),
                    Err(failure) => (lines[index].clone(), vec![failure]),
                },
            };

            if failures.is_empty() {
                outcome.applied += 1;
            }
            for failure in failures {
                self.record(&mut outcome, failure)?;
            }
            lines[index] = merged;
        }

        outcome.text = TextHelper::join_lines(&lines, ending);

        log::info!(
            "🔀 Merged {} of {} approved changes ({} spans not applied)",
            outcome.applied,
            approved.len(),
            outcome.unapplied.len()
        );

        Ok(outcome)
    }

    fn record(&self, outcome: &mut MergeOutcome, failure: UnappliedSpan) -> ReviewResult<()> {
        log::warn!(
            "⚠️ {} line {}: could not apply {}: {}",
            failure.change_id,
            failure.line_number,
            failure.span,
            failure.reason
        );
        if self.strict {
            return Err(failure.into());
        }
        outcome.unapplied.push(failure);
        Ok(())
    }

    /// First-occurrence substring edits, one span at a time. A span that no
    /// longer matches the line is skipped and reported.
    fn apply_literal(change: &Change, line: &str) -> (String, Vec<UnappliedSpan>) {
        let mut current = line.to_string();
        let mut failures = Vec::new();

        for (i, span) in change.line_diffs.iter().enumerate() {
            let applied = match span {
                LineDiff::Unchanged { .. } => true,
                LineDiff::Removed { text } => replace_first(&mut current, text, ""),
                LineDiff::Replaced { removed, inserted } => replace_first(&mut current, removed, inserted),
                LineDiff::Inserted { text } => {
                    let position = match i.checked_sub(1).map(|prev| &change.line_diffs[prev]) {
                        None => Some(0),
                        Some(LineDiff::Unchanged { text: anchor }) => {
                            current.find(anchor.as_str()).map(|at| at + anchor.len())
                        }
                        Some(_) => None,
                    };
                    match position {
                        Some(at) => {
                            current.insert_str(at, text);
                            true
                        }
                        None => false,
                    }
                }
            };

            if !applied {
                failures.push(UnappliedSpan::new(
                    &change.id,
                    change.line_number,
                    &span.describe(),
                    "text not found in current line",
                ));
            }
        }

        (current, failures)
    }

    /// Offset-tracked splice: every span must match the line at the cursor.
    fn apply_spliced(change: &Change, line: &str) -> Result<String, UnappliedSpan> {
        let mut cursor = 0;
        let mut merged = String::with_capacity(line.len() + change.text.len());

        for span in &change.line_diffs {
            let expected = span.old_text();
            if !line[cursor..].starts_with(expected) {
                return Err(UnappliedSpan::new(
                    &change.id,
                    change.line_number,
                    &span.describe(),
                    &format!("expected '{}' at column {}", expected, cursor),
                ));
            }
            cursor += expected.len();
            merged.push_str(span.new_text());
        }

        merged.push_str(&line[cursor..]);
        Ok(merged)
    }
}

fn replace_first(line: &mut String, from: &str, to: &str) -> bool {
    match line.find(from) {
        Some(at) => {
            line.replace_range(at..at + from.len(), to);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReviewError;

    fn modification(index: usize, old: &str, new: &str, spans: Vec<LineDiff>) -> Change {
        Change::modification(0, index, old, new, spans)
    }

    #[test]
    fn replacement_span_is_substituted() {
        let change = modification(1, "B", "X", vec![LineDiff::replaced("B", "X")]);
        let outcome = MergeApplier::default().apply_changes("A\nB\nC", &[change]).unwrap();
        assert_eq!(outcome.text, "A\nX\nC");
        assert_eq!(outcome.applied, 1);
        assert!(outcome.is_clean());
    }

    #[test]
    fn insertion_lands_after_preceding_unchanged_text() {
        let change = modification(0, "Net days", "Net 30 days", vec![
            LineDiff::unchanged("Net "),
            LineDiff::inserted("30 "),
            LineDiff::unchanged("days"),
        ]);
        let outcome = MergeApplier::default().apply_changes("Net days", &[change]).unwrap();
        assert_eq!(outcome.text, "Net 30 days");
    }

    #[test]
    fn leading_insertion_goes_to_column_zero() {
        let change = modification(0, "world", "hello world", vec![
            LineDiff::inserted("hello "),
            LineDiff::unchanged("world"),
        ]);
        let outcome = MergeApplier::default().apply_changes("world", &[change]).unwrap();
        assert_eq!(outcome.text, "hello world");
    }

    #[test]
    fn deletion_leaves_an_empty_line() {
        let change = Change::deletion(0, 1, "B");
        let outcome = MergeApplier::default().apply_changes("A\nB\nC", &[change]).unwrap();
        assert_eq!(outcome.text, "A\n\nC");
    }

    #[test]
    fn in_range_addition_shifts_following_lines() {
        let change = Change::addition(0, 1, "B");
        let outcome = MergeApplier::default().apply_changes("A\n\nC", &[change]).unwrap();
        assert_eq!(outcome.text, "A\nB\n\nC");
    }

    #[test]
    fn spliced_addition_fills_the_blank_line() {
        let changes = crate::services::diff_engine::DiffEngine::default()
            .compute_changes("Clause 1\n\nClause 3", "Clause 1\nClause 2\nClause 3");
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].change_type, ChangeType::Addition);

        let spliced = MergeApplier::new(MergeStrategy::Spliced, true)
            .apply_changes("Clause 1\n\nClause 3", &changes)
            .unwrap();
        assert_eq!(spliced.text, "Clause 1\nClause 2\nClause 3");

        let literal = MergeApplier::default().apply_changes("Clause 1\n\nClause 3", &changes).unwrap();
        assert_eq!(literal.text, "Clause 1\nClause 2\n\nClause 3");
    }

    #[test]
    fn spliced_addition_over_text_is_reported() {
        let change = Change::addition(0, 1, "B");
        let outcome = MergeApplier::new(MergeStrategy::Spliced, false).apply_changes("A\nZ\nC", &[change]).unwrap();
        assert_eq!(outcome.text, "A\nZ\nC");
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.unapplied[0].change_id, "change-0");
    }

    #[test]
    fn lone_removed_span_is_cut_literally() {
        let change = modification(0, "Net 30 days", "Net days", vec![
            LineDiff::unchanged("Net "),
            LineDiff::removed("30 "),
            LineDiff::unchanged("days"),
        ]);
        let outcome = MergeApplier::new(MergeStrategy::Literal, true).apply_changes("Net 30 days", &[change]).unwrap();
        assert_eq!(outcome.text, "Net days");
        assert_eq!(outcome.applied, 1);
        assert!(outcome.is_clean());
    }

    #[test]
    fn literal_insertion_after_an_edit_is_reported() {
        let change = modification(0, "one", "two three", vec![
            LineDiff::replaced("one", "two"),
            LineDiff::inserted(" three"),
        ]);
        let outcome = MergeApplier::new(MergeStrategy::Literal, false).apply_changes("one", &[change]).unwrap();
        assert_eq!(outcome.text, "two");
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.unapplied.len(), 1);
        assert_eq!(outcome.unapplied[0].span, "{+ three+}");
    }

    #[test]
    fn trailing_additions_are_appended_in_order() {
        let changes = [Change::addition(0, 1, "B"), Change::addition(1, 2, "C")];
        let outcome = MergeApplier::default().apply_changes("A", &changes).unwrap();
        assert_eq!(outcome.text, "A\nB\nC");
    }

    #[test]
    fn literal_mismatch_is_skipped_and_reported() {
        let change = modification(0, "alpha", "beta", vec![LineDiff::replaced("gamma", "beta")]);
        let outcome = MergeApplier::default().apply_changes("alpha", &[change]).unwrap();
        assert_eq!(outcome.text, "alpha");
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.unapplied.len(), 1);
        assert_eq!(outcome.unapplied[0].line_number, 1);
    }

    #[test]
    fn literal_replaces_first_occurrence_only() {
        // "aba" -> "abc": the removed "a" also occurs at column 0
        let change = modification(0, "aba", "abc", vec![
            LineDiff::unchanged("ab"),
            LineDiff::replaced("a", "c"),
        ]);
        let literal = MergeApplier::new(MergeStrategy::Literal, false)
            .apply_changes("aba", std::slice::from_ref(&change))
            .unwrap();
        assert_eq!(literal.text, "cba");

        let spliced = MergeApplier::new(MergeStrategy::Spliced, false)
            .apply_changes("aba", &[change])
            .unwrap();
        assert_eq!(spliced.text, "abc");
    }

    #[test]
    fn spliced_mismatch_leaves_line_untouched() {
        let change = modification(0, "alpha beta", "alpha gamma", vec![
            LineDiff::unchanged("alpha "),
            LineDiff::replaced("beta", "gamma"),
        ]);
        let outcome = MergeApplier::new(MergeStrategy::Spliced, false)
            .apply_changes("omega beta", &[change])
            .unwrap();
        assert_eq!(outcome.text, "omega beta");
        assert_eq!(outcome.unapplied.len(), 1);
    }

    #[test]
    fn strict_mode_turns_mismatch_into_error() {
        let change = modification(0, "alpha", "beta", vec![LineDiff::replaced("gamma", "beta")]);
        let result = MergeApplier::new(MergeStrategy::Literal, true).apply_changes("alpha", &[change]);
        assert!(matches!(result, Err(ReviewError::UnappliedSpan { .. })));
    }

    #[test]
    fn crlf_original_keeps_its_line_endings() {
        let change = modification(1, "B", "X", vec![LineDiff::replaced("B", "X")]);
        let outcome = MergeApplier::default().apply_changes("A\r\nB\r\nC", &[change]).unwrap();
        assert_eq!(outcome.text, "A\r\nX\r\nC");
    }

    #[test]
    fn change_beyond_original_is_reported() {
        let change = modification(7, "H", "I", vec![LineDiff::replaced("H", "I")]);
        let outcome = MergeApplier::default().apply_changes("A", &[change]).unwrap();
        assert_eq!(outcome.text, "A");
        assert_eq!(outcome.unapplied.len(), 1);
    }
}
