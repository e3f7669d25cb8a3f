use crate::enums::change_type::ChangeType;
use crate::enums::line_diff::LineDiff;
use crate::structs::change::Change;
use crate::structs::merge_outcome::MergeOutcome;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

pub struct ChangeLogger {
    color: bool,
}

impl ChangeLogger {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn print_changes(&self, changes: &[Change]) {
        println!("🔧 CHANGES ({} total):", changes.len());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for change in changes {
            println!("{}", self.format_change(change));
        }
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    pub fn format_change(&self, change: &Change) -> String {
        let header = format!(
            "\n@@ Line {} @@ {} {} [{}]",
            change.line_number,
            change.status.symbol(),
            change.change_type,
            change.id
        );

        let body = match change.change_type {
            ChangeType::Addition => self.paint(GREEN, &format!("+ {:<4} | {}", change.line_number, change.text)),
            ChangeType::Deletion => self.paint(RED, &format!("- {:<4} | {}", change.line_number, change.old_text)),
            ChangeType::Modification => format!("~ {:<4} | {}", change.line_number, self.format_spans(&change.line_diffs)),
        };

        format!("{}\n{}", header, body)
    }

    /// Inline rendering; with colour off it falls back to `[-old-]{+new+}`.
    pub fn format_spans(&self, spans: &[LineDiff]) -> String {
        if !self.color {
            return spans.iter().map(LineDiff::describe).collect();
        }

        spans.iter()
            .map(|span| match span {
                LineDiff::Unchanged { text } => text.clone(),
                LineDiff::Removed { text } => self.paint(RED, text),
                LineDiff::Replaced { removed, inserted } => {
                    format!("{}{}", self.paint(RED, removed), self.paint(GREEN, inserted))
                }
                LineDiff::Inserted { text } => self.paint(GREEN, text),
            })
            .collect()
    }

    pub fn print_merge_report(&self, outcome: &MergeOutcome) {
        println!("\n🔀 MERGE RESULT");
        println!("   Applied changes: {}", outcome.applied);
        if !outcome.is_clean() {
            println!("   ⚠️ {} spans could not be applied:", outcome.unapplied.len());
            for failure in &outcome.unapplied {
                println!("      {} line {}: {} ({})", failure.change_id, failure.line_number, failure.span, failure.reason);
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}
