use serde::{Deserialize, Serialize};
use crate::enums::change_status::ChangeStatus;
use crate::enums::change_type::ChangeType;
use crate::structs::change::Change;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total_count: usize,

    // By change type
    pub addition_count: usize,
    pub deletion_count: usize,
    pub modification_count: usize,

    // By status
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
}

impl ReviewSummary {
    pub fn from_changes(changes: &[Change]) -> Self {
        let mut summary = Self { total_count: changes.len(), ..Self::default() };

        for change in changes {
            match change.change_type {
                ChangeType::Addition => summary.addition_count += 1,
                ChangeType::Deletion => summary.deletion_count += 1,
                ChangeType::Modification => summary.modification_count += 1,
            }
            match change.status {
                ChangeStatus::Pending => summary.pending_count += 1,
                ChangeStatus::Approved => summary.approved_count += 1,
                ChangeStatus::Rejected => summary.rejected_count += 1,
            }
        }

        summary
    }

    pub fn is_fully_reviewed(&self) -> bool {
        self.pending_count == 0
    }

    pub fn print_summary(&self) {
        println!("\n📊 Review Summary");
        println!("═══════════════════════════════════════");
        println!("📈 Total Changes: {}", self.total_count);

        println!("\n📝 By Change Type:");
        println!("   Additions: {}", self.addition_count);
        println!("   Deletions: {}", self.deletion_count);
        println!("   Modifications: {}", self.modification_count);

        println!("\n🗳️ By Status:");
        println!("   ⚪ Pending: {}", self.pending_count);
        println!("   ✓ Approved: {}", self.approved_count);
        println!("   ✗ Rejected: {}", self.rejected_count);
        println!("═══════════════════════════════════════\n");
    }

    pub fn print_compact_summary(&self) {
        println!("📊 {} changes | +{} -{} ~{} | ⚪{} ✓{} ✗{}",
                 self.total_count,
                 self.addition_count,
                 self.deletion_count,
                 self.modification_count,
                 self.pending_count,
                 self.approved_count,
                 self.rejected_count
        );
    }
}
