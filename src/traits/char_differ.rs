use crate::structs::diff_span::DiffSpan;

/// Character-level diff primitive used for modified lines.
///
/// Implementations return spans in source order. Concatenating the unchanged
/// and removed spans must give `old`; concatenating unchanged and inserted
/// spans must give `new`.
#[cfg_attr(test, mockall::automock)]
pub trait CharDiffer: Send + Sync {
    fn diff_spans(&self, old: &str, new: &str) -> Vec<DiffSpan>;
}
