//! Line diff between original and rewritten target buffers
//!
//! The engine never reports what it changed; callers that want to show
//! the user anything diff the before/after buffers here.

use similar::{ChangeTag, TextDiff};

/// A single line change in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// The type of change
    pub tag: DiffTag,
    /// Line number in the old version (if applicable)
    pub old_line: Option<usize>,
    /// Line number in the new version (if applicable)
    pub new_line: Option<usize>,
    /// The content of the line
    pub content: String,
}

/// Type of change in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffTag {
    /// Line was deleted
    Delete,
    /// Line was inserted
    Insert,
    /// Line is unchanged
    Equal,
}

impl From<ChangeTag> for DiffTag {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => DiffTag::Delete,
            ChangeTag::Insert => DiffTag::Insert,
            ChangeTag::Equal => DiffTag::Equal,
        }
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// All lines in the diff
    pub lines: Vec<DiffLine>,
    /// Number of lines added
    pub additions: usize,
    /// Number of lines deleted
    pub deletions: usize,
    /// Whether there are any changes
    pub has_changes: bool,
}

impl DiffResult {
    /// Unified diff summary (e.g., "+2, -2")
    pub fn summary(&self) -> String {
        format!("+{}, -{}", self.additions, self.deletions)
    }
}

/// Compute the line diff between two buffers.
pub fn diff(old: &str, new: &str) -> DiffResult {
    let text_diff = TextDiff::from_lines(old, new);

    let mut result = DiffResult::default();

    for change in text_diff.iter_all_changes() {
        let tag = DiffTag::from(change.tag());

        match tag {
            DiffTag::Delete => result.deletions += 1,
            DiffTag::Insert => result.additions += 1,
            DiffTag::Equal => {}
        }

        result.lines.push(DiffLine {
            tag,
            old_line: change.old_index().map(|i| i + 1),
            new_line: change.new_index().map(|i| i + 1),
            content: change.value().to_string(),
        });
    }

    result.has_changes = result.additions > 0 || result.deletions > 0;
    result
}
