//! Side-by-side text comparison for the diff viewer.
//!
//! Output is a flat list of segments rather than unified-diff hunks: the UI
//! renders added/removed/unchanged runs inline with color, so consecutive
//! changes of the same kind are merged into one segment.

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

use crate::error::ToolError;

/// Granularity of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffMode {
    Chars,
    Lines,
}

impl DiffMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "chars" | "characters" => Some(Self::Chars),
            "lines" => Some(Self::Lines),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// A maximal run of text with a single change kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub text: String,
    pub kind: SegmentKind,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffResult {
    pub segments: Vec<DiffSegment>,
    pub stats: DiffStats,
}

/// Compares `old_text` to `new_text` at the given granularity.
///
/// Removed segments carry old text, added segments carry new text, so
/// concatenating unchanged+removed reconstructs the old input and
/// unchanged+added reconstructs the new one.
pub fn generate_diff(old_text: &str, new_text: &str, mode: DiffMode) -> DiffResult {
    let segments = match mode {
        DiffMode::Chars => collect_segments(&TextDiff::from_chars(old_text, new_text)),
        DiffMode::Lines => collect_segments(&TextDiff::from_lines(old_text, new_text)),
    };
    let mut stats = DiffStats {
        added: 0,
        removed: 0,
        unchanged: 0,
    };
    for segment in &segments {
        match segment.kind {
            SegmentKind::Added => stats.added += 1,
            SegmentKind::Removed => stats.removed += 1,
            SegmentKind::Unchanged => stats.unchanged += 1,
        }
    }
    DiffResult { segments, stats }
}

fn collect_segments<'a>(diff: &TextDiff<'a, 'a, 'a, str>) -> Vec<DiffSegment> {
    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        };
        let text = change.to_string_lossy();
        match segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(&text),
            _ => segments.push(DiffSegment {
                text: text.into_owned(),
                kind,
            }),
        }
    }
    segments
}

/// Parses the mode name and runs the diff; the wasm boundary calls this.
pub fn diff_with_mode(old_text: &str, new_text: &str, mode: &str) -> Result<DiffResult, ToolError> {
    let mode = DiffMode::parse(mode)
        .ok_or_else(|| ToolError::input(format!("unknown diff mode: {mode}")))?;
    Ok(generate_diff(old_text, new_text, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(result: &DiffResult, include: SegmentKind) -> String {
        result
            .segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Unchanged || s.kind == include)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn identical_texts_are_one_segment() {
        let result = generate_diff("same", "same", DiffMode::Chars);
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].kind, SegmentKind::Unchanged);
        assert_eq!(result.stats.added, 0);
        assert_eq!(result.stats.removed, 0);
    }

    #[test]
    fn char_diff_merges_runs() {
        let result = generate_diff("Hello world", "Hi world", DiffMode::Chars);
        // "H" equal, "ello" removed, "i" added, " world" equal.
        assert_eq!(
            result.segments,
            vec![
                DiffSegment {
                    text: "H".into(),
                    kind: SegmentKind::Unchanged
                },
                DiffSegment {
                    text: "ello".into(),
                    kind: SegmentKind::Removed
                },
                DiffSegment {
                    text: "i".into(),
                    kind: SegmentKind::Added
                },
                DiffSegment {
                    text: " world".into(),
                    kind: SegmentKind::Unchanged
                },
            ]
        );
        assert_eq!(result.stats.added, 1);
        assert_eq!(result.stats.removed, 1);
        assert_eq!(result.stats.unchanged, 2);
    }

    #[test]
    fn reconstruction_invariant() {
        let old = "line 1\nline 2\nline 3\n";
        let new = "line 1\nline two\nline 3\nline 4\n";
        for mode in [DiffMode::Chars, DiffMode::Lines] {
            let result = generate_diff(old, new, mode);
            assert_eq!(reconstruct(&result, SegmentKind::Removed), old);
            assert_eq!(reconstruct(&result, SegmentKind::Added), new);
        }
    }

    #[test]
    fn line_diff_keeps_newlines_in_segments() {
        let result = generate_diff("a\nb\n", "a\nc\n", DiffMode::Lines);
        assert!(result
            .segments
            .iter()
            .any(|s| s.kind == SegmentKind::Removed && s.text == "b\n"));
        assert!(result
            .segments
            .iter()
            .any(|s| s.kind == SegmentKind::Added && s.text == "c\n"));
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(DiffMode::parse("chars"), Some(DiffMode::Chars));
        assert_eq!(DiffMode::parse("lines"), Some(DiffMode::Lines));
        assert!(diff_with_mode("a", "b", "words").is_err());
    }
}
