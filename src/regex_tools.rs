//! Interactive regex testing with JS-style flags.

use regex::RegexBuilder;
use serde::Serialize;

use crate::error::ToolError;

/// One match, with byte offsets into the haystack and captured groups.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegexMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Numbered capture groups, `None` where a group did not participate.
    pub groups: Vec<Option<String>>,
}

/// Runs `pattern` against `haystack` with the flag string from the UI
/// (`g`, `i`, `m`, `s` in any combination). Without `g` only the first
/// match is returned.
pub fn test_regex(
    pattern: &str,
    flags: &str,
    haystack: &str,
) -> Result<Vec<RegexMatch>, ToolError> {
    let mut global = false;
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'g' => global = true,
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            other => {
                return Err(ToolError::InvalidPattern(format!(
                    "unsupported flag: {other}"
                )))
            }
        }
    }
    let regex = builder
        .build()
        .map_err(|err| ToolError::InvalidPattern(err.to_string()))?;

    let mut matches = Vec::new();
    for caps in regex.captures_iter(haystack) {
        let whole = caps.get(0).ok_or_else(|| {
            ToolError::InvalidPattern("match without a whole-match group".into())
        })?;
        matches.push(RegexMatch {
            start: whole.start(),
            end: whole.end(),
            text: whole.as_str().to_string(),
            groups: caps
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        });
        if !global {
            break;
        }
    }
    Ok(matches)
}
