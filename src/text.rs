//! Case conversion, slug generation, text reversal, and find/replace.
//!
//! All of these are total string transformations except the regex-backed
//! find/replace, which can reject a malformed pattern.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::ToolError;

/// Case styles offered by the case converter widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Snake,
    Kebab,
    Alternating,
}

impl CaseStyle {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "upper" => Some(Self::Upper),
            "lower" => Some(Self::Lower),
            "title" => Some(Self::Title),
            "sentence" => Some(Self::Sentence),
            "camel" => Some(Self::Camel),
            "snake" => Some(Self::Snake),
            "kebab" => Some(Self::Kebab),
            "alternating" => Some(Self::Alternating),
            _ => None,
        }
    }
}

/// Applies a case style. When `preserve_spacing` is false, whitespace runs are
/// collapsed to single spaces and the input is trimmed before converting.
pub fn convert_case(input: &str, style: CaseStyle, preserve_spacing: bool) -> String {
    let source = if preserve_spacing {
        input.to_string()
    } else {
        whitespace_run_regex()
            .replace_all(input, " ")
            .trim()
            .to_string()
    };
    match style {
        CaseStyle::Upper => source.to_uppercase(),
        CaseStyle::Lower => source.to_lowercase(),
        CaseStyle::Title => title_case(&source),
        CaseStyle::Sentence => sentence_case(&source),
        CaseStyle::Camel => camel_case(&source),
        CaseStyle::Snake => delimited_case(&source, "_"),
        CaseStyle::Kebab => delimited_case(&source, "-"),
        CaseStyle::Alternating => alternating_case(&source),
    }
}

fn title_case(input: &str) -> String {
    word_regex()
        .replace_all(input, |caps: &regex::Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .into_owned()
}

fn sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    // Capitalize the first word char at the start and directly after
    // sentence-ending punctuation (only whitespace may sit in between).
    let mut boundary = true;
    for ch in input.to_lowercase().chars() {
        if boundary && is_word_char(ch) {
            out.extend(ch.to_uppercase());
            boundary = false;
        } else if matches!(ch, '.' | '!' | '?') {
            boundary = true;
            out.push(ch);
        } else {
            if !ch.is_whitespace() {
                boundary = false;
            }
            out.push(ch);
        }
    }
    out
}

fn camel_case(input: &str) -> String {
    let lower = input.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut upper_next = false;
    for ch in lower.chars() {
        if ch == ' ' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn delimited_case(input: &str, separator: &str) -> String {
    whitespace_run_regex()
        .replace_all(input, separator)
        .to_lowercase()
}

fn alternating_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (idx, ch) in input.chars().enumerate() {
        if idx % 2 == 0 {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
    }
    out
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Options for [`slugify`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugOptions {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub preserve_case: bool,
    #[serde(default = "default_true")]
    pub trim: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            preserve_case: false,
            trim: true,
        }
    }
}

fn default_separator() -> String {
    "-".to_string()
}

pub(crate) fn default_true() -> bool {
    true
}

/// Derives a URL-safe slug: NFD-decompose, drop combining diacritics, drop
/// everything outside `[A-Za-z0-9_\s-]`, apply the case policy, then collapse
/// whitespace/underscore/hyphen runs into the chosen separator. Idempotent
/// for fixed options.
pub fn slugify(input: &str, options: &SlugOptions) -> String {
    let separator = match options.separator.as_str() {
        "_" => '_',
        _ => '-',
    };
    let mut cleaned = String::with_capacity(input.len());
    for ch in input.nfd() {
        if ('\u{0300}'..='\u{036f}').contains(&ch) {
            continue;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch.is_whitespace() {
            cleaned.push(ch);
        }
    }
    let cased = if options.preserve_case {
        cleaned
    } else {
        cleaned.to_lowercase()
    };
    // Whitespace/underscore runs and hyphen runs both become the separator,
    // then repeated separators collapse so double application is a no-op.
    let sep_str = separator.to_string();
    let replaced = space_underscore_regex().replace_all(&cased, sep_str.as_str());
    let replaced = hyphen_run_regex().replace_all(&replaced, sep_str.as_str());
    let mut slug = String::with_capacity(replaced.len());
    let mut prev_sep = false;
    for ch in replaced.chars() {
        if ch == separator {
            if prev_sep {
                continue;
            }
            prev_sep = true;
        } else {
            prev_sep = false;
        }
        slug.push(ch);
    }
    if options.trim {
        slug.trim_matches(separator).to_string()
    } else {
        slug
    }
}

/// Options for [`reverse_text`].
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseOptions {
    #[serde(default = "default_true")]
    pub preserve_spacing: bool,
    #[serde(default)]
    pub reverse_words: bool,
    #[serde(default)]
    pub reverse_lines: bool,
}

impl Default for ReverseOptions {
    fn default() -> Self {
        Self {
            preserve_spacing: true,
            reverse_words: false,
            reverse_lines: false,
        }
    }
}

/// Reverses text. The stages run in a fixed order: line order, then
/// space-delimited word order, then optional whitespace stripping, and
/// finally the character sequence is always reversed.
pub fn reverse_text(input: &str, options: &ReverseOptions) -> String {
    let mut result = input.to_string();
    if options.reverse_lines {
        result = result.split('\n').rev().collect::<Vec<_>>().join("\n");
    }
    if options.reverse_words {
        result = result.split(' ').rev().collect::<Vec<_>>().join(" ");
    }
    if !options.preserve_spacing {
        result.retain(|ch| !ch.is_whitespace());
    }
    result.chars().rev().collect()
}

/// Result of a find/replace pass.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FindReplaceResult {
    pub output: String,
    pub match_count: usize,
}

/// Replaces every occurrence of `find` in `text`. In literal mode the pattern
/// is escaped and the replacement is taken verbatim; in regex mode `$1`-style
/// group references work. An empty pattern matches nothing.
pub fn find_replace(
    text: &str,
    find: &str,
    replace: &str,
    case_sensitive: bool,
    use_regex: bool,
) -> Result<FindReplaceResult, ToolError> {
    if find.is_empty() {
        return Ok(FindReplaceResult {
            output: text.to_string(),
            match_count: 0,
        });
    }
    let pattern = if use_regex {
        find.to_string()
    } else {
        regex::escape(find)
    };
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|err| ToolError::InvalidPattern(err.to_string()))?;
    let match_count = re.find_iter(text).count();
    let output = if use_regex {
        re.replace_all(text, replace).into_owned()
    } else {
        re.replace_all(text, regex::NoExpand(replace)).into_owned()
    };
    Ok(FindReplaceResult {
        output,
        match_count,
    })
}

fn whitespace_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w\S*").unwrap())
}

fn space_underscore_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s_]+").unwrap())
}

fn hyphen_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_and_kebab_and_camel() {
        assert_eq!(
            convert_case("Hello World", CaseStyle::Snake, true),
            "hello_world"
        );
        assert_eq!(
            convert_case("Hello World", CaseStyle::Kebab, true),
            "hello-world"
        );
        assert_eq!(
            convert_case("Hello World", CaseStyle::Camel, true),
            "helloWorld"
        );
    }

    #[test]
    fn title_capitalizes_each_word() {
        assert_eq!(
            convert_case("hello wORLD again", CaseStyle::Title, true),
            "Hello World Again"
        );
    }

    #[test]
    fn sentence_capitalizes_after_terminators() {
        assert_eq!(
            convert_case("first. second! third? fourth", CaseStyle::Sentence, true),
            "First. Second! Third? Fourth"
        );
    }

    #[test]
    fn alternating_over_raw_characters() {
        assert_eq!(
            convert_case("abcdef", CaseStyle::Alternating, true),
            "aBcDeF"
        );
    }

    #[test]
    fn upper_of_lower_matches_upper() {
        let input = "The Quick BROWN fox";
        let lowered = convert_case(input, CaseStyle::Lower, true);
        assert_eq!(
            convert_case(&lowered, CaseStyle::Upper, true),
            convert_case(input, CaseStyle::Upper, true)
        );
    }

    #[test]
    fn collapsed_spacing_applies_before_conversion() {
        assert_eq!(
            convert_case("  hello   world  ", CaseStyle::Snake, false),
            "hello_world"
        );
    }

    #[test]
    fn slug_strips_diacritics_and_specials() {
        let options = SlugOptions::default();
        assert_eq!(
            slugify("Hello Wörld! 2024 Report", &options),
            "hello-world-2024-report"
        );
    }

    #[test]
    fn slug_underscore_separator() {
        let options = SlugOptions {
            separator: "_".to_string(),
            ..SlugOptions::default()
        };
        assert_eq!(slugify("Hello Wörld! 2024 Report", &options), "hello_world_2024_report");
    }

    #[test]
    fn slug_is_idempotent() {
        for separator in ["-", "_"] {
            let options = SlugOptions {
                separator: separator.to_string(),
                ..SlugOptions::default()
            };
            let once = slugify("  Crème  brûlée -- du_jour!  ", &options);
            assert_eq!(slugify(&once, &options), once);
        }
    }

    #[test]
    fn slug_preserves_case_when_asked() {
        let options = SlugOptions {
            preserve_case: true,
            ..SlugOptions::default()
        };
        assert_eq!(slugify("Hello World", &options), "Hello-World");
    }

    #[test]
    fn slug_trim_toggle() {
        let keep = SlugOptions {
            trim: false,
            ..SlugOptions::default()
        };
        assert_eq!(slugify("  hello  ", &keep), "-hello-");
        assert_eq!(slugify("  hello  ", &SlugOptions::default()), "hello");
    }

    #[test]
    fn reverse_characters() {
        let reversed = reverse_text("Hello World!", &ReverseOptions::default());
        assert_eq!(reversed, "!dlroW olleH");
    }

    #[test]
    fn reverse_words_then_characters() {
        let options = ReverseOptions {
            reverse_words: true,
            ..ReverseOptions::default()
        };
        // Word order flips first, then the character pass flips everything.
        assert_eq!(reverse_text("ab cd", &options), "ba dc");
    }

    #[test]
    fn reverse_lines_keeps_line_content() {
        let options = ReverseOptions {
            reverse_lines: true,
            ..ReverseOptions::default()
        };
        assert_eq!(reverse_text("ab\ncd", &options), "ba\ndc");
    }

    #[test]
    fn reverse_strips_whitespace_when_asked() {
        let options = ReverseOptions {
            preserve_spacing: false,
            ..ReverseOptions::default()
        };
        assert_eq!(reverse_text("a b\tc", &options), "cba");
    }

    #[test]
    fn find_replace_literal_counts_matches() {
        let result = find_replace("one two ONE", "one", "1", false, false).unwrap();
        assert_eq!(result.output, "1 two 1");
        assert_eq!(result.match_count, 2);
    }

    #[test]
    fn find_replace_case_sensitive() {
        let result = find_replace("one two ONE", "one", "1", true, false).unwrap();
        assert_eq!(result.output, "1 two ONE");
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn find_replace_literal_dollar_is_verbatim() {
        let result = find_replace("price", "price", "$1", true, false).unwrap();
        assert_eq!(result.output, "$1");
    }

    #[test]
    fn find_replace_regex_groups() {
        let result = find_replace("2024-01-31", r"(\d{4})-(\d{2})", "$2/$1", true, true).unwrap();
        assert_eq!(result.output, "01/2024-31");
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn find_replace_rejects_bad_pattern() {
        let err = find_replace("text", "[", "", true, true).unwrap_err();
        assert!(matches!(err, ToolError::InvalidPattern(_)));
    }

    #[test]
    fn find_replace_empty_pattern_is_noop() {
        let result = find_replace("text", "", "x", true, true).unwrap();
        assert_eq!(result.output, "text");
        assert_eq!(result.match_count, 0);
    }
}
