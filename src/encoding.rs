//! Base64, URL, and HTML entity codecs.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

use crate::error::ToolError;

/// Uploaded files larger than this are rejected before encoding.
pub const MAX_FILE_BYTES: usize = 2_000_000;

/// How text maps to bytes for Base64 purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Latin-1 code points, one byte per char.
    Ascii,
}

impl TextEncoding {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "utf-8" | "utf8" => Some(Self::Utf8),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }
}

pub fn base64_encode(text: &str, encoding: TextEncoding) -> Result<String, ToolError> {
    let bytes = match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Ascii => text
            .chars()
            .map(|ch| {
                u8::try_from(ch as u32).map_err(|_| ToolError::InvalidEncoding("ascii".into()))
            })
            .collect::<Result<Vec<u8>, _>>()?,
    };
    Ok(STANDARD.encode(bytes))
}

pub fn base64_decode(data: &str, encoding: TextEncoding) -> Result<String, ToolError> {
    let bytes = STANDARD
        .decode(data.trim())
        .map_err(|_| ToolError::InvalidEncoding("base64".into()))?;
    match encoding {
        TextEncoding::Utf8 => {
            String::from_utf8(bytes).map_err(|_| ToolError::InvalidEncoding("utf-8".into()))
        }
        TextEncoding::Ascii => Ok(bytes.into_iter().map(|b| b as char).collect()),
    }
}

/// Encodes an uploaded file's bytes, refusing anything over [`MAX_FILE_BYTES`].
pub fn file_to_base64(bytes: &[u8]) -> Result<String, ToolError> {
    if bytes.len() > MAX_FILE_BYTES {
        return Err(ToolError::FileTooLarge(MAX_FILE_BYTES));
    }
    Ok(STANDARD.encode(bytes))
}

/// Which URL escaping convention to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMode {
    /// Escape everything outside the unreserved set (query components).
    Component,
    /// Keep URI structure characters (`;,/?:@&=+$#`) intact.
    Uri,
}

impl UrlMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "component" => Some(Self::Component),
            "uri" | "full" => Some(Self::Uri),
            _ => None,
        }
    }
}

pub fn url_encode(text: &str, mode: UrlMode, strip_whitespace: bool) -> String {
    let source: String = if strip_whitespace {
        text.chars().filter(|ch| !ch.is_whitespace()).collect()
    } else {
        text.to_string()
    };
    match mode {
        UrlMode::Component => urlencoding::encode(&source).into_owned(),
        UrlMode::Uri => encode_full_uri(&source),
    }
}

// Matches encodeURI: structure characters and the unreserved marks pass
// through, everything else is percent-encoded per UTF-8 byte.
fn encode_full_uri(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ";,/?:@&=+$#-_.!~*'()".contains(ch) {
            out.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).as_bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

pub fn url_decode(text: &str) -> Result<String, ToolError> {
    // urlencoding passes malformed percent sequences through unchanged, so
    // validate them up front.
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 3 > bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(ToolError::InvalidEncoding("url".into()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    urlencoding::decode(text)
        .map(|cow| cow.into_owned())
        .map_err(|_| ToolError::InvalidEncoding("url".into()))
}

/// Which characters HTML-encoding converts to entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlEncodeMode {
    /// Markup-significant characters and non-Latin codepoints only.
    Standard,
    /// Every non-alphanumeric character becomes a numeric entity.
    All,
}

impl HtmlEncodeMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::Standard),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

pub fn html_encode(text: &str, mode: HtmlEncodeMode) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let escape = match mode {
            HtmlEncodeMode::All => !ch.is_alphanumeric(),
            HtmlEncodeMode::Standard => {
                matches!(ch, '<' | '>' | '&') || (ch as u32) >= 0xA0
            }
        };
        if escape {
            out.push_str(&format!("&#{};", ch as u32));
        } else {
            out.push(ch);
        }
    }
    out
}

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{A0}'),
    ("copy", '\u{A9}'),
    ("reg", '\u{AE}'),
    ("trade", '\u{2122}'),
    ("hellip", '\u{2026}'),
    ("mdash", '\u{2014}'),
    ("ndash", '\u{2013}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201C}'),
    ("rdquo", '\u{201D}'),
    ("euro", '\u{20AC}'),
    ("pound", '\u{A3}'),
    ("cent", '\u{A2}'),
    ("yen", '\u{A5}'),
    ("sect", '\u{A7}'),
    ("deg", '\u{B0}'),
    ("plusmn", '\u{B1}'),
    ("times", '\u{D7}'),
    ("divide", '\u{F7}'),
];

/// Expands named, decimal, and hex entities; unknown entities pass through.
pub fn html_decode(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                NAMED_ENTITIES
                    .iter()
                    .find(|(name, _)| *name == body)
                    .map(|(_, ch)| *ch)
            };
            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Reflows HTML markup. `minify` and `beautify` are mutually exclusive;
/// with neither set the input is returned untouched.
pub fn format_html(html: &str, minify: bool, beautify: bool) -> Result<String, ToolError> {
    if minify && beautify {
        return Err(ToolError::input(
            "minify and beautify cannot both be enabled",
        ));
    }
    if minify {
        Ok(minify_html(html))
    } else if beautify {
        Ok(beautify_html(html))
    } else {
        Ok(html.to_string())
    }
}

fn minify_html(html: &str) -> String {
    let joined = html
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    tag_gap_regex().replace_all(&joined, "><").into_owned()
}

fn beautify_html(html: &str) -> String {
    let split = tag_gap_regex().replace_all(html.trim(), ">\n<");
    let mut out = Vec::new();
    let mut depth: usize = 0;
    for line in split.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("</") {
            depth = depth.saturating_sub(1);
        }
        out.push(format!("{}{}", "  ".repeat(depth), line));
        if opens_element(line) {
            depth += 1;
        }
    }
    out.join("\n")
}

// An opening tag with no matching close or self-close on the same line.
fn opens_element(line: &str) -> bool {
    line.starts_with('<')
        && !line.starts_with("</")
        && !line.starts_with("<!")
        && !line.ends_with("/>")
        && !line.contains("</")
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(#[xX]?[0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").unwrap())
}

fn tag_gap_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">\s+<").unwrap())
}
