use console_error_panic_hook::set_once as set_panic_hook;
use wasm_bindgen::prelude::*;

pub mod color;
pub mod convert;
pub mod debounce;
pub mod diff;
pub mod encoding;
pub mod error;
pub mod feedback;
pub mod generate;
pub mod qr;
pub mod regex_tools;
pub mod security;
pub mod stats;
pub mod text;


pub use debounce::RevisionGate;
use error::ToolError;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
}

pub(crate) fn fill_random(buf: &mut [u8]) {
    getrandom::fill(buf).expect("randomness available");
}

pub(crate) fn random_u32() -> u32 {
    let mut bytes = [0u8; 4];
    fill_random(&mut bytes);
    u32::from_ne_bytes(bytes)
}

fn to_js_error(err: ToolError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn convert_text_case(
    input: &str,
    style: &str,
    preserve_spacing: bool,
) -> Result<String, JsValue> {
    let style = text::CaseStyle::parse(style)
        .ok_or_else(|| JsValue::from_str(&format!("unknown case style: {style}")))?;
    Ok(text::convert_case(input, style, preserve_spacing))
}

#[wasm_bindgen]
pub fn slugify_text(input: &str, separator: &str, preserve_case: bool, trim: bool) -> String {
    let options = text::SlugOptions {
        separator: separator.to_string(),
        preserve_case,
        trim,
    };
    text::slugify(input, &options)
}

#[wasm_bindgen]
pub fn reverse_text_content(
    input: &str,
    preserve_spacing: bool,
    reverse_words: bool,
    reverse_lines: bool,
) -> String {
    let options = text::ReverseOptions {
        preserve_spacing,
        reverse_words,
        reverse_lines,
    };
    text::reverse_text(input, &options)
}

#[wasm_bindgen]
pub fn find_replace_text(
    input: &str,
    find: &str,
    replace: &str,
    case_sensitive: bool,
    use_regex: bool,
) -> Result<JsValue, JsValue> {
    let result = text::find_replace(input, find, replace, case_sensitive, use_regex)
        .map_err(to_js_error)?;
    to_js_value(&result)
}

#[wasm_bindgen]
pub fn analyze_text_content(
    input: &str,
    include_whitespace: bool,
    include_punctuation: bool,
) -> Result<JsValue, JsValue> {
    let options = stats::StatsOptions {
        include_whitespace,
        include_punctuation,
    };
    to_js_value(&stats::analyze_text(input, &options))
}

fn parse_text_encoding(name: &str) -> Result<encoding::TextEncoding, JsValue> {
    encoding::TextEncoding::parse(name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown text encoding: {name}")))
}

#[wasm_bindgen]
pub fn base64_encode_text(input: &str, encoding_name: &str) -> Result<String, JsValue> {
    encoding::base64_encode(input, parse_text_encoding(encoding_name)?).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn base64_decode_text(input: &str, encoding_name: &str) -> Result<String, JsValue> {
    encoding::base64_decode(input, parse_text_encoding(encoding_name)?).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn file_to_base64_content(bytes: &[u8]) -> Result<String, JsValue> {
    encoding::file_to_base64(bytes).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn url_encode_text(input: &str, mode: &str, strip_whitespace: bool) -> Result<String, JsValue> {
    let mode = encoding::UrlMode::parse(mode)
        .ok_or_else(|| JsValue::from_str(&format!("unknown URL mode: {mode}")))?;
    Ok(encoding::url_encode(input, mode, strip_whitespace))
}

#[wasm_bindgen]
pub fn url_decode_text(input: &str) -> Result<String, JsValue> {
    encoding::url_decode(input).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn html_encode_text(input: &str, mode: &str) -> Result<String, JsValue> {
    let mode = encoding::HtmlEncodeMode::parse(mode)
        .ok_or_else(|| JsValue::from_str(&format!("unknown HTML encode mode: {mode}")))?;
    Ok(encoding::html_encode(input, mode))
}

#[wasm_bindgen]
pub fn html_decode_text(input: &str) -> String {
    encoding::html_decode(input)
}

#[wasm_bindgen]
pub fn format_html_text(input: &str, minify: bool, beautify: bool) -> Result<String, JsValue> {
    encoding::format_html(input, minify, beautify).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn transform_format(from: &str, to: &str, input: &str) -> Result<String, JsValue> {
    convert::convert_formats(from, to, input).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn format_content_text(format: &str, input: &str, minify: bool) -> Result<String, JsValue> {
    convert::format_content(format, input, minify).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn parse_color(input: &str) -> Result<JsValue, JsValue> {
    let color = color::Color::parse(input)
        .ok_or_else(|| JsValue::from_str("unrecognized color value"))?;
    to_js_value(&color::color_formats(color))
}

#[wasm_bindgen]
#[allow(clippy::fn_params_excessive_bools)]
pub fn generate_password_text(
    length: u32,
    uppercase: bool,
    lowercase: bool,
    digits: bool,
    symbols: bool,
    exclude_similar: bool,
) -> Result<Option<String>, JsValue> {
    let options = generate::PasswordOptions {
        uppercase,
        lowercase,
        digits,
        symbols,
        exclude_similar,
    };
    generate::generate_password(length as usize, &options).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn password_strength_score(password: &str) -> u8 {
    generate::password_strength(password)
}

#[wasm_bindgen]
pub fn lorem_ipsum_text(paragraphs: u32) -> Result<String, JsValue> {
    generate::lorem_ipsum(paragraphs as usize).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn generate_qr_grid(data: &str, ec_level: &str) -> Result<JsValue, JsValue> {
    let grid = qr::generate_qr(data, ec_level).map_err(to_js_error)?;
    to_js_value(&grid)
}

#[wasm_bindgen]
pub fn generate_text_diff(old_text: &str, new_text: &str, mode: &str) -> Result<JsValue, JsValue> {
    let result = diff::diff_with_mode(old_text, new_text, mode).map_err(to_js_error)?;
    to_js_value(&result)
}

#[wasm_bindgen]
pub fn test_regex_pattern(pattern: &str, flags: &str, haystack: &str) -> Result<JsValue, JsValue> {
    let matches = regex_tools::test_regex(pattern, flags, haystack).map_err(to_js_error)?;
    to_js_value(&matches)
}

#[wasm_bindgen]
pub fn bcrypt_hash_password(
    password: &str,
    cost: u32,
    salt: Option<String>,
) -> Result<String, JsValue> {
    security::bcrypt_hash(password, cost, salt.as_deref()).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn bcrypt_verify_password(password: &str, hash: &str) -> Result<bool, JsValue> {
    security::bcrypt_verify(password, hash).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn feedback_payload_json(name: &str, email: &str, message: &str) -> Result<String, JsValue> {
    feedback::feedback_payload(name, email, message).map_err(to_js_error)
}
