#![cfg(target_arch = "wasm32")]

use serde_json::Value as JsonValue;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use textools_core::{
    analyze_text_content, base64_decode_text, base64_encode_text, bcrypt_hash_password,
    bcrypt_verify_password, convert_text_case, feedback_payload_json, file_to_base64_content,
    find_replace_text, format_content_text, format_html_text, generate_password_text,
    generate_qr_grid, generate_text_diff, html_decode_text, html_encode_text, lorem_ipsum_text,
    parse_color, password_strength_score, reverse_text_content, slugify_text, test_regex_pattern,
    transform_format, url_decode_text, url_encode_text, RevisionGate,
};

wasm_bindgen_test_configure!(run_in_browser);

fn js_to_json(value: JsValue) -> JsonValue {
    serde_wasm_bindgen::from_value(value).expect("JsValue -> JSON")
}

#[wasm_bindgen_test]
fn case_conversion_via_bindings() {
    assert_eq!(
        convert_text_case("Hello World", "snake", false).unwrap(),
        "hello_world"
    );
    assert_eq!(
        convert_text_case("hello world", "title", false).unwrap(),
        "Hello World"
    );
    assert!(convert_text_case("x", "nope", false).is_err());
}

#[wasm_bindgen_test]
fn slug_and_reverse() {
    assert_eq!(slugify_text("Hello World!", "-", false, true), "hello-world");
    assert_eq!(reverse_text_content("abc", true, false, false), "cba");
}

#[wasm_bindgen_test]
fn find_replace_reports_count() {
    let result = js_to_json(find_replace_text("a b a", "a", "x", true, false).unwrap());
    assert_eq!(result["output"], "x b x");
    assert_eq!(result["matchCount"], 2);
}

#[wasm_bindgen_test]
fn analyzer_returns_camel_case_fields() {
    let stats = js_to_json(analyze_text_content("One two. Three!", false, false).unwrap());
    assert_eq!(stats["words"], 4);
    assert_eq!(stats["sentences"], 2);
    assert!(stats.get("readingMinutes").is_some());
}

#[wasm_bindgen_test]
fn base64_and_file_bindings() {
    let encoded = base64_encode_text("Hello World!", "utf-8").unwrap();
    assert_eq!(encoded, "SGVsbG8gV29ybGQh");
    assert_eq!(base64_decode_text(&encoded, "utf-8").unwrap(), "Hello World!");
    assert_eq!(
        file_to_base64_content("Hello World!".as_bytes()).unwrap(),
        encoded
    );
}

#[wasm_bindgen_test]
fn url_and_html_bindings() {
    assert_eq!(
        url_encode_text("a b/c", "component", false).unwrap(),
        "a%20b%2Fc"
    );
    assert_eq!(url_decode_text("a%20b%2Fc").unwrap(), "a b/c");
    assert_eq!(
        html_encode_text("<b>", "standard").unwrap(),
        "&#60;b&#62;"
    );
    assert_eq!(html_decode_text("&lt;b&gt;"), "<b>");
    assert_eq!(
        format_html_text("<div><p>x</p></div>", false, true).unwrap(),
        "<div>\n  <p>x</p>\n</div>"
    );
}

#[wasm_bindgen_test]
fn format_conversion_bindings() {
    let yaml = transform_format("JSON", "YAML", r#"{"id":1}"#).unwrap();
    assert!(yaml.contains("id: 1"));
    let csv = transform_format("JSON", "CSV", r#"[{"a":"1"}]"#).unwrap();
    assert_eq!(csv, "a\n1\n");
    assert_eq!(
        format_content_text("JSON", "{ \"a\": 1 }", true).unwrap(),
        "{\"a\":1}"
    );
}

#[wasm_bindgen_test]
fn color_binding_returns_all_notations() {
    let formats = js_to_json(parse_color("rgb(255, 0, 0)").unwrap());
    assert_eq!(formats["hex"], "#ff0000");
    assert_eq!(formats["hsl"], "hsl(0, 100%, 50%)");
    assert!(parse_color("not a color").is_err());
}

#[wasm_bindgen_test]
fn password_and_lorem_bindings() {
    let password = generate_password_text(16, true, true, true, true, true)
        .unwrap()
        .expect("non-empty pool");
    assert_eq!(password.chars().count(), 16);
    assert!(password_strength_score(&password) >= 3);
    assert!(generate_password_text(16, false, false, false, false, true)
        .unwrap()
        .is_none());

    let text = lorem_ipsum_text(2).unwrap();
    assert_eq!(text.split("\n\n").count(), 2);
}

#[wasm_bindgen_test]
fn qr_binding_returns_grid_and_svg() {
    let grid = js_to_json(generate_qr_grid("https://example.com", "M").unwrap());
    let size = grid["size"].as_u64().unwrap();
    assert_eq!(
        grid["modules"].as_array().unwrap().len() as u64,
        size * size
    );
    assert!(grid["svg"].as_str().unwrap().starts_with("<svg"));
}

#[wasm_bindgen_test]
fn diff_binding_segments() {
    let result = js_to_json(generate_text_diff("Hello world", "Hi world", "chars").unwrap());
    let kinds: Vec<&str> = result["segments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["unchanged", "removed", "added", "unchanged"]);
}

#[wasm_bindgen_test]
fn regex_binding_matches() {
    let matches = js_to_json(test_regex_pattern(r"\d+", "g", "a1 b22").unwrap());
    assert_eq!(matches.as_array().unwrap().len(), 2);
    assert!(test_regex_pattern("(", "g", "x").is_err());
}

#[wasm_bindgen_test]
fn bcrypt_bindings_round_trip() {
    let hash = bcrypt_hash_password("secret", 8, None).unwrap();
    assert!(bcrypt_verify_password("secret", &hash).unwrap());
    assert!(bcrypt_hash_password("secret", 13, None).is_err());
}

#[wasm_bindgen_test]
fn feedback_binding_validates() {
    let payload = feedback_payload_json("Ada", "ada@example.com", "hi").unwrap();
    assert!(payload.contains("\"email\":\"ada@example.com\""));
    assert!(feedback_payload_json("Ada", "bad-email", "hi").is_err());
}

#[wasm_bindgen_test]
fn revision_gate_latest_wins() {
    let mut gate = RevisionGate::new();
    let first = gate.begin();
    let second = gate.begin();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}
