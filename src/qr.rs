//! QR code generation: module grid plus a ready-to-embed SVG.

use qrcode::{EcLevel, QrCode};
use serde::Serialize;

use crate::error::ToolError;

/// A rendered QR code. `modules` is row-major, `size` modules per side.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QrGrid {
    pub size: usize,
    pub modules: Vec<bool>,
    pub error_correction: String,
    /// Share of codewords the level can recover.
    pub recovery_percent: u8,
    pub svg: String,
}

fn parse_ec_level(name: &str) -> Result<EcLevel, ToolError> {
    match name.to_ascii_uppercase().as_str() {
        "L" => Ok(EcLevel::L),
        "M" => Ok(EcLevel::M),
        "Q" => Ok(EcLevel::Q),
        "H" => Ok(EcLevel::H),
        other => Err(ToolError::input(format!(
            "unknown error correction level: {other}"
        ))),
    }
}

fn recovery_percent(level: EcLevel) -> u8 {
    match level {
        EcLevel::L => 7,
        EcLevel::M => 15,
        EcLevel::Q => 25,
        EcLevel::H => 30,
    }
}

/// Encodes `data` at the requested error correction level (`L`/`M`/`Q`/`H`).
/// Empty input and oversized payloads both surface as input errors.
pub fn generate_qr(data: &str, ec_level: &str) -> Result<QrGrid, ToolError> {
    if data.is_empty() {
        return Err(ToolError::input("QR content cannot be empty"));
    }
    let level = parse_ec_level(ec_level)?;
    let code = QrCode::with_error_correction_level(data, level)
        .map_err(|err| ToolError::input(format!("QR encoding failed: {err}")))?;
    let size = code.width();
    let modules: Vec<bool> = code
        .to_colors()
        .into_iter()
        .map(|color| color == qrcode::Color::Dark)
        .collect();
    let svg = render_svg(size, &modules);
    Ok(QrGrid {
        size,
        modules,
        error_correction: ec_level.to_ascii_uppercase(),
        recovery_percent: recovery_percent(level),
        svg,
    })
}

// One path element per dark module, on a 4-module quiet zone.
fn render_svg(size: usize, modules: &[bool]) -> String {
    const QUIET: usize = 4;
    let total = size + QUIET * 2;
    let mut path = String::new();
    for y in 0..size {
        for x in 0..size {
            if modules[y * size + x] {
                path.push_str(&format!("M{} {}h1v1h-1z", x + QUIET, y + QUIET));
            }
        }
    }
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {total} {total}\" ",
            "shape-rendering=\"crispEdges\">",
            "<rect width=\"{total}\" height=\"{total}\" fill=\"#ffffff\"/>",
            "<path d=\"{path}\" fill=\"#000000\"/>",
            "</svg>"
        ),
        total = total,
        path = path
    )
}
