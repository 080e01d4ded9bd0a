//! Color parsing and conversion between hex, RGB, HSL, and CMYK.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// An sRGB color, the pivot representation for every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL components: hue in degrees, saturation and lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CMYK components as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

/// The same color rendered in every supported notation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub cmyk: String,
}

impl Color {
    /// Parses any supported notation: `#RGB`, `#RRGGBB` (hash optional),
    /// `rgb(...)`, `hsl(...)`, or `cmyk(...)`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::parse_hex(input)
            .or_else(|| Self::parse_rgb(input))
            .or_else(|| Self::parse_hsl(input).map(Self::from_hsl))
            .or_else(|| Self::parse_cmyk(input).map(Self::from_cmyk))
    }

    pub fn parse_hex(input: &str) -> Option<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let r = chars.next()?.to_digit(16)? as u8;
                let g = chars.next()?.to_digit(16)? as u8;
                let b = chars.next()?.to_digit(16)? as u8;
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            6 => Some(Self {
                r: u8::from_str_radix(&digits[0..2], 16).ok()?,
                g: u8::from_str_radix(&digits[2..4], 16).ok()?,
                b: u8::from_str_radix(&digits[4..6], 16).ok()?,
            }),
            _ => None,
        }
    }

    pub fn parse_rgb(input: &str) -> Option<Self> {
        let caps = rgb_regex().captures(input)?;
        let channel = |idx: usize| -> Option<u8> {
            let value: u32 = caps[idx].parse().ok()?;
            u8::try_from(value).ok()
        };
        Some(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }

    pub fn parse_hsl(input: &str) -> Option<Hsl> {
        let caps = hsl_regex().captures(input)?;
        let h: f64 = caps[1].parse().ok()?;
        let s: f64 = caps[2].parse().ok()?;
        let l: f64 = caps[3].parse().ok()?;
        if h > 360.0 || s > 100.0 || l > 100.0 {
            return None;
        }
        Some(Hsl { h, s, l })
    }

    pub fn parse_cmyk(input: &str) -> Option<Cmyk> {
        let caps = cmyk_regex().captures(input)?;
        let part = |idx: usize| -> Option<f64> {
            let value: f64 = caps[idx].parse().ok()?;
            (value <= 100.0).then_some(value)
        };
        Some(Cmyk {
            c: part(1)?,
            m: part(2)?,
            y: part(3)?,
            k: part(4)?,
        })
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        if max == min {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }
        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        Hsl {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = (hsl.h % 360.0) / 360.0;
        let s = hsl.s / 100.0;
        let l = hsl.l / 100.0;
        if s == 0.0 {
            let gray = (l * 255.0).round() as u8;
            return Self {
                r: gray,
                g: gray,
                b: gray,
            };
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |t: f64| -> u8 { (hue_to_rgb(p, q, t) * 255.0).round() as u8 };
        Self {
            r: channel(h + 1.0 / 3.0),
            g: channel(h),
            b: channel(h - 1.0 / 3.0),
        }
    }

    pub fn to_cmyk(self) -> Cmyk {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let k = 1.0 - r.max(g).max(b);
        if (1.0 - k).abs() < f64::EPSILON {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }
        Cmyk {
            c: (1.0 - r - k) / (1.0 - k) * 100.0,
            m: (1.0 - g - k) / (1.0 - k) * 100.0,
            y: (1.0 - b - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }

    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let c = cmyk.c / 100.0;
        let m = cmyk.m / 100.0;
        let y = cmyk.y / 100.0;
        let k = cmyk.k / 100.0;
        let channel = |ink: f64| -> u8 { (255.0 * (1.0 - ink) * (1.0 - k)).round() as u8 };
        Self {
            r: channel(c),
            g: channel(m),
            b: channel(y),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Renders a color in every notation, with components rounded to integers.
pub fn color_formats(color: Color) -> ColorFormats {
    let hsl = color.to_hsl();
    let cmyk = color.to_cmyk();
    ColorFormats {
        hex: color.to_hex(),
        rgb: format!("rgb({}, {}, {})", color.r, color.g, color.b),
        hsl: format!(
            "hsl({}, {}%, {}%)",
            hsl.h.round(),
            hsl.s.round(),
            hsl.l.round()
        ),
        cmyk: format!(
            "cmyk({}%, {}%, {}%, {}%)",
            cmyk.c.round(),
            cmyk.m.round(),
            cmyk.y.round(),
            cmyk.k.round()
        ),
    }
}

fn rgb_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap()
    })
}

fn hsl_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^hsl\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$")
            .unwrap()
    })
}

fn cmyk_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^cmyk\(\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$",
        )
        .unwrap()
    })
}
