//! Password and placeholder-text generators.

use serde::Deserialize;

use crate::error::ToolError;
use crate::random_u32;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;

const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijkmnpqrstuvwxyz";
const DIGITS: &str = "23456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
/// Characters easy to confuse at a glance (l vs 1, O vs 0).
const SIMILAR: &str = "il1Lo0O";

/// Which character classes the password draws from.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordOptions {
    #[serde(default = "crate::text::default_true")]
    pub uppercase: bool,
    #[serde(default = "crate::text::default_true")]
    pub lowercase: bool,
    #[serde(default = "crate::text::default_true")]
    pub digits: bool,
    #[serde(default = "crate::text::default_true")]
    pub symbols: bool,
    #[serde(default = "crate::text::default_true")]
    pub exclude_similar: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_similar: true,
        }
    }
}

fn character_pool(options: &PasswordOptions) -> Vec<char> {
    let mut pool = String::new();
    if options.uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.lowercase {
        pool.push_str(LOWERCASE);
    }
    if options.digits {
        pool.push_str(DIGITS);
    }
    if options.symbols {
        pool.push_str(SYMBOLS);
    }
    pool.chars()
        .filter(|ch| !options.exclude_similar || !SIMILAR.contains(*ch))
        .collect()
}

/// Draws `length` characters uniformly from the configured pool. An empty
/// pool (no class enabled) is a no-op, not an error, so the UI can leave the
/// previous password in place.
pub fn generate_password(
    length: usize,
    options: &PasswordOptions,
) -> Result<Option<String>, ToolError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(ToolError::input(format!(
            "password length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}"
        )));
    }
    let pool = character_pool(options);
    if pool.is_empty() {
        return Ok(None);
    }
    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let idx = random_u32() as usize % pool.len();
        password.push(pool[idx]);
    }
    Ok(Some(password))
}

/// Scores a password 0-5: one point each for length >= 12, an uppercase
/// letter, a lowercase letter, a digit, and a non-alphanumeric character.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 12 {
        score += 1;
    }
    if password.chars().any(|ch| ch.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|ch| ch.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|ch| ch.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|ch| !ch.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

const LOREM_PARAGRAPHS: [&str; 10] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. Curabitur pretium tincidunt lacus. Nulla gravida orci a odio. Nullam varius, turpis et commodo pharetra, est eros bibendum elit.",
    "Proin condimentum fermentum nunc. Etiam pharetra, erat sed fermentum feugiat, velit mauris egestas quam. Aenean ultricies mi vitae est. Mauris placerat eleifend leo. Quisque sit amet est et sapien ullamcorper pharetra.",
    "Vestibulum erat wisi, condimentum sed, commodo vitae, ornare sit amet, wisi. Donec non enim in turpis pulvinar facilisis. Ut felis. Praesent dapibus, neque id cursus faucibus, tortor neque egestas augue, eu vulputate magna eros eu erat.",
    "Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas. Vestibulum tortor quam, feugiat vitae, ultricies eget, tempor sit amet, ante. Donec eu libero sit amet quam egestas semper.",
    "Suspendisse potenti. Morbi in sem quis dui placerat ornare. Pellentesque odio nisi, euismod in, pharetra a, ultricies in, diam. Sed arcu. Cras consequat. Praesent dapibus, neque id cursus faucibus, tortor neque egestas augue, eu vulputate magna eros eu erat.",
    "Aenean lectus elit, fermentum non, convallis id, sagittis at, neque. Nullam mauris orci, aliquet et, iaculis et, viverra vitae, ligula. Nulla ut felis in purus aliquam imperdiet. Maecenas aliquet mollis lectus. Vivamus consectetuer risus et tortor.",
    "Integer vitae libero ac risus egestas placerat. Vestibulum commodo felis quis tortor. Ut aliquam sollicitudin leo. Cras iaculis ultricies nulla. Donec quis dui at dolor tempor interdum.",
    "Vivamus laoreet. Nullam tincidunt adipiscing enim. Phasellus tempus. Proin viverra, ligula sit amet ultrices semper, ligula arcu tristique sapien, a accumsan nisi mauris ac eros. Fusce neque. Suspendisse faucibus, nunc et pellentesque egestas, lacus ante convallis tellus, vitae iaculis lacus elit id tortor.",
    "Morbi interdum mollis sapien. Sed ac risus. Phasellus lacinia, magna a ullamcorper laoreet, lectus arcu pulvinar risus, vitae facilisis libero dolor a purus. Sed vel lacus. Mauris nibh felis, adipiscing varius, adipiscing in, lacinia vel, tellus.",
];

/// Builds `count` paragraphs of 2-4 sentences drawn from a shuffled sentence
/// bank. When the bank runs dry it is reshuffled so any count works.
pub fn lorem_ipsum(count: usize) -> Result<String, ToolError> {
    if count == 0 {
        return Err(ToolError::input("paragraph count must be at least 1"));
    }
    let bank: Vec<&str> = LOREM_PARAGRAPHS
        .iter()
        .flat_map(|paragraph| paragraph.split(". "))
        .map(|sentence| sentence.trim().trim_end_matches('.'))
        .filter(|sentence| !sentence.is_empty())
        .collect();

    let mut shuffled = bank.clone();
    shuffle(&mut shuffled);
    let mut cursor = 0;

    let mut paragraphs = Vec::with_capacity(count);
    for _ in 0..count {
        let wanted = 2 + (random_u32() as usize % 3);
        let mut sentences = Vec::with_capacity(wanted);
        while sentences.len() < wanted {
            if cursor == shuffled.len() {
                shuffle(&mut shuffled);
                cursor = 0;
            }
            sentences.push(shuffled[cursor]);
            cursor += 1;
        }
        paragraphs.push(format!("{}.", sentences.join(". ")));
    }
    Ok(paragraphs.join("\n\n"))
}

// Fisher-Yates.
fn shuffle<T>(items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random_u32() as usize % (i + 1);
        items.swap(i, j);
    }
}
