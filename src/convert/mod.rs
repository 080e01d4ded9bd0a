pub mod formats;
pub mod json_utils;
pub(crate) mod tabular;

pub use formats::{convert_formats, format_content};
