pub mod constants;
pub mod media_types;
pub mod string_utils;

pub use constants::*;
pub use media_types::{content_type_hint_for_url, extension_for_content_type, is_image_content_type};
pub use string_utils::query_slug;
