//! Icon encoding for extension registration.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Encode an SVG source as a `data:image/svg+xml;base64,` URI.
///
/// The block runtime expects icons as self-contained data URIs, one per
/// block and one for the category menu.
#[must_use]
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
