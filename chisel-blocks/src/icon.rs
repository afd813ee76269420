//! Shared icon artwork for the extension pack.

/// SVG source for the block and menu icons.
///
/// Both extensions use the same artwork, mirroring the original pack.
pub(crate) const ICON_SVG: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<svg version="1.1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 40">
  <rect x="4.6" y="15.84" width="7.85" height="5.59" fill="#FFFFFF" stroke="#000000"/>
  <rect x="19.31" y="8.22" width="13.92" height="12.19" fill="#FFFFFF" stroke="#000000"/>
  <rect width="40" height="40" fill="none"/>
</svg>
"##;
