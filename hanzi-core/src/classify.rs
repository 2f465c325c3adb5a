//! Character classification for segmentation

/// Check whether `ch` is a CJK ideograph
pub fn is_cjk(ch: char) -> bool {
    matches!(ch as u32,
        0x3400..=0x4DBF      // Extension A
        | 0x4E00..=0x9FFF    // Unified Ideographs
        | 0xF900..=0xFAFF    // Compatibility Ideographs
        | 0x20000..=0x2A6DF  // Extension B
        | 0x2A700..=0x2EBEF  // Extensions C-F
        | 0x2F800..=0x2FA1F  // Compatibility Supplement
        | 0x30000..=0x3134F  // Extension G
    )
}

/// Check whether `text` contains at least one CJK ideograph
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}
