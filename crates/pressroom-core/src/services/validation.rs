//! Field-level validation rules for post input.

use crate::error::FieldViolation;

/// Minimum character count for title and content.
pub const MIN_TEXT_LENGTH: usize = 10;

/// Record a violation when the value is shorter than [`MIN_TEXT_LENGTH`].
pub fn require_min_length(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
) {
    if value.chars().count() < MIN_TEXT_LENGTH {
        violations.push(FieldViolation::new(
            field,
            format!("must be at least {MIN_TEXT_LENGTH} characters"),
        ));
    }
}

/// Sniff the payload's magic bytes for the image formats accepted as covers
/// (PNG, JPEG, GIF, WebP). File names are not trusted.
pub fn looks_like_image(data: &[u8]) -> bool {
    data.starts_with(b"\x89PNG\r\n\x1a\n")
        || data.starts_with(&[0xFF, 0xD8, 0xFF])
        || data.starts_with(b"GIF87a")
        || data.starts_with(b"GIF89a")
        || (data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_boundary_at_ten_characters() {
        let mut violations = Vec::new();
        require_min_length(&mut violations, "title", "123456789");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "title");

        let mut violations = Vec::new();
        require_min_length(&mut violations, "title", "1234567890");
        assert!(violations.is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut violations = Vec::new();
        require_min_length(&mut violations, "title", "éééééééééé");
        assert!(violations.is_empty());
    }

    #[test]
    fn sniffs_common_image_headers() {
        assert!(looks_like_image(b"\x89PNG\r\n\x1a\n....."));
        assert!(looks_like_image(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]));
        assert!(looks_like_image(b"GIF89a......"));
        assert!(looks_like_image(b"RIFF\x00\x00\x00\x00WEBPVP8 "));
    }

    #[test]
    fn rejects_non_image_payloads() {
        assert!(!looks_like_image(b"%PDF-1.7"));
        assert!(!looks_like_image(b""));
        assert!(!looks_like_image(b"RIFF\x00\x00\x00\x00WAVE"));
    }
}
