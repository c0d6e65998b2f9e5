/// Splits `text` into consecutive windows of at most `max_len` characters.
///
/// Windows are non-overlapping, keep their original order, and concatenate
/// back to the input exactly; only the final window may be shorter. Lengths
/// are counted in characters rather than bytes so multi-byte text never gets
/// cut inside a code point.
///
/// Pure function. Text at or below the limit comes back as a single segment,
/// so callers can branch on the segment count instead of on input type.
pub fn split_text(text: &str, max_len: usize) -> Vec<&str> {
    debug_assert!(max_len > 0, "max_len must be positive");

    if text.chars().count() <= max_len {
        return vec![text];
    }

    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut chars_in_segment = 0;

    for (byte_idx, _) in text.char_indices() {
        if chars_in_segment == max_len {
            segments.push(&text[segment_start..byte_idx]);
            segment_start = byte_idx;
            chars_in_segment = 0;
        }
        chars_in_segment += 1;
    }
    // The trailing window, possibly shorter than max_len.
    segments.push(&text[segment_start..]);

    segments
}
