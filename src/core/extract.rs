/// Returns the region of `content` that starts at `start_marker` (inclusive)
/// and stops right before the first `end_marker` found at or after it.
///
/// An empty or absent start marker yields an empty section. Without an end
/// marker, or when it never appears after the start, the section runs to the
/// end of the text. Markers are matched as plain substrings, so a marker that
/// also occurs inside a comment or string literal is taken at face value.
pub fn extract_section<'a>(
    content: &'a str,
    start_marker: &str,
    end_marker: Option<&str>,
) -> &'a str {
    if start_marker.is_empty() {
        return "";
    }

    let Some(start_idx) = content.find(start_marker) else {
        return "";
    };

    let tail = &content[start_idx..];
    match end_marker {
        Some(end) if !end.is_empty() => match tail.find(end) {
            Some(len) => &tail[..len],
            None => tail,
        },
        _ => tail,
    }
}
