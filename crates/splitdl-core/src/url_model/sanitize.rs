//! Filename sanitization for Linux filesystems.

/// Linux `NAME_MAX` in bytes.
const NAME_MAX: usize = 255;

/// Makes a server-supplied name safe to join onto the output directory.
///
/// Path separators, NUL and control characters become `_` (runs collapse to
/// one), leading/trailing whitespace and dots are trimmed so the name cannot
/// escape the directory or hide itself, and the result is cut to `NAME_MAX`
/// bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '/' || c == '\\' || c == '\0' || c.is_control() {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c: char| c.is_whitespace() || c == '.');
    let mut end = trimmed.len().min(NAME_MAX);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    trimmed[..end].to_string()
}
