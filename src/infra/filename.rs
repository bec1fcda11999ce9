//! File name sanitization for exported artifacts.

/// Characters that are unsafe in file names on at least one platform.
const UNSAFE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Converts a note title into a safe file base name (sans extension).
///
/// - Path-unsafe characters and control characters become `_`
/// - Leading/trailing whitespace is trimmed
/// - Case and non-ASCII characters are preserved, since exported file names
///   mirror the note title
/// - Returns `note` for empty results
///
/// # Examples
///
/// ```
/// use kiroku::infra::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("My/Notes:Test"), "My_Notes_Test");
/// assert_eq!(sanitize_file_name("会議メモ"), "会議メモ");
/// assert_eq!(sanitize_file_name(""), "note");
/// ```
pub fn sanitize_file_name(title: &str) -> String {
    let sanitized: String = title
        .trim()
        .chars()
        .map(|c| {
            if UNSAFE.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if sanitized.is_empty() {
        return "note".to_string();
    }
    sanitized
}
