//! Naming of stored images: `<field>_<unix-millis>_<original>`.

const FALLBACK_NAME: &str = "upload";

/// Reduce a client-supplied file name to something safe to join onto the
/// upload directory: only the final path component is kept and every
/// character outside `[A-Za-z0-9._-]` becomes `_`.
pub fn sanitize_original_name(raw: &str, max_len: usize) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(max_len)
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        FALLBACK_NAME.to_string()
    } else {
        cleaned
    }
}

pub fn generated_file_name(field_name: &str, timestamp_millis: i64, original: &str) -> String {
    format!("{field_name}_{timestamp_millis}_{original}")
}

/// True when `name` is a single plain file name that cannot escape the
/// directory it is joined onto.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
