//! Workspace path algebra.
//!
//! Paths reach the engine as plain strings from the UI and the watcher, with
//! either `\` or `/` separators. Every comparison goes through [`normalize`].
//! Case is never folded and `.`/`..` are never resolved.

use std::borrow::Cow;

pub const SEPARATOR: char = '/';

/// Converts every `\` into `/`. Borrows when there is nothing to convert.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

pub fn is_same(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    normalize(a) == normalize(b)
}

/// `candidate` is `ancestor` itself or nested below it.
///
/// The prefix check is separator-qualified, so `/ws/folder2` is not under
/// `/ws/folder`.
pub fn is_equal_or_descendant(candidate: &str, ancestor: &str) -> bool {
    descendant_suffix_len(candidate, ancestor).is_some()
}

/// Rewrites the `old_prefix` part of `path` to `new_prefix`, keeping the
/// descendant suffix byte-for-byte. Unrelated paths are returned borrowed.
pub fn replace_prefix<'a>(path: &'a str, old_prefix: &str, new_prefix: &str) -> Cow<'a, str> {
    match descendant_suffix_len(path, old_prefix) {
        Some(suffix_len) => {
            let suffix = &path[path.len() - suffix_len..];
            Cow::Owned(format!("{new_prefix}{suffix}"))
        }
        None => Cow::Borrowed(path),
    }
}

/// Parent directory of `path` as a slice of the raw input.
pub fn parent(path: &str) -> Option<&str> {
    let trimmed = trim_trailing_separators(path);
    let pos = trimmed.rfind(is_separator)?;
    if pos == 0 {
        // `/ws` lives directly under the POSIX root.
        return (trimmed.len() > 1).then(|| &trimmed[..1]);
    }
    Some(&trimmed[..pos])
}

pub fn file_name(path: &str) -> &str {
    let trimmed = trim_trailing_separators(path);
    match trimmed.rfind(is_separator) {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    }
}

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

/// Byte length of the part of `candidate` that lies below `ancestor`.
///
/// Normalization maps one ASCII byte onto another, so the returned length is
/// valid as an offset into the raw `candidate` as well.
fn descendant_suffix_len(candidate: &str, ancestor: &str) -> Option<usize> {
    if candidate.is_empty() || ancestor.is_empty() {
        return None;
    }

    let candidate = normalize(candidate);
    let ancestor = normalize(ancestor);
    let ancestor = trim_trailing_separators(&ancestor);

    let rest = candidate.strip_prefix(ancestor)?;
    if rest.is_empty() || rest.starts_with(SEPARATOR) || ancestor.ends_with(SEPARATOR) {
        Some(rest.len())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/path.rs"]
mod tests;
