//! String-level path helpers used by `collapse`.
//!
//! These work on the path text rather than on `std::path::Path`, because the
//! common prefix of several paths is computed character by character and may
//! end in the middle of a component (`/a/b/x1`, `/a/b/x2` -> `/a/b/x`).

/// POSIX `dirname`-style head of `path`.
///
/// `/a/b/c` -> `/a/b`, `/a/b/` -> `/a/b`, `a` -> ``, `/` -> `/`, `//x` -> `//`.
pub fn dirname(path: &str) -> String {
    let head = match path.rfind('/') {
        Some(i) => &path[..=i],
        None => return String::new(),
    };
    if head.chars().all(|c| c == '/') {
        head.to_string()
    } else {
        head.trim_end_matches('/').to_string()
    }
}

/// Longest common leading substring of all `paths`, compared by character.
pub fn common_prefix<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };
    let first = first.as_ref();
    let mut end = first.len();
    for other in rest {
        let shared: usize = first
            .char_indices()
            .zip(other.as_ref().chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((_, a), _)| a.len_utf8())
            .sum();
        end = end.min(shared);
    }
    first[..end].to_string()
}
