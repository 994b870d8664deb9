//! Shell-style glob resolution against the host filesystem.
//!
//! Patterns are resolved one path component at a time: literal components are
//! joined as-is, wildcard components (`*`, `?`, `[...]`) are matched against
//! the entries of every candidate directory with a `globset` matcher. As in a
//! shell, a wildcard does not match a leading `.` unless the pattern component
//! itself starts with one. A trailing `/` keeps only directories. Braces are
//! literal, and a component that is not a valid pattern (an unclosed `[`) is
//! matched literally, so resolution never fails. Results are always sorted;
//! unreadable directories and dangling candidates simply produce no matches.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};

/// Filesystem type filter for `from_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    #[default]
    Any,
    File,
    Dir,
    Link,
}

impl PathKind {
    /// `File` and `Dir` follow symlinks; `Link` inspects the entry itself.
    pub fn matches(self, path: &Path) -> bool {
        match self {
            PathKind::Any => true,
            PathKind::File => fs::metadata(path).map(|m| m.is_file()).unwrap_or(false),
            PathKind::Dir => fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false),
            PathKind::Link => fs::symlink_metadata(path)
                .map(|m| m.file_type().is_symlink())
                .unwrap_or(false),
        }
    }
}

impl FromStr for PathKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "any" => Ok(PathKind::Any),
            "file" => Ok(PathKind::File),
            "dir" => Ok(PathKind::Dir),
            "link" => Ok(PathKind::Link),
            other => Err(format!("unknown path kind '{other}' (expected any, file, dir or link)")),
        }
    }
}

/// True if `component` contains a wildcard.
pub fn has_magic(component: &str) -> bool {
    component.contains(&['*', '?', '['][..])
}

/// Every existing path matching `pattern`, sorted lexicographically.
pub fn resolve(pattern: &str, include_hidden: bool) -> Vec<String> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut candidates = vec![PathBuf::new()];
    for component in Path::new(pattern).components() {
        candidates = match component {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                match has_magic(&name).then(|| compile(&name)) {
                    Some(Ok(matcher)) => candidates
                        .iter()
                        .flat_map(|dir| list_matching(dir, &matcher, &name, include_hidden))
                        .collect(),
                    Some(Err(e)) => {
                        tracing::debug!(component = %name, error = %e, "matching component literally");
                        candidates.into_iter().map(|c| c.join(&*name)).collect()
                    }
                    None => candidates.into_iter().map(|c| c.join(&*name)).collect(),
                }
            }
            other => candidates
                .into_iter()
                .map(|c| c.join(other.as_os_str()))
                .collect(),
        };
        if candidates.is_empty() {
            break;
        }
    }

    let dirs_only = pattern.len() > 1 && pattern.ends_with('/');
    let mut out: Vec<String> = candidates
        .into_iter()
        .filter(|p| {
            if dirs_only {
                fs::metadata(p).map(|m| m.is_dir()).unwrap_or(false)
            } else {
                fs::symlink_metadata(p).is_ok()
            }
        })
        .map(|p| {
            let mut s = p.to_string_lossy().into_owned();
            if dirs_only && !s.ends_with('/') {
                s.push('/');
            }
            s
        })
        .collect();
    out.sort();
    out.dedup();

    tracing::debug!(pattern, matches = out.len(), "resolved glob");
    out
}

fn compile(component: &str) -> Result<GlobMatcher, globset::Error> {
    let glob = GlobBuilder::new(&escape_braces(component))
        .literal_separator(true)
        .backslash_escape(true)
        .build()?;
    Ok(glob.compile_matcher())
}

/// `globset` reads `{a,b}` as alternation; shell globs keep braces literal.
fn escape_braces(component: &str) -> String {
    let mut out = String::with_capacity(component.len());
    let mut in_class = false;
    for c in component.chars() {
        match c {
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '{' | '}' if !in_class => out.push('\\'),
            _ => {}
        }
        out.push(c);
    }
    out
}

fn list_matching(
    dir: &Path,
    matcher: &GlobMatcher,
    component: &str,
    include_hidden: bool,
) -> Vec<PathBuf> {
    let read_from = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let Ok(entries) = fs::read_dir(read_from) else {
        return Vec::new();
    };

    let explicit_dot = component.starts_with('.');
    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name();
            if !include_hidden && !explicit_dot && name.to_string_lossy().starts_with('.') {
                return None;
            }
            matcher
                .is_match(Path::new(&name))
                .then(|| dir.join(&name))
        })
        .collect()
}
