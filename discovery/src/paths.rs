//! Lexical relative paths between a document and the manifest directory.
//!
//! Paths are compared purely by their components after resolving them
//! against a working directory: `.` and `..` are folded, but symlinks are
//! not followed and the filesystem is never consulted. The manifest stays
//! relocatable as long as the documents move together with it.

use std::path::{Component, Path, PathBuf};

/// Returns `target` relative to `base`, with `/` separators.
///
/// Relative inputs are resolved against `cwd` first. When the two paths
/// share no root (different drive prefixes on Windows) the absolute target
/// is returned instead. A target equal to `base` yields `"."`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use openapi_index_discovery::relative_path;
///
/// let cwd = Path::new("/work");
/// assert_eq!(
///     relative_path(Path::new("specs/a.openapi.yaml"), Path::new("specs"), cwd),
///     "a.openapi.yaml"
/// );
/// assert_eq!(
///     relative_path(Path::new("specs/a.openapi.yaml"), Path::new("out/index"), cwd),
///     "../../specs/a.openapi.yaml"
/// );
/// ```
pub fn relative_path(target: &Path, base: &Path, cwd: &Path) -> String {
    let target = normalize(&absolute(target, cwd));
    let base = normalize(&absolute(base, cwd));

    let target_parts: Vec<Component<'_>> = target.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let shared_root = matches!(
        (target_parts.first(), base_parts.first()),
        (Some(a), Some(b)) if a == b
    );
    if !shared_root {
        return to_slash(&target);
    }

    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..base_parts.len() {
        parts.push("..".to_string());
    }
    for component in &target_parts[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
