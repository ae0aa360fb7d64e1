//! File naming for cluster objects written into the staging tree.
//!
//! Object and container names come from the cluster, so they are sanitized
//! before being joined onto a staging directory.

use std::path::{Path, PathBuf};

/// Sanitizes a filename to remove potentially dangerous characters.
///
/// Path separators and characters rejected by common filesystems become `_`,
/// null bytes are dropped, and names made only of dots are prefixed so they
/// can never resolve to `.` or `..`.
pub fn sanitize_filename(filename: &str) -> String {
    let mut sanitized = String::with_capacity(filename.len());

    for ch in filename.chars() {
        match ch {
            '/' | '\\' => sanitized.push('_'),
            '\0' => continue,
            '<' | '>' | ':' | '"' | '|' | '?' | '*' => sanitized.push('_'),
            c if c.is_control() => sanitized.push('_'),
            c => sanitized.push(c),
        }
    }

    let sanitized = sanitized.trim_matches(' ');

    if sanitized.is_empty() {
        return "unnamed".to_string();
    }

    // Don't allow only dots
    if sanitized.chars().all(|c| c == '.') {
        return format!("_{}", sanitized);
    }

    sanitized.to_string()
}

/// Path of `<dir>/<sanitized name><suffix>`.
///
/// The resulting path always has `dir` as its direct parent.
pub fn staged_file_path(dir: &Path, name: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}", sanitize_filename(name), suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("cf-api-7d9c5f-x2k"), "cf-api-7d9c5f-x2k");
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("file<>:\"|?*.txt"), "file_______.txt");
        assert_eq!(sanitize_filename("file\0name"), "filename");
        assert_eq!(sanitize_filename(""), "unnamed");
        assert_eq!(sanitize_filename("..."), "_...");
        assert_eq!(sanitize_filename("  spaces  "), "spaces");
    }

    #[test]
    fn test_staged_file_path_stays_in_dir() {
        let dir = Path::new("/tmp/codefresh-support-1/Pods");
        let path = staged_file_path(dir, "../../escape", ".yaml");
        assert_eq!(path.parent(), Some(dir));
        assert_eq!(path.file_name().unwrap(), ".._.._escape.yaml");

        let log = staged_file_path(dir, "api-0_main", ".log");
        assert_eq!(log, dir.join("api-0_main.log"));
    }
}
