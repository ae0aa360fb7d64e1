//! Property tests for kind labels and file naming.

use std::path::Path;

use proptest::prelude::*;

use cf_support::models::extract_kind;
use cf_support::security::{sanitize_filename, staged_file_path};

proptest! {
    #[test]
    fn label_is_text_before_first_dot(head in "[A-Za-z]{0,12}", tail in "[a-z.]{0,20}") {
        let identifier = format!("{}.{}", head, tail);
        prop_assert_eq!(extract_kind(&identifier), head.as_str());
    }

    #[test]
    fn label_without_dot_is_unchanged(identifier in "[A-Za-z-]{0,24}") {
        prop_assert_eq!(extract_kind(&identifier), identifier.as_str());
    }

    #[test]
    fn staged_files_never_leave_their_directory(name in "\\PC{0,40}") {
        let dir = Path::new("/staging/Pods");
        let path = staged_file_path(dir, &name, ".log");
        prop_assert_eq!(path.parent(), Some(dir));

        let sanitized = sanitize_filename(&name);
        prop_assert!(!sanitized.contains('/'));
        prop_assert!(sanitized != "." && sanitized != "..");
    }
}
