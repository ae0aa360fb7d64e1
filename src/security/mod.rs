//! Security utilities for the support package.
//!
//! This module provides:
//! - Credential scrubbing so API tokens never reach the terminal or the package
//! - Filename sanitization for cluster object names used as file names

pub mod credential_scrubber;
pub mod path_validator;

pub use credential_scrubber::{redact_secret, safe_error_message, scrub_credentials};
pub use path_validator::{sanitize_filename, staged_file_path};
