//! Utility functions for the staging tree and the support package.
//!
//! ## Components
//!
//! - **Output**: text and YAML writers with path-bearing errors
//! - **Compression**: `.tar.gz` packaging of the staging directory
//! - **Hashing**: SHA-256 of the produced archive
//! - **Summary**: per-run collection report
//!
//! ## Packaging a Staging Directory
//!
//! ```no_run
//! use cf_support::utils::compress::package;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let staging = Path::new("./codefresh-support-1700000000");
//! let archive = package(staging, "codefresh-onprem", "1700000000")?;
//! println!("Created archive: {}", archive.display());
//! # Ok(())
//! # }
//! ```

/// Collection report
pub mod summary;

/// Staging directory packaging
pub mod compress;

/// Cryptographic hash calculation utilities
pub mod hash;

/// Writers for the staging tree
pub mod output;
