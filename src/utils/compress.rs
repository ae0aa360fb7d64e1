use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{debug, info, warn};
use tar::Builder;
use walkdir::WalkDir;

use crate::constants::ARCHIVE_EXTENSION;
use crate::utils::hash::calculate_sha256;

/// Archive path for a staging directory: `<parent>/<slug>-<timestamp>.tar.gz`
pub fn archive_path(source_dir: &Path, slug: &str, timestamp: &str) -> PathBuf {
    let parent = source_dir.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!("{}-{}.{}", slug, timestamp, ARCHIVE_EXTENSION))
}

/// Package the staging directory as a gzipped tarball and remove it.
///
/// Entries are stored under the staging directory's own name. The source
/// directory is only removed once the archive has been fully written; on
/// failure it stays in place so nothing collected is lost.
pub fn package(source_dir: &Path, slug: &str, timestamp: &str) -> Result<PathBuf> {
    let start = Instant::now();
    let output = archive_path(source_dir, slug, timestamp);
    info!("Packaging {} into {}", source_dir.display(), output.display());

    if let Err(e) = write_archive(source_dir, &output) {
        // A partial archive is useless; the staging tree is kept
        fs::remove_file(&output).ok();
        return Err(e);
    }

    match calculate_sha256(&output) {
        Ok(digest) => info!("Archive SHA-256: {}", digest),
        Err(e) => warn!("Could not hash {}: {}", output.display(), e),
    }

    fs::remove_dir_all(source_dir)
        .context(format!("Failed to remove staging directory {}", source_dir.display()))?;

    info!("Created {} in {:?}", output.display(), start.elapsed());
    Ok(output)
}

fn write_archive(source_dir: &Path, output: &Path) -> Result<()> {
    let root_name = source_dir
        .file_name()
        .ok_or_else(|| anyhow!("Staging directory has no name: {}", source_dir.display()))?;

    let file = File::create(output)
        .context(format!("Failed to create archive {}", output.display()))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.context(format!("Failed to read {}", source_dir.display()))?;
        let path = entry.path();
        let rel_path = path.strip_prefix(source_dir).unwrap_or(path);
        let name = Path::new(root_name).join(rel_path);

        if entry.file_type().is_dir() {
            builder
                .append_dir(&name, path)
                .context(format!("Failed to add directory {}", path.display()))?;
        } else {
            builder
                .append_path_with_name(path, &name)
                .context(format!("Failed to add {}", path.display()))?;
            debug!("Archived {}", name.display());
        }
    }

    let encoder = builder
        .into_inner()
        .context("Failed to finalize tar stream")?;
    encoder
        .finish()
        .context(format!("Failed to finish archive {}", output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tar::Archive;
    use tempfile::TempDir;

    fn entries(archive: &Path) -> Vec<(String, String)> {
        let mut archive = Archive::new(GzDecoder::new(File::open(archive).unwrap()));
        let mut result = Vec::new();
        for entry in archive.entries().unwrap() {
            let mut entry = entry.unwrap();
            let path = entry.path().unwrap().to_string_lossy().to_string();
            let mut content = String::new();
            if entry.header().entry_type().is_file() {
                entry.read_to_string(&mut content).unwrap();
            }
            result.push((path, content));
        }
        result
    }

    #[test]
    fn test_archive_path() {
        let path = archive_path(
            Path::new("/out/codefresh-support-1700000000"),
            "codefresh-onprem",
            "1700000000",
        );
        assert_eq!(path, PathBuf::from("/out/codefresh-onprem-1700000000.tar.gz"));
    }

    #[test]
    fn test_package_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let staging = temp_dir.path().join("codefresh-support-42");
        fs::create_dir_all(staging.join("Pods")).unwrap();
        fs::write(staging.join("Events.txt"), "LAST SEEN").unwrap();
        fs::write(staging.join("Pods").join("_PodsList.txt"), "NAME READY").unwrap();

        let archive = package(&staging, "codefresh-gitops-runtime", "42").unwrap();

        assert_eq!(
            archive,
            temp_dir.path().join("codefresh-gitops-runtime-42.tar.gz")
        );
        assert!(archive.exists());
        assert!(!staging.exists(), "staging directory should be removed");

        let entries = entries(&archive);
        assert!(entries
            .iter()
            .any(|(p, c)| p == "codefresh-support-42/Events.txt" && c == "LAST SEEN"));
        assert!(entries
            .iter()
            .any(|(p, c)| p == "codefresh-support-42/Pods/_PodsList.txt" && c == "NAME READY"));
    }

    #[test]
    fn test_package_missing_source_keeps_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let staging = temp_dir.path().join("codefresh-support-7");

        let result = package(&staging, "codefresh-onprem", "7");
        assert!(result.is_err());
        assert!(!temp_dir.path().join("codefresh-onprem-7.tar.gz").exists());
    }
}
