use std::path::PathBuf;

use log::{info, warn};

/// Tally of one collection run.
///
/// Logged at the end of a run so the operator can see what is missing from
/// the package without opening it.
#[derive(Debug, Default, Clone)]
pub struct CollectionReport {
    /// Kinds whose listing was written
    pub kinds_collected: Vec<String>,
    /// Kinds skipped, with the reason
    pub kinds_skipped: Vec<(String, String)>,
    /// Per-object or per-container query failures
    pub item_failures: Vec<String>,
    pub files_written: Vec<PathBuf>,
}

impl CollectionReport {
    pub fn record_file(&mut self, path: PathBuf) {
        self.files_written.push(path);
    }

    pub fn record_skip(&mut self, kind: &str, reason: impl Into<String>) {
        self.kinds_skipped.push((kind.to_string(), reason.into()));
    }

    pub fn record_failure(&mut self, what: impl Into<String>) {
        self.item_failures.push(what.into());
    }

    /// Number of `.log` files written
    pub fn log_files(&self) -> usize {
        self.files_written
            .iter()
            .filter(|p| p.extension().map_or(false, |e| e == "log"))
            .count()
    }

    /// Emit the tally through the logger
    pub fn log_summary(&self) {
        info!(
            "Collected {} resource kinds, {} files written ({} container logs)",
            self.kinds_collected.len(),
            self.files_written.len(),
            self.log_files()
        );

        for (kind, reason) in &self.kinds_skipped {
            warn!("Skipped {}: {}", kind, reason);
        }

        if !self.item_failures.is_empty() {
            warn!("{} objects could not be fully collected", self.item_failures.len());
            for failure in &self.item_failures {
                warn!("  {}", failure);
            }
        }
    }
}
