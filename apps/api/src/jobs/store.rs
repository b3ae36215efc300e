//! Static job dataset reader.
//!
//! The listing page must always render, so nothing in here fails a request:
//! a missing file, an unreadable file, or a malformed CSV all degrade to an
//! empty listing. The file does not change at runtime, so the parsed records
//! are cached after the first load.

use std::path::{Path, PathBuf};

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::models::job::{JobRecord, RawJobRow};

/// Well-known dataset locations, relative to the working directory,
/// checked in order. The first existing file wins.
const CANDIDATE_PATHS: &[&str] = &[
    "linkedin_jobs_india.csv",
    "data/linkedin_jobs_india.csv",
    "public/linkedin_jobs_india.csv",
];

pub struct JobStore {
    candidates: Vec<PathBuf>,
    cache: OnceCell<Vec<JobRecord>>,
}

impl JobStore {
    /// `override_path`, when set, is checked before the built-in candidates.
    pub fn new(override_path: Option<&str>) -> Self {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(p) = override_path {
            candidates.push(PathBuf::from(p));
        }
        candidates.extend(CANDIDATE_PATHS.iter().map(PathBuf::from));
        Self {
            candidates,
            cache: OnceCell::new(),
        }
    }

    /// Explicit candidate list, used by tests.
    #[cfg(test)]
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            cache: OnceCell::new(),
        }
    }

    /// Returns the dataset, loading and caching it on first call.
    /// Never fails: degraded loads yield an empty slice.
    pub async fn jobs(&self) -> &[JobRecord] {
        self.cache.get_or_init(|| self.load()).await
    }

    async fn load(&self) -> Vec<JobRecord> {
        for path in &self.candidates {
            match tokio::fs::read_to_string(path).await {
                Ok(content) => {
                    info!("Loading job dataset from {}", path.display());
                    return parse_csv(&content, path);
                }
                Err(_) => continue,
            }
        }
        warn!("No job dataset found at any candidate path, serving empty listing");
        Vec::new()
    }
}

/// Parses the dataset assuming a header row defines column names.
/// Any row-level error discards the whole file: a half-parsed dataset is
/// worse for the listing page than an empty one.
fn parse_csv(content: &str, path: &Path) -> Vec<JobRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<RawJobRow>() {
        match row {
            Ok(raw) => records.push(JobRecord::from(raw)),
            Err(e) => {
                warn!("Failed to parse job dataset {}: {e}", path.display());
                return Vec::new();
            }
        }
    }
    info!("Loaded {} job records", records.len());
    records
}
