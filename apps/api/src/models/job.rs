use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the static job-listing dataset, as the CSV file spells it.
/// Column names follow the scraped dataset's header row; absent columns
/// deserialize to empty strings rather than failing the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJobRow {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_location: String,
    #[serde(default)]
    pub job_schedule_type: String,
    #[serde(default)]
    pub job_work_from_home: String,
    #[serde(default)]
    pub job_posted_date: String,
    #[serde(default)]
    pub job_skills: String,
    #[serde(default)]
    pub job_link: String,
}

/// A job listing as served to the client.
///
/// `id` is content-derived (UUIDv5 over title, company, location and posted
/// date) and assigned at load time, so it stays stable across re-sorts and
/// filters. Row position is never used as identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub schedule_type: String,
    pub remote: bool,
    pub posted_date: String,
    /// Comma-separated skill list, verbatim from the dataset.
    pub skills: String,
    pub apply_link: String,
}

impl From<RawJobRow> for JobRecord {
    fn from(row: RawJobRow) -> Self {
        let name = format!(
            "{}|{}|{}|{}",
            row.job_title, row.company_name, row.job_location, row.job_posted_date
        );
        JobRecord {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
            title: row.job_title,
            company: row.company_name,
            location: row.job_location,
            schedule_type: row.job_schedule_type,
            remote: is_remote(&row.job_work_from_home),
            posted_date: row.job_posted_date,
            skills: row.job_skills,
            apply_link: row.job_link,
        }
    }
}

/// The scraped dataset spells the work-from-home flag inconsistently.
fn is_remote(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1" | "remote"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, wfh: &str) -> RawJobRow {
        RawJobRow {
            job_title: title.to_string(),
            company_name: "Acme".to_string(),
            job_location: "Pune, India".to_string(),
            job_schedule_type: "Full-time".to_string(),
            job_work_from_home: wfh.to_string(),
            job_posted_date: "2024-11-02".to_string(),
            job_skills: "rust, sql".to_string(),
            job_link: "https://example.com/apply".to_string(),
        }
    }

    #[test]
    fn remote_flag_accepts_dataset_spellings() {
        assert!(JobRecord::from(row("Dev", "Yes")).remote);
        assert!(JobRecord::from(row("Dev", " true ")).remote);
        assert!(!JobRecord::from(row("Dev", "No")).remote);
        assert!(!JobRecord::from(row("Dev", "")).remote);
    }

    #[test]
    fn id_is_stable_for_identical_content() {
        let a = JobRecord::from(row("Data Engineer", "Yes"));
        let b = JobRecord::from(row("Data Engineer", "No"));
        // wfh is not part of the identity tuple
        assert_eq!(a.id, b.id);

        let c = JobRecord::from(row("Platform Engineer", "Yes"));
        assert_ne!(a.id, c.id);
    }
}
