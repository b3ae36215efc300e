//! Response shapes produced by the analysis service.
//!
//! The gateway deserializes upstream bodies into these types before relaying
//! them, so a malformed upstream payload surfaces as a classified error
//! instead of leaking through to the client. Nothing here is ever stored.

use serde::{Deserialize, Serialize};

/// Result of a full resume analysis: extracted skills plus ranked job
/// recommendations. Relayed to the client as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_categories: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_score: Option<u32>,
    pub job_recommendations: Vec<JobRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    /// Display string, e.g. "87.5%".
    pub confidence: String,
    /// 0-100.
    pub match_score: u32,
    #[serde(default)]
    pub skills_matched: Vec<String>,
}

/// Compatibility between one resume and one job's required skills.
/// Recomputed upstream on every request; never cached here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub all_job_skills: Vec<String>,
    #[serde(default)]
    pub resume_skills: Vec<String>,
}

/// Wire envelope for the skill-match capability: `{"analysis": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEnvelope {
    pub analysis: MatchAnalysis,
}

/// Learning/career recommendations derived from a skill list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub recommendations: Vec<String>,
}
