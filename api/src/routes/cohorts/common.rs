use chrono::{DateTime, Utc};
use db::models::cohort::{CohortData, Model as CohortModel};
use serde::{Deserialize, Serialize};

/// Full cohort field set, accepted by both create and edit. Every call
/// supplies the whole set; absent optional flags fall back to defaults
/// rather than preserving stored values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortRequest {
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: String,
    pub format: String,
    pub campus: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub in_progress: bool,
    pub program_manager: String,
    pub lead_teacher: String,
    #[serde(default)]
    pub total_hours: i32,
}

impl From<CohortRequest> for CohortData {
    fn from(req: CohortRequest) -> Self {
        Self {
            cohort_slug: req.cohort_slug,
            cohort_name: req.cohort_name,
            program: req.program,
            format: req.format,
            campus: req.campus,
            start_date: req.start_date,
            in_progress: req.in_progress,
            program_manager: req.program_manager,
            lead_teacher: req.lead_teacher,
            total_hours: req.total_hours,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortResponse {
    pub id: i64,
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: String,
    pub format: String,
    pub campus: String,
    pub start_date: DateTime<Utc>,
    pub in_progress: bool,
    pub program_manager: String,
    pub lead_teacher: String,
    pub total_hours: i32,
}

impl From<CohortModel> for CohortResponse {
    fn from(cohort: CohortModel) -> Self {
        Self {
            id: cohort.id,
            cohort_slug: cohort.cohort_slug,
            cohort_name: cohort.cohort_name,
            program: cohort.program,
            format: cohort.format,
            campus: cohort.campus,
            start_date: cohort.start_date,
            in_progress: cohort.in_progress,
            program_manager: cohort.program_manager,
            lead_teacher: cohort.lead_teacher,
            total_hours: cohort.total_hours,
        }
    }
}
