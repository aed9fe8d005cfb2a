use db::models::cohort::Model as CohortModel;
use db::models::student::{Model as StudentModel, StudentData};
use serde::{Deserialize, Serialize};

use crate::routes::cohorts::common::CohortResponse;

/// Full student field set, accepted by both create and edit. `cohort` is
/// the id of the referenced cohort; the reference is weak, so no check is
/// made that the cohort exists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub program: String,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<i64>,
}

impl From<StudentRequest> for StudentData {
    fn from(req: StudentRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            linkedin_url: req.linkedin_url,
            languages: req.languages,
            program: req.program,
            background: req.background,
            image: req.image,
            cohort_id: req.cohort,
        }
    }
}

/// Student representation with the cohort left as a raw id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub languages: Vec<String>,
    pub program: String,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<i64>,
}

impl From<StudentModel> for StudentResponse {
    fn from(student: StudentModel) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone: student.phone,
            linkedin_url: student.linkedin_url,
            languages: student.languages.0,
            program: student.program,
            background: student.background,
            image: student.image,
            cohort: student.cohort_id,
        }
    }
}

/// Student representation with the cohort reference populated into the
/// full cohort document, used by the list endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedStudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub languages: Vec<String>,
    pub program: String,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<CohortResponse>,
}

impl From<(StudentModel, Option<CohortModel>)> for PopulatedStudentResponse {
    fn from((student, cohort): (StudentModel, Option<CohortModel>)) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone: student.phone,
            linkedin_url: student.linkedin_url,
            languages: student.languages.0,
            program: student.program,
            background: student.background,
            image: student.image,
            cohort: cohort.map(CohortResponse::from),
        }
    }
}
