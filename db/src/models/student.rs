use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use crate::models::cohort;

/// Spoken languages, stored as a JSON array in a single column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Languages(pub Vec<String>);

/// Represents a student in the `students` table.
///
/// `cohort_id` is a weak reference to `cohorts.id`: it is used for lookups
/// only and is not enforced by a foreign key constraint.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub languages: Languages,
    pub program: String,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cohort::Entity",
        from = "Column::CohortId",
        to = "super::cohort::Column::Id"
    )]
    Cohort,
}

impl Related<super::cohort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cohort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Full field set accepted by create and edit. Every call supplies all
/// fields; there are no partial updates.
#[derive(Clone, Debug)]
pub struct StudentData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub languages: Vec<String>,
    pub program: String,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort_id: Option<i64>,
}

impl Model {
    pub async fn create(db: &DatabaseConnection, data: StudentData) -> Result<Self, DbErr> {
        let now = Utc::now();

        let student = ActiveModel {
            id: NotSet,
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            phone: Set(data.phone),
            linkedin_url: Set(data.linkedin_url),
            languages: Set(Languages(data.languages)),
            program: Set(data.program),
            background: Set(data.background),
            image: Set(data.image),
            cohort_id: Set(data.cohort_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        student.insert(db).await
    }

    /// Returns all students, each paired with its cohort when the
    /// reference resolves.
    pub async fn get_all_with_cohorts(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Self, Option<cohort::Model>)>, DbErr> {
        Entity::find().find_also_related(cohort::Entity).all(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn get_by_cohort(db: &DatabaseConnection, cohort_id: i64) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::CohortId.eq(cohort_id))
            .all(db)
            .await
    }

    /// Replaces every mutable field of the student with the supplied set.
    ///
    /// Returns `Ok(None)` when no student with the given id exists.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        data: StudentData,
    ) -> Result<Option<Self>, DbErr> {
        let Some(existing) = Self::get_by_id(db, id).await? else {
            return Ok(None);
        };

        let mut student: ActiveModel = existing.into();
        student.first_name = Set(data.first_name);
        student.last_name = Set(data.last_name);
        student.email = Set(data.email);
        student.phone = Set(data.phone);
        student.linkedin_url = Set(data.linkedin_url);
        student.languages = Set(Languages(data.languages));
        student.program = Set(data.program);
        student.background = Set(data.background);
        student.image = Set(data.image);
        student.cohort_id = Set(data.cohort_id);
        student.updated_at = Set(Utc::now());

        student.update(db).await.map(Some)
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Model as Student, StudentData};
    use crate::models::cohort::{CohortData, Model as Cohort};
    use crate::test_utils::setup_test_db;
    use chrono::{TimeZone, Utc};

    fn sample_student(email: &str, cohort_id: Option<i64>) -> StudentData {
        StudentData {
            first_name: "Leonie".to_owned(),
            last_name: "Feldman".to_owned(),
            email: email.to_owned(),
            phone: "555-0100".to_owned(),
            linkedin_url: Some("https://linkedin.com/in/leoniefeldman".to_owned()),
            languages: vec!["English".to_owned(), "German".to_owned()],
            program: "UX/UI".to_owned(),
            background: Some("Industrial design".to_owned()),
            image: None,
            cohort_id,
        }
    }

    fn sample_cohort(slug: &str) -> CohortData {
        CohortData {
            cohort_slug: slug.to_owned(),
            cohort_name: "FT UX/UI - Berlin".to_owned(),
            program: "UX/UI".to_owned(),
            format: "Full Time".to_owned(),
            campus: "Berlin".to_owned(),
            start_date: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            in_progress: false,
            program_manager: "Ines Figueroa".to_owned(),
            lead_teacher: "Marc Delalonde".to_owned(),
            total_hours: 360,
        }
    }

    #[tokio::test]
    async fn create_and_fetch_round_trip() {
        let db = setup_test_db().await;

        let created = Student::create(&db, sample_student("round@trip.com", None))
            .await
            .unwrap();
        let fetched = Student::get_by_id(&db, created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.languages.0, vec!["English", "German"]);
        assert_eq!(
            fetched.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/leoniefeldman")
        );
    }

    #[tokio::test]
    async fn get_by_cohort_filters_on_reference() {
        let db = setup_test_db().await;

        let cohort = Cohort::create(&db, sample_cohort("ux-berlin")).await.unwrap();
        Student::create(&db, sample_student("in@cohort.com", Some(cohort.id)))
            .await
            .unwrap();
        Student::create(&db, sample_student("out@cohort.com", None))
            .await
            .unwrap();

        let members = Student::get_by_cohort(&db, cohort.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].email, "in@cohort.com");
    }

    #[tokio::test]
    async fn populate_resolves_cohort_reference() {
        let db = setup_test_db().await;

        let cohort = Cohort::create(&db, sample_cohort("populated")).await.unwrap();
        Student::create(&db, sample_student("joined@cohort.com", Some(cohort.id)))
            .await
            .unwrap();
        Student::create(&db, sample_student("lone@cohort.com", None))
            .await
            .unwrap();

        let all = Student::get_all_with_cohorts(&db).await.unwrap();
        assert_eq!(all.len(), 2);

        let joined = all.iter().find(|(s, _)| s.email == "joined@cohort.com").unwrap();
        assert_eq!(joined.1.as_ref().map(|c| c.id), Some(cohort.id));

        let lone = all.iter().find(|(s, _)| s.email == "lone@cohort.com").unwrap();
        assert!(lone.1.is_none());
    }

    #[tokio::test]
    async fn edit_replaces_all_fields() {
        let db = setup_test_db().await;

        let created = Student::create(&db, sample_student("edit@me.com", None))
            .await
            .unwrap();

        let mut replacement = sample_student("edited@me.com", None);
        replacement.linkedin_url = None;
        replacement.languages = vec!["French".to_owned()];

        let updated = Student::edit(&db, created.id, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.email, "edited@me.com");
        assert!(updated.linkedin_url.is_none());
        assert_eq!(updated.languages.0, vec!["French"]);
    }

    #[tokio::test]
    async fn delete_by_id_is_idempotent() {
        let db = setup_test_db().await;

        let created = Student::create(&db, sample_student("gone@soon.com", None))
            .await
            .unwrap();

        Student::delete_by_id(&db, created.id).await.unwrap();
        assert!(Student::get_by_id(&db, created.id).await.unwrap().is_none());

        // Deleting an already-absent row is still Ok.
        Student::delete_by_id(&db, created.id).await.unwrap();
    }
}
