use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set, TransactionTrait};
use serde::Serialize;

use crate::models::student;

/// Represents a cohort (a named group of students following a shared
/// program and schedule) in the `cohorts` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "cohorts")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique, URL-friendly identifier (e.g. "ft-wd-paris-2026-01").
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Full field set accepted by create and edit. Every call supplies all
/// fields; there are no partial updates.
#[derive(Clone, Debug)]
pub struct CohortData {
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

impl Model {
    pub async fn create(db: &DatabaseConnection, data: CohortData) -> Result<Self, DbErr> {
        let now = Utc::now();

        let cohort = ActiveModel {
            id: NotSet,
            cohort_slug: Set(data.cohort_slug),
            cohort_name: Set(data.cohort_name),
            program: Set(data.program),
            format: Set(data.format),
            campus: Set(data.campus),
            start_date: Set(data.start_date),
            in_progress: Set(data.in_progress),
            program_manager: Set(data.program_manager),
            lead_teacher: Set(data.lead_teacher),
            total_hours: Set(data.total_hours),
            created_at: Set(now),
            updated_at: Set(now),
        };

        cohort.insert(db).await
    }

    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Replaces every mutable field of the cohort with the supplied set.
    ///
    /// Returns `Ok(None)` when no cohort with the given id exists.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        data: CohortData,
    ) -> Result<Option<Self>, DbErr> {
        let Some(existing) = Self::get_by_id(db, id).await? else {
            return Ok(None);
        };

        let mut cohort: ActiveModel = existing.into();
        cohort.cohort_slug = Set(data.cohort_slug);
        cohort.cohort_name = Set(data.cohort_name);
        cohort.program = Set(data.program);
        cohort.format = Set(data.format);
        cohort.campus = Set(data.campus);
        cohort.start_date = Set(data.start_date);
        cohort.in_progress = Set(data.in_progress);
        cohort.program_manager = Set(data.program_manager);
        cohort.lead_teacher = Set(data.lead_teacher);
        cohort.total_hours = Set(data.total_hours);
        cohort.updated_at = Set(Utc::now());

        cohort.update(db).await.map(Some)
    }

    /// Deletes the cohort and every student referencing it.
    ///
    /// Both deletes run inside one transaction so a failure cannot leave
    /// orphaned student rows behind. The students are removed whether or
    /// not a cohort row with this id actually existed.
    pub async fn delete_cascade(db: &DatabaseConnection, id: i64) -> Result<(), DbErr> {
        let txn = db.begin().await?;

        student::Entity::delete_many()
            .filter(student::Column::CohortId.eq(id))
            .exec(&txn)
            .await?;
        Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::{CohortData, Model as Cohort};
    use crate::models::student::{Model as Student, StudentData};
    use crate::test_utils::setup_test_db;
    use chrono::{TimeZone, Utc};

    fn sample_cohort(slug: &str) -> CohortData {
        CohortData {
            cohort_slug: slug.to_owned(),
            cohort_name: "FT Web Dev - Paris".to_owned(),
            program: "Web Dev".to_owned(),
            format: "Full Time".to_owned(),
            campus: "Paris".to_owned(),
            start_date: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
            in_progress: false,
            program_manager: "Sally Daher".to_owned(),
            lead_teacher: "Florian Aube".to_owned(),
            total_hours: 360,
        }
    }

    fn sample_student(cohort_id: Option<i64>) -> StudentData {
        StudentData {
            first_name: "Christine".to_owned(),
            last_name: "Clarke".to_owned(),
            email: "christine.clarke@example.com".to_owned(),
            phone: "123-456-7890".to_owned(),
            linkedin_url: None,
            languages: vec!["English".to_owned(), "Spanish".to_owned()],
            program: "Web Dev".to_owned(),
            background: None,
            image: None,
            cohort_id,
        }
    }

    #[tokio::test]
    async fn create_and_fetch_round_trip() {
        let db = setup_test_db().await;

        let created = Cohort::create(&db, sample_cohort("ft-wd-paris-2026-01"))
            .await
            .unwrap();
        let fetched = Cohort::get_by_id(&db, created.id).await.unwrap().unwrap();

        assert_eq!(fetched.cohort_slug, "ft-wd-paris-2026-01");
        assert_eq!(fetched.total_hours, 360);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let db = setup_test_db().await;

        Cohort::create(&db, sample_cohort("dup-slug")).await.unwrap();
        let second = Cohort::create(&db, sample_cohort("dup-slug")).await;

        assert!(second.is_err());
    }

    #[tokio::test]
    async fn edit_replaces_all_fields() {
        let db = setup_test_db().await;

        let created = Cohort::create(&db, sample_cohort("editable"))
            .await
            .unwrap();

        let mut replacement = sample_cohort("editable");
        replacement.cohort_name = "PT Data - Remote".to_owned();
        replacement.in_progress = true;
        replacement.total_hours = 400;

        let updated = Cohort::edit(&db, created.id, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.cohort_name, "PT Data - Remote");
        assert!(updated.in_progress);
        assert_eq!(updated.total_hours, 400);
    }

    #[tokio::test]
    async fn edit_missing_cohort_returns_none() {
        let db = setup_test_db().await;

        let result = Cohort::edit(&db, 9999, sample_cohort("ghost")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_cascades_to_students() {
        let db = setup_test_db().await;

        let cohort = Cohort::create(&db, sample_cohort("doomed")).await.unwrap();
        let other = Cohort::create(&db, sample_cohort("survivor")).await.unwrap();

        Student::create(&db, sample_student(Some(cohort.id)))
            .await
            .unwrap();
        Student::create(&db, sample_student(Some(cohort.id)))
            .await
            .unwrap();
        let kept = Student::create(&db, sample_student(Some(other.id)))
            .await
            .unwrap();

        Cohort::delete_cascade(&db, cohort.id).await.unwrap();

        assert!(Cohort::get_by_id(&db, cohort.id).await.unwrap().is_none());
        assert!(
            Student::get_by_cohort(&db, cohort.id)
                .await
                .unwrap()
                .is_empty()
        );

        let survivors = Student::get_by_cohort(&db, other.id).await.unwrap();
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].id, kept.id);
    }
}
