use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150003_create_students"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("students"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("first_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("last_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("email")).string().not_null())
                    .col(ColumnDef::new(Alias::new("phone")).string().not_null())
                    .col(ColumnDef::new(Alias::new("linkedin_url")).string().null())
                    .col(ColumnDef::new(Alias::new("languages")).json().not_null())
                    .col(ColumnDef::new(Alias::new("program")).string().not_null())
                    .col(ColumnDef::new(Alias::new("background")).string().null())
                    .col(ColumnDef::new(Alias::new("image")).string().null())
                    // Weak reference to cohorts.id; no FK so a cohort can vanish
                    // without invalidating existing student rows.
                    .col(ColumnDef::new(Alias::new("cohort_id")).big_integer().null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_cohort_id")
                    .table(Alias::new("students"))
                    .col(Alias::new("cohort_id"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("students")).to_owned())
            .await
    }
}
