use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202601150002_create_cohorts"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("cohorts"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("cohort_slug")).string().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("cohort_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("program")).string().not_null())
                    .col(ColumnDef::new(Alias::new("format")).string().not_null())
                    .col(ColumnDef::new(Alias::new("campus")).string().not_null())
                    .col(ColumnDef::new(Alias::new("start_date")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("in_progress")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("program_manager")).string().not_null())
                    .col(ColumnDef::new(Alias::new("lead_teacher")).string().not_null())
                    .col(ColumnDef::new(Alias::new("total_hours")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("cohorts")).to_owned())
            .await
    }
}
