use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::FatherName).string().not_null())
                    .col(ColumnDef::new(Students::FatherNumber).string().not_null())
                    .col(ColumnDef::new(Students::Cnic).string().not_null())
                    .col(ColumnDef::new(Students::Qualification).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::Phone).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::Address).text().not_null())
                    .col(ColumnDef::new(Students::City).string().not_null())
                    .col(ColumnDef::new(Students::BirthDate).date().not_null())
                    // JSON array of course titles
                    .col(ColumnDef::new(Students::Courses).json().not_null())
                    .col(ColumnDef::new(Students::Priority1).string())
                    .col(ColumnDef::new(Students::Priority2).string())
                    // JSON object of course title -> slot
                    .col(ColumnDef::new(Students::CourseSlots).json().not_null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum Students {
    Table,
    Id,
    Name,
    FatherName,
    FatherNumber,
    Cnic,
    Qualification,
    Gender,
    Phone,
    Email,
    Address,
    City,
    BirthDate,
    Courses,
    Priority1,
    Priority2,
    CourseSlots,
    CreatedAt,
    UpdatedAt,
}
