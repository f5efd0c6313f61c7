pub use sea_orm_migration::prelude::*;

mod m20250801_create_students_table;
mod m20250801_add_student_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_create_students_table::Migration),
            Box::new(m20250801_add_student_indexes::Migration),
        ]
    }
}
