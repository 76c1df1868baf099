pub use sea_orm_migration::prelude::*;

pub mod m20250301_090000_users;
pub mod m20250301_091500_exercises;
pub mod m20250302_180000_workouts;
mod m20250310_071200_body_metrics;
mod m20250412_203000_alter_workouts_completion;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_090000_users::Migration),
            Box::new(m20250301_091500_exercises::Migration),
            Box::new(m20250302_180000_workouts::Migration),
            Box::new(m20250310_071200_body_metrics::Migration),
            Box::new(m20250412_203000_alter_workouts_completion::Migration),
        ]
    }
}
