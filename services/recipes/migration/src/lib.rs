use sea_orm_migration::prelude::*;

mod m20260901_000001_create_users;
mod m20260901_000002_create_recipes;
mod m20260901_000003_create_tags;
mod m20260901_000004_create_recipes_tags;
mod m20260901_000005_create_user_ratings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_users::Migration),
            Box::new(m20260901_000002_create_recipes::Migration),
            Box::new(m20260901_000003_create_tags::Migration),
            Box::new(m20260901_000004_create_recipes_tags::Migration),
            Box::new(m20260901_000005_create_user_ratings::Migration),
        ]
    }
}
