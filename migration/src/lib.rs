pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20251019_000001_url_records;

pub use m20251019_000001_url_records::URL_MAX_LENGTH;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251019_000001_url_records::Migration)]
    }
}
