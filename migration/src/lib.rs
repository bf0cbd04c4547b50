pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_member_table;
mod m20250601_000002_create_role_table;
mod m20250601_000003_create_member_role_table;
mod m20250601_000004_create_channel_permission_table;
mod m20250601_000005_create_activity_table;
mod m20250601_000006_create_handled_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_member_table::Migration),
            Box::new(m20250601_000002_create_role_table::Migration),
            Box::new(m20250601_000003_create_member_role_table::Migration),
            Box::new(m20250601_000004_create_channel_permission_table::Migration),
            Box::new(m20250601_000005_create_activity_table::Migration),
            Box::new(m20250601_000006_create_handled_payment_table::Migration),
        ]
    }
}
