pub mod entity;

use db_infra::{connect, reset_table, DbInfraError, DbProfile};
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};

/// Connect to the test database and reset the `custom_types` table:
/// drop it if it exists, then create it fresh.
pub async fn connect_with_schema() -> Result<DatabaseConnection, DbInfraError> {
    test_support::test_logging::init();

    let conn = connect(&DbProfile::from_env()).await?;
    let schema = Schema::new(conn.get_database_backend());
    let create = schema.create_table_from_entity(entity::Entity);
    reset_table(&conn, &create).await?;
    Ok(conn)
}
