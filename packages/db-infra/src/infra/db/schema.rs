use sea_orm::sea_query::{Table, TableCreateStatement};
use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::DbInfraError;

/// Reset a table to a pristine state: drop it if it exists, then create
/// it from the given statement.
///
/// The speculative drop is rendered as `DROP TABLE IF EXISTS`, so a
/// missing table is not an error. Anything else that fails here is fatal
/// to the caller.
pub async fn reset_table<C>(conn: &C, create: &TableCreateStatement) -> Result<(), DbInfraError>
where
    C: ConnectionTrait,
{
    let table = create
        .get_table_name()
        .cloned()
        .ok_or_else(|| DbInfraError::Schema {
            message: "create statement has no table name".to_string(),
        })?;

    let backend = conn.get_database_backend();

    let mut drop = Table::drop();
    drop.table(table).if_exists();
    conn.execute(backend.build(&drop))
        .await
        .map_err(|e| DbInfraError::Schema {
            message: format!("failed to drop table: {}", e),
        })?;

    conn.execute(backend.build(create))
        .await
        .map_err(|e| DbInfraError::Schema {
            message: format!("failed to create table: {}", e),
        })?;

    info!("schema_reset=done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::{Alias, ColumnDef, Table};
    use sea_orm::ConnectionTrait;

    use crate::config::db::DbProfile;
    use crate::infra::db::core::connect;

    use super::reset_table;

    fn widgets_table() -> sea_orm::sea_query::TableCreateStatement {
        Table::create()
            .table(Alias::new("widgets"))
            .col(
                ColumnDef::new(Alias::new("id"))
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Alias::new("val")).integer().not_null())
            .to_owned()
    }

    #[tokio::test]
    async fn reset_creates_a_missing_table() -> Result<(), Box<dyn std::error::Error>> {
        let conn = connect(&DbProfile::InMemory).await?;
        reset_table(&conn, &widgets_table()).await?;

        let backend = conn.get_database_backend();
        let rows = conn
            .query_all(sea_orm::Statement::from_string(
                backend,
                "SELECT id, val FROM widgets",
            ))
            .await?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn reset_discards_existing_rows() -> Result<(), Box<dyn std::error::Error>> {
        let conn = connect(&DbProfile::InMemory).await?;
        reset_table(&conn, &widgets_table()).await?;

        let backend = conn.get_database_backend();
        conn.execute(sea_orm::Statement::from_string(
            backend,
            "INSERT INTO widgets (val) VALUES (7)",
        ))
        .await?;

        reset_table(&conn, &widgets_table()).await?;
        let rows = conn
            .query_all(sea_orm::Statement::from_string(
                backend,
                "SELECT id FROM widgets",
            ))
            .await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
