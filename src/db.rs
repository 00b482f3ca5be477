use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

pub fn pool(db_url: &str) -> Result<Pool<SqliteConnectionManager>> {
    let manager = SqliteConnectionManager::file(db_url);
    Ok(Pool::new(manager)?)
}

/// Idempotent, runs on every startup. The id is generated per insert, so
/// two quotes with the same price still occupy distinct rows.
pub fn prepare_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cotacoes (
            id TEXT NOT NULL PRIMARY KEY,
            time DATETIME NOT NULL,
            cotacao TEXT
        )
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::db;
    use anyhow::Result;
    use rusqlite::Connection;

    #[test]
    fn prepare_schema_is_idempotent() -> Result<()> {
        let conn = Connection::open_in_memory()?;
        db::prepare_schema(&conn)?;
        db::prepare_schema(&conn)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM cotacoes", [], |row| row.get(0))?;
        assert_eq!(count, 0);
        Ok(())
    }
}
