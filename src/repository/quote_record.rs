use crate::model::QuoteRecord;
use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

/// Storage handle for quote records. Clones share the same pool, so one
/// instance can be handed to a blocking task while the original stays with
/// the request handler.
#[derive(Clone)]
pub struct QuoteRecordRepository {
    pool: Pool<SqliteConnectionManager>,
}

impl QuoteRecordRepository {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> QuoteRecordRepository {
        QuoteRecordRepository { pool }
    }

    pub fn insert(&self, row: &QuoteRecord) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO cotacoes (id, time, cotacao) VALUES (?, ?, ?)",
            params![row.id, row.time, row.bid],
        )?;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn select_all(&self) -> Result<Vec<QuoteRecord>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id, time, cotacao FROM cotacoes ORDER BY time")?;
        let rows = stmt.query_map([], |row| {
            Ok(QuoteRecord {
                id: row.get(0)?,
                time: row.get(1)?,
                bid: row.get(2)?,
            })
        })?;

        let mut records = vec![];
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod test {
    use crate::test;
    use anyhow::Result;

    #[test]
    fn insert_and_select_all() -> Result<()> {
        let (repo, _conn) = test::setup_db();
        assert!(repo.select_all()?.is_empty());

        let record = test::record();
        repo.insert(&record)?;

        assert_eq!(vec![record], repo.select_all()?);
        Ok(())
    }

    #[test]
    fn insert_keeps_identical_prices_in_distinct_rows() -> Result<()> {
        let (repo, _conn) = test::setup_db();

        let first = test::record();
        let second = test::record();
        assert_eq!(first.bid, second.bid);

        repo.insert(&first)?;
        repo.insert(&second)?;

        let rows = repo.select_all()?;
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].id, rows[1].id);
        Ok(())
    }

    #[test]
    fn insert_rejects_a_duplicate_id() -> Result<()> {
        let (repo, _conn) = test::setup_db();

        let record = test::record();
        repo.insert(&record)?;
        assert!(repo.insert(&record).is_err());
        Ok(())
    }
}
