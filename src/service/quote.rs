use crate::{
    model::{Quote, QuoteRecord},
    provider::QuoteProvider,
    repository::QuoteRecordRepository,
};
use anyhow::{anyhow, Result};
use rocket::tokio::{task::spawn_blocking, time::timeout};
use std::convert::TryFrom;
use std::time::Duration;

/// A fetched quote plus the outcome of storing it. The two are separate on
/// purpose: once the quote is in hand it is returned to the caller whether
/// or not the insert went through, and the caller decides what to do with
/// a failed insert.
pub struct StoredQuote {
    pub quote: Quote,
    pub persisted: Result<()>,
}

pub async fn fetch_and_store(
    provider: &dyn QuoteProvider,
    repo: &QuoteRecordRepository,
    persist_deadline: Duration,
) -> Result<StoredQuote> {
    let quote = provider.fetch_latest().await?;
    let persisted = persist(&quote, repo, persist_deadline).await;

    Ok(StoredQuote { quote, persisted })
}

/// The deadline starts here, after the fetch has finished; the two budgets
/// are independent. On expiry the insert is abandoned, not interrupted: a
/// row may still land after the deadline, but the caller sees a failure.
async fn persist(
    quote: &Quote,
    repo: &QuoteRecordRepository,
    deadline: Duration,
) -> Result<()> {
    let record = QuoteRecord::try_from(quote)?;
    let repo = repo.clone();

    match timeout(deadline, spawn_blocking(move || repo.insert(&record))).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Err(anyhow!(
            "quote was not persisted within {}ms",
            deadline.as_millis()
        )),
    }
}

#[cfg(test)]
mod test {
    use super::fetch_and_store;
    use crate::test;
    use std::time::Duration;

    const DEADLINE: Duration = Duration::from_millis(200);

    #[rocket::async_test]
    async fn fetch_and_store_inserts_one_row() {
        let (repo, _conn) = test::setup_db();
        let provider = test::provider();

        let stored = fetch_and_store(&provider, &repo, DEADLINE).await.unwrap();

        assert!(stored.persisted.is_ok());
        assert_eq!(stored.quote, test::quote());

        let rows = repo.select_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].bid, stored.quote.bid);
    }

    #[rocket::async_test]
    async fn fetch_failure_is_an_error() {
        let (repo, _conn) = test::setup_db();
        let provider = test::failing_provider();

        assert!(fetch_and_store(&provider, &repo, DEADLINE).await.is_err());
        assert!(repo.select_all().unwrap().is_empty());
    }

    #[rocket::async_test]
    async fn persist_failure_still_yields_the_quote() {
        let (repo, conn) = test::setup_db();
        conn.execute_batch("DROP TABLE cotacoes").unwrap();
        let provider = test::provider();

        let stored = fetch_and_store(&provider, &repo, DEADLINE).await.unwrap();

        assert!(stored.persisted.is_err());
        assert_eq!(stored.quote, test::quote());
    }

    #[rocket::async_test]
    async fn malformed_create_date_fails_the_persist_step_only() {
        let (repo, _conn) = test::setup_db();
        let mut quote = test::quote();
        quote.create_date = "not a date".to_string();
        let provider = test::provider_with(quote.clone());

        let stored = fetch_and_store(&provider, &repo, DEADLINE).await.unwrap();

        assert!(stored.persisted.is_err());
        assert_eq!(stored.quote, quote);
        assert!(repo.select_all().unwrap().is_empty());
    }
}
