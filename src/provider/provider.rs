use crate::model::Quote;
use anyhow::Result;

/// Source of exchange rate snapshots. The deadline for a fetch belongs to
/// the implementation, so every call site sees one error class for
/// transport, timeout and decode failures alike.
#[rocket::async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> String;

    async fn fetch_latest(&self) -> Result<Quote>;
}
