use crate::{
    conf::Conf,
    model::{ApiResult, Quote},
    provider::QuoteProvider,
    repository::QuoteRecordRepository,
    service,
};
use rocket::{get, State};
use tracing::error;

/// A quote that was fetched but not recorded is still served: the response
/// was promised from the fetch, the row is an observation on the side.
#[get("/cotacao")]
pub async fn get(
    provider: &State<Box<dyn QuoteProvider>>,
    repo: &State<QuoteRecordRepository>,
    conf: &State<Conf>,
) -> ApiResult<Quote> {
    let result = service::quote::fetch_and_store(
        provider.inner().as_ref(),
        repo,
        conf.storage.persist_deadline(),
    )
    .await;

    ApiResult::new(result.map(|stored| {
        if let Err(e) = &stored.persisted {
            error!(provider = %provider.name(), %e, "Unable to persist quote");
        }
        stored.quote
    }))
}
