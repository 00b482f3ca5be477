use crate::{
    conf::ProviderConf,
    model::{Quote, QuoteEnvelope},
    provider::QuoteProvider,
};
use anyhow::Result;

/// AwesomeAPI currency quotes. Every request re-fetches; nothing is cached.
pub struct AwesomeApi {
    client: reqwest::Client,
    url: String,
}

impl AwesomeApi {
    pub fn new(conf: &ProviderConf) -> Result<AwesomeApi> {
        let client = reqwest::Client::builder()
            .timeout(conf.fetch_deadline())
            .build()?;

        Ok(AwesomeApi {
            client,
            url: conf.url.clone(),
        })
    }
}

#[rocket::async_trait]
impl QuoteProvider for AwesomeApi {
    fn name(&self) -> String {
        "awesomeapi".into()
    }

    async fn fetch_latest(&self) -> Result<Quote> {
        let envelope = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<QuoteEnvelope>()
            .await?;

        Ok(envelope.quote)
    }
}
