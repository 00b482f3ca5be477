//! Single-shot client: asks the local server for the current quote and
//! appends the bid to a text file. Any failure is fatal; the output file is
//! only touched on a fully successful run.

use anyhow::Result;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::process::exit;
use std::time::Duration;
use tracing::{error, info};

/// The one field this program cares about; the rest of the payload is
/// ignored on decode.
#[derive(Debug, Deserialize)]
struct Cotacao {
    bid: String,
}

#[derive(Deserialize)]
struct ConfFile {
    client: ClientConf,
}

#[derive(Deserialize)]
struct ClientConf {
    url: String,
    request_deadline_ms: u64,
    output_file: String,
}

impl ClientConf {
    fn new() -> Result<ClientConf> {
        let default_conf = include_bytes!("../../cotacao.conf");
        let default_conf = String::from_utf8_lossy(default_conf);

        let conf: ConfFile = Figment::new()
            .merge(Toml::string(&default_conf))
            .merge(Toml::file("cotacao.conf"))
            .extract()?;

        Ok(conf.client)
    }

    fn request_deadline(&self) -> Duration {
        Duration::from_millis(self.request_deadline_ms)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let conf = ClientConf::new().unwrap_or_else(|e| {
        error!(%e, "Unable to load configuration");
        exit(1);
    });

    let quote = fetch_quote(&conf).await.unwrap_or_else(|e| {
        error!(%e, url = %conf.url, "Unable to fetch quote from server");
        exit(1);
    });

    append_rate(Path::new(&conf.output_file), &quote.bid).unwrap_or_else(|e| {
        error!(%e, file = %conf.output_file, "Unable to write output file");
        exit(1);
    });

    info!(bid = %quote.bid, file = %conf.output_file, "Saved quote");
}

async fn fetch_quote(conf: &ClientConf) -> Result<Cotacao> {
    let client = reqwest::Client::builder()
        .timeout(conf.request_deadline())
        .build()?;

    let quote = client
        .get(&conf.url)
        .send()
        .await?
        .error_for_status()?
        .json::<Cotacao>()
        .await?;

    Ok(quote)
}

/// Appends, never truncates. Earlier runs' lines stay in place.
fn append_rate(path: &Path, bid: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Dolar: {}", bid)?;
    Ok(())
}
