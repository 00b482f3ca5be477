mod conf;
mod controller;
mod db;
mod model;
mod provider;
mod repository;
mod service;

use crate::{
    conf::Conf,
    provider::{AwesomeApi, QuoteProvider},
    repository::QuoteRecordRepository,
};
use anyhow::Result;
use rocket::{routes, Build, Rocket};
use tracing::info;

#[rocket::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let conf = Conf::new()?;
    info!(db_url = %conf.db_url, port = conf.port, "Starting up");

    let pool = db::pool(&conf.db_url)?;
    db::prepare_schema(&*pool.get()?)?;

    let provider: Box<dyn QuoteProvider> = Box::new(AwesomeApi::new(&conf.provider)?);
    info!(provider = %provider.name(), "Using quote provider");
    let repo = QuoteRecordRepository::new(pool);

    let figment = rocket::Config::figment().merge(("port", conf.port));
    prepare(rocket::custom(figment), conf, provider, repo)
        .launch()
        .await?;

    Ok(())
}

pub fn prepare(
    rocket: Rocket<Build>,
    conf: Conf,
    provider: Box<dyn QuoteProvider>,
    repo: QuoteRecordRepository,
) -> Rocket<Build> {
    rocket
        .manage(conf)
        .manage(provider)
        .manage(repo)
        .mount("/", routes![controller::quote::get])
}
