use anyhow::Result;
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::time::Duration;

/// Runtime configuration. Defaults are embedded at compile time; a
/// `cotacao.conf` in the working directory overrides individual keys.
#[derive(Deserialize)]
pub struct Conf {
    pub db_url: String,
    pub port: u16,
    pub provider: ProviderConf,
    pub storage: StorageConf,
}

#[derive(Deserialize)]
pub struct ProviderConf {
    pub url: String,
    pub fetch_deadline_ms: u64,
}

#[derive(Deserialize)]
pub struct StorageConf {
    pub persist_deadline_ms: u64,
}

impl Conf {
    pub fn new() -> Result<Conf> {
        let default_conf = include_bytes!("../cotacao.conf");
        let default_conf = String::from_utf8_lossy(default_conf);

        let conf: Conf = Figment::new()
            .merge(Toml::string(&default_conf))
            .merge(Toml::file("cotacao.conf"))
            .extract()?;

        Ok(conf)
    }
}

impl ProviderConf {
    pub fn fetch_deadline(&self) -> Duration {
        Duration::from_millis(self.fetch_deadline_ms)
    }
}

impl StorageConf {
    pub fn persist_deadline(&self) -> Duration {
        Duration::from_millis(self.persist_deadline_ms)
    }
}

#[cfg(test)]
mod test {
    use super::Conf;
    use anyhow::Result;
    use std::time::Duration;

    #[test]
    fn new_loads_embedded_defaults() -> Result<()> {
        let conf = Conf::new()?;
        assert_eq!(conf.port, 8080);
        assert!(conf.provider.url.ends_with("/json/last/USD-BRL"));
        assert_eq!(conf.provider.fetch_deadline(), Duration::from_millis(200));
        assert_eq!(conf.storage.persist_deadline(), Duration::from_millis(200));
        Ok(())
    }
}
