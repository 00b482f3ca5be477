use rocket::serde::{Deserialize, Serialize};

/// One exchange rate snapshot, exactly as the upstream API emits it.
/// Prices are strings upstream and stay strings here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Quote {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// The upstream payload wraps the snapshot in an object keyed by the
/// currency pair.
#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct QuoteEnvelope {
    #[serde(rename = "USDBRL")]
    pub quote: Quote,
}
