use crate::model::{Id, Quote};
use chrono::NaiveDateTime;
use std::convert::TryFrom;

/// Upstream emits `create_date` in this shape, e.g. "2024-01-30 18:00:00".
const CREATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The persisted form of a quote. Written once, never updated.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteRecord {
    pub id: Id,
    pub time: NaiveDateTime,
    pub bid: String,
}

impl TryFrom<&Quote> for QuoteRecord {
    type Error = chrono::ParseError;

    fn try_from(quote: &Quote) -> Result<QuoteRecord, Self::Error> {
        Ok(QuoteRecord {
            id: Id::new(),
            time: NaiveDateTime::parse_from_str(&quote.create_date, CREATE_DATE_FORMAT)?,
            bid: quote.bid.clone(),
        })
    }
}
