pub mod quote_record;
pub use quote_record::QuoteRecordRepository;
